//! Offline support ports

pub mod ports;

pub use ports::{ActionQueue, ConnectivityMonitor};

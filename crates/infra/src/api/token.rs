//! Credential store for the API bearer token
//!
//! Single in-memory source of truth for the current token. The
//! authentication flow (external to this layer) populates it after login
//! and clears it on logout or detected invalidation; header composition
//! reflects the new value on the next request, with no caller notified.

use std::fmt;

use parking_lot::RwLock;

/// Injectable holder for the current bearer token.
///
/// Shared by reference (`Arc`) between the authentication flow and the
/// header composer, so tests can isolate token state per test case.
#[derive(Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    /// Create an empty store (process-start state).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current token unconditionally. No shape validation is
    /// performed; later writes replace, never merge.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    /// Current token, if any. Pure read.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Clear the token (logout / invalidation).
    pub fn clear(&self) {
        self.set_token(None);
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.token.read().is_some() { "<set>" } else { "<empty>" };
        f.debug_struct("TokenStore").field("token", &state).finish()
    }
}

//! API client with transparent auth injection and offline deferral
//!
//! Performs the network call for requests the connectivity gate allows
//! through, and normalizes the outcome (success payload, HTTP error,
//! transport error) into the [`ApiError`] taxonomy. Holds no state between
//! calls and issues exactly one network call per invocation.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};
use vigie_core::{ActionQueue, ConnectivityMonitor};
use vigie_domain::{ApiConfig, VigieError};

use super::errors::ApiError;
use super::headers::compose_headers;
use super::offline::OfflineGate;
use super::token::TokenStore;
use crate::http::HttpClient;

/// Configuration for the API client
#[derive(Debug, Clone, Default)]
pub struct ApiClientConfig {
    /// API section of the application configuration
    pub api: ApiConfig,
}

impl ApiClientConfig {
    /// Base URL the client dispatches against.
    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }
}

impl From<ApiConfig> for ApiClientConfig {
    fn from(api: ApiConfig) -> Self {
        Self { api }
    }
}

/// Body of an outgoing request
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body
    None,
    /// Structured value, serialized as UTF-8 JSON text
    Json(Value),
    /// Raw bytes, sent as-is (binary/multipart payloads)
    Raw(Vec<u8>),
}

/// One outgoing request, before header composition.
///
/// The method defaults to GET when unspecified.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    path: String,
    method: Method,
    headers: HeaderMap,
    body: RequestBody,
}

impl ApiRequest {
    /// Request for a service-relative path, defaulting to GET with no body.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::GET,
            headers: HeaderMap::new(),
            body: RequestBody::None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a structured body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Attach a raw-bytes body.
    pub fn raw(mut self, body: Vec<u8>) -> Self {
        self.body = RequestBody::Raw(body);
        self
    }
}

/// Normalized success payload: a structured value when the response
/// declares a JSON content type, otherwise the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Decode the payload into a concrete type.
    ///
    /// No implicit schema validation is performed; type correctness is the
    /// caller's responsibility.
    ///
    /// # Errors
    /// Returns `ApiError::Decode` if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let value = match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        };
        serde_json::from_value(value)
            .map_err(|err| ApiError::Decode(format!("failed to decode response: {err}")))
    }
}

/// API client for the Vigie backend
pub struct ApiClient {
    http_client: HttpClient,
    tokens: Arc<TokenStore>,
    gate: OfflineGate,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the HTTP transport cannot be built.
    pub fn new(
        config: ApiClientConfig,
        tokens: Arc<TokenStore>,
        queue: Arc<dyn ActionQueue>,
        monitor: Arc<dyn ConnectivityMonitor>,
    ) -> Result<Self, ApiError> {
        let http_client = HttpClient::new()
            .map_err(|e| ApiError::Config(format!("failed to build HttpClient: {e}")))?;

        Ok(Self { http_client, tokens, gate: OfflineGate::new(queue, monitor), config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Credential store consulted on every request.
    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Dispatch one request and normalize the outcome.
    ///
    /// # Errors
    /// - `ApiError::OfflineQueued` - mutating call while offline, durably
    ///   saved for later replay
    /// - `ApiError::Network` - transport failure; the message names the
    ///   configured base URL
    /// - `ApiError::Http` - non-success status, with a best-effort message
    /// - `ApiError::Decode` - success body did not parse per its declared
    ///   content type
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute(&self, request: ApiRequest) -> Result<Payload, ApiError> {
        let url = format!("{}{}", self.config.base_url(), request.path);

        self.gate.admit(&request.method, &url, &request.body).await?;

        let headers = compose_headers(&request.headers, &request.body, &self.tokens)?;

        debug!(url = %url, "dispatching request");

        let mut builder = self.http_client.request(request.method, &url).headers(headers);
        builder = match request.body {
            RequestBody::None => builder,
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(&value)
                    .map_err(|e| ApiError::Config(format!("failed to serialize body: {e}")))?;
                builder.body(bytes)
            }
            RequestBody::Raw(bytes) => builder.body(bytes),
        };

        let response = self.http_client.send(builder).await.map_err(|err| match err {
            VigieError::Network(msg) => ApiError::Network(format!(
                "Cannot reach API at {}: {msg}",
                self.config.base_url()
            )),
            other => ApiError::from(other),
        })?;

        self.classify_response(response).await
    }

    /// Execute a GET request and decode the JSON response.
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// decoded into `T`.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(path)).await?.decode()
    }

    /// Execute a POST request with a JSON body and decode the response.
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// decoded into `T`.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::new(path).method(Method::POST).json(to_json(body)?);
        self.execute(request).await?.decode()
    }

    /// Execute a PUT request with a JSON body and decode the response.
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// decoded into `T`.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::new(path).method(Method::PUT).json(to_json(body)?);
        self.execute(request).await?.decode()
    }

    /// Execute a PATCH request with a JSON body and decode the response.
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// decoded into `T`.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::new(path).method(Method::PATCH).json(to_json(body)?);
        self.execute(request).await?.decode()
    }

    /// Execute a DELETE request and decode the response.
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// decoded into `T`.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::new(path).method(Method::DELETE)).await?.decode()
    }

    /// Normalize a received response into a payload or a classified error.
    async fn classify_response(&self, response: Response) -> Result<Payload, ApiError> {
        let status = response.status();
        let is_json = declares_json(response.headers());

        // Reading the body can still fail at the transport level.
        let text = response.text().await.map_err(|err| {
            ApiError::Network(format!(
                "Cannot reach API at {}: {err}",
                self.config.base_url()
            ))
        })?;

        if !status.is_success() {
            let message = extract_error_message(status, is_json, &text);
            debug!(status = status.as_u16(), message = %message, "request failed");
            return Err(ApiError::Http { status: status.as_u16(), message });
        }

        if is_json {
            let value: Value = serde_json::from_str(&text).map_err(|err| {
                ApiError::Decode(format!("response declared JSON but did not parse: {err}"))
            })?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Text(text))
        }
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Config(format!("failed to serialize body: {e}")))
}

/// Whether the response headers declare a JSON content type.
fn declares_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json") || ct.contains("+json"))
}

/// Best-effort extraction of a human-readable error message.
///
/// JSON bodies yield their `message` or `detail` field when present, else
/// the full body text. Empty bodies fall back to "HTTP <status>"; a body
/// that fails to decode falls back to "HTTP <status>: <status text>". The
/// result is never empty.
fn extract_error_message(status: StatusCode, is_json: bool, body: &str) -> String {
    let generic = || match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {reason}", status.as_u16()),
        None => format!("HTTP {}", status.as_u16()),
    };

    if is_json {
        return match serde_json::from_str::<Value>(body) {
            Ok(value) => value
                .get("message")
                .or_else(|| value.get("detail"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => generic(),
        };
    }

    if body.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        body.to_string()
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    tokens: Option<Arc<TokenStore>>,
    queue: Option<Arc<dyn ActionQueue>>,
    monitor: Option<Arc<dyn ConnectivityMonitor>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the credential store
    pub fn tokens(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the durable action queue
    pub fn queue(mut self, queue: Arc<dyn ActionQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Set the connectivity monitor
    pub fn monitor(mut self, monitor: Arc<dyn ConnectivityMonitor>) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    /// Returns `ApiError::Config` if required collaborators are missing or
    /// the transport cannot be built.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let tokens = self.tokens.unwrap_or_default();
        let queue =
            self.queue.ok_or_else(|| ApiError::Config("Action queue not set".to_string()))?;
        let monitor = self
            .monitor
            .ok_or_else(|| ApiError::Config("Connectivity monitor not set".to_string()))?;

        ApiClient::new(config, tokens, queue, monitor)
    }
}

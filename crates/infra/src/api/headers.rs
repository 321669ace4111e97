//! Header composition for outgoing API requests
//!
//! Builds the final header map from caller-supplied headers, the body
//! shape, and the current credential. The caller's map is never mutated.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::client::RequestBody;
use super::errors::ApiError;
use super::token::TokenStore;

/// Compose the final headers for one outgoing request.
///
/// - Raw-bytes bodies with no explicit `Content-Type` get none, so the
///   transport can derive it (preserves multipart boundary behavior).
/// - Structured or absent bodies with no explicit `Content-Type` get
///   `application/json`.
/// - A stored token adds `Authorization: Bearer <token>`, superseding any
///   caller-supplied authorization header. Preserved source behavior:
///   system credentials win over caller overrides.
///
/// # Errors
/// Returns `ApiError::Config` if the stored token cannot be encoded as a
/// header value.
pub fn compose_headers(
    caller: &HeaderMap,
    body: &RequestBody,
    tokens: &TokenStore,
) -> Result<HeaderMap, ApiError> {
    let mut headers = caller.clone();

    if !headers.contains_key(CONTENT_TYPE) {
        match body {
            // Let the transport derive the content type for raw payloads.
            RequestBody::Raw(_) => {}
            RequestBody::None | RequestBody::Json(_) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
        }
    }

    if let Some(token) = tokens.token() {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| ApiError::Config(format!("token is not a valid header value: {err}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_body_gets_json_content_type() {
        let headers = compose_headers(
            &HeaderMap::new(),
            &RequestBody::Json(json!({"a": 1})),
            &TokenStore::new(),
        )
        .unwrap();

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn absent_body_gets_json_content_type() {
        let headers =
            compose_headers(&HeaderMap::new(), &RequestBody::None, &TokenStore::new()).unwrap();

        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn raw_body_gets_no_content_type() {
        let headers =
            compose_headers(&HeaderMap::new(), &RequestBody::Raw(vec![0, 1, 2]), &TokenStore::new())
                .unwrap();

        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn caller_content_type_is_never_overridden() {
        let mut caller = HeaderMap::new();
        caller.insert(CONTENT_TYPE, HeaderValue::from_static("text/csv"));

        for body in
            [RequestBody::None, RequestBody::Json(json!({})), RequestBody::Raw(vec![1, 2, 3])]
        {
            let headers = compose_headers(&caller, &body, &TokenStore::new()).unwrap();
            assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/csv");
        }
    }

    #[test]
    fn authorization_present_iff_token_set() {
        let tokens = TokenStore::new();

        let headers = compose_headers(&HeaderMap::new(), &RequestBody::None, &tokens).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());

        tokens.set_token(Some("jwt-123".to_string()));
        let headers = compose_headers(&HeaderMap::new(), &RequestBody::None, &tokens).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer jwt-123");

        tokens.clear();
        let headers = compose_headers(&HeaderMap::new(), &RequestBody::None, &tokens).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn stored_token_supersedes_caller_authorization() {
        let mut caller = HeaderMap::new();
        caller.insert(AUTHORIZATION, HeaderValue::from_static("Bearer caller-token"));

        let tokens = TokenStore::new();
        tokens.set_token(Some("system-token".to_string()));

        let headers = compose_headers(&caller, &RequestBody::None, &tokens).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer system-token");
    }

    #[test]
    fn caller_map_is_not_mutated() {
        let caller = HeaderMap::new();
        let tokens = TokenStore::new();
        tokens.set_token(Some("jwt".to_string()));

        let _ = compose_headers(&caller, &RequestBody::None, &tokens).unwrap();
        assert!(caller.is_empty());
    }
}

use axum::extract::Request;
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::ApiError;

const BEARER_PREFIX: &[u8] = b"Bearer ";

/// Placeholder rejection until tokens are checked against the identity provider.
const INVALID_TOKEN: &[u8] = b"invalid";

/// Raw `Authorization` bytes; `None` when the header is absent or empty.
///
/// Tokens are opaque, so non-ASCII (obs-text) bytes are kept as-is.
pub fn extract_token(headers: &HeaderMap) -> Option<&[u8]> {
    headers
        .get(header::AUTHORIZATION)
        .map(|value| value.as_bytes())
        .filter(|value| !value.is_empty())
}

pub fn verify_token(raw: Option<&[u8]>) -> Result<(), ApiError> {
    let raw = raw.ok_or_else(|| ApiError::Unauthorized("No token provided".into()))?;
    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);
    if token == INVALID_TOKEN {
        return Err(ApiError::Unauthorized("Invalid token".into()));
    }
    Ok(())
}

pub async fn require_auth(request: Request, next: Next) -> Result<Response, ApiError> {
    if let Err(err) = verify_token(extract_token(request.headers())) {
        warn!(path = %request.uri().path(), "Rejected request: {err}");
        return Err(err);
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: HeaderValue) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value);
        headers
    }

    fn verify(raw: &str) -> Result<(), ApiError> {
        verify_token(Some(raw.as_bytes()))
    }

    #[test]
    fn test_extract_token() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        assert_eq!(extract_token(&headers_with(HeaderValue::from_static(""))), None);
        assert_eq!(
            extract_token(&headers_with(HeaderValue::from_static("Bearer abc"))),
            Some(b"Bearer abc".as_slice())
        );
    }

    #[test]
    fn test_extract_token_keeps_opaque_bytes() {
        let value = HeaderValue::from_bytes(b"Bearer tok\xe9n").unwrap();
        let headers = headers_with(value);
        let token = extract_token(&headers);
        assert_eq!(token, Some(b"Bearer tok\xe9n".as_slice()));
        assert!(verify_token(token).is_ok());
    }

    #[test]
    fn test_verify_token_missing() {
        let err = verify_token(None).unwrap_err();
        assert_eq!(err.to_string(), "No token provided");
    }

    #[test]
    fn test_verify_token_sentinel() {
        assert!(verify("invalid").is_err());
        assert_eq!(
            verify("Bearer invalid").unwrap_err().to_string(),
            "Invalid token"
        );
    }

    #[test]
    fn test_verify_token_accepts_anything_else() {
        assert!(verify("Bearer abc.def.ghi").is_ok());
        assert!(verify("abc").is_ok());
        assert!(verify("Bearer ").is_ok());
        // prefix is stripped once only
        assert!(verify("Bearer Bearer invalid").is_ok());
        assert!(verify("bearer invalid").is_ok());
    }
}

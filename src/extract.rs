use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body decoded regardless of `Content-Type`.
///
/// A literal `null` body yields `T::default()`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        let value = serde_json::from_slice::<Option<T>>(&bytes)?;
        Ok(JsonBody(value.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;
    use crate::models::User;

    async fn decode(body: &'static str) -> Result<JsonBody<User>, ApiError> {
        let request = Request::builder().body(Body::from(body)).unwrap();
        JsonBody::<User>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_decodes_without_content_type() {
        let JsonBody(user) = decode(r#"{"id":"u1"}"#).await.unwrap();
        assert_eq!(user.id, "u1");
    }

    #[tokio::test]
    async fn test_null_body_is_default() {
        let JsonBody(user) = decode("null").await.unwrap();
        assert_eq!(user, User::default());
    }

    #[tokio::test]
    async fn test_empty_and_malformed_rejected() {
        assert!(matches!(decode("").await, Err(ApiError::BadRequest(_))));
        assert!(matches!(decode("{\"id\":").await, Err(ApiError::BadRequest(_))));
        assert!(matches!(decode("[1,2]").await, Err(ApiError::BadRequest(_))));
    }
}

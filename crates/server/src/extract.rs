//! Extractors that turn malformed input into `JsonApiError` bodies instead of
//! axum's plain-text rejections.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// Positive integer `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_id(&raw).map(EntityId)
    }
}

fn parse_id(raw: &str) -> Result<i32, JsonApiError> {
    // digits only; `str::parse` would also take a leading `+`
    let digits = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    match raw.parse::<i32>() {
        Ok(id) if digits && id > 0 => Ok(id),
        _ => Err(JsonApiError::unprocessable(format!("id must be a positive integer, got {raw:?}"))),
    }
}

/// JSON body whose syntax and shape errors answer 422.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ValidJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_positive() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
    }

    #[test]
    fn parse_id_rejects_zero_negative_and_text() {
        for raw in ["0", "-3", "+5", " 7", "", "abc", "1.5", "99999999999"] {
            assert!(parse_id(raw).is_err(), "{raw} should be rejected");
        }
    }
}

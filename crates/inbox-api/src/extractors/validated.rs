//! Validated JSON extractor
//!
//! Deserializes a JSON request body and runs `validator` rules on it
//! before the handler sees the value.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use validator::Validate;

use crate::response::ApiError;

/// JSON body that has passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::invalid_body(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 10))]
        name: String,
    }

    #[test]
    fn test_validation_passes_through() {
        let sample = Sample {
            name: "ok".to_string(),
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_invalid() {
        let sample = Sample {
            name: String::new(),
        };
        assert!(sample.validate().is_err());
    }
}

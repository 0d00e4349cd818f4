use axum::{
    Json,
    extract::{FromRequest, Request},
};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that also runs `validator` rules.
///
/// Both malformed JSON and failed rules are rejected as 400.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(format!("Json parse error: {}", e.body_text())))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Parses a hex ObjectId taken from a path segment.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    Ok(ObjectId::parse_str(raw)?)
}

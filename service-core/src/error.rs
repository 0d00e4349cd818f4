use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error type shared by every handler.
///
/// Status codes keep the conventions existing clients were built against:
/// client mistakes are 400, failed lookups and credential checks are 402,
/// everything else is 500.
///
/// Bodies are always a JSON object with the message under `error`. 402 bodies
/// repeat it under `message`, the key the legacy prescription API used. 500
/// bodies carry the raw underlying message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(anyhow::anyhow!(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(anyhow::anyhow!(message.into()))
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        AppError::InvalidCredentials(anyhow::anyhow!(message.into()))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::InvalidCredentials(_) => {
                StatusCode::PAYMENT_REQUIRED
            }
            AppError::InternalError(_)
            | AppError::DatabaseError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

impl From<mongodb::bson::oid::Error> for AppError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        AppError::BadRequest(anyhow::anyhow!("Invalid identifier: {}", err))
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::ValidationError(err) => ErrorResponse {
                error: "Validation error".to_string(),
                message: None,
                details: Some(err.to_string()),
            },
            AppError::BadRequest(err) => ErrorResponse {
                error: err.to_string(),
                message: None,
                details: None,
            },
            AppError::NotFound(err) | AppError::InvalidCredentials(err) => ErrorResponse {
                error: err.to_string(),
                message: Some(err.to_string()),
                details: None,
            },
            AppError::InternalError(err)
            | AppError::DatabaseError(err)
            | AppError::ConfigError(err) => {
                tracing::error!(status = %status, "Request failed: {:#}", err);
                ErrorResponse {
                    error: format!("{:#}", err),
                    message: None,
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_uses_legacy_status_and_message_key() {
        let (status, body) = body_json(AppError::not_found("No such query exists")).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["error"], "No such query exists");
        assert_eq!(body["message"], "No such query exists");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn bad_request_carries_message() {
        let (status, body) = body_json(AppError::bad_request("This email already exists!")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "This email already exists!");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn server_errors_carry_the_raw_message() {
        let (status, body) =
            body_json(AppError::InternalError(anyhow::anyhow!("connection reset"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "connection reset" }));

        let (status, body) =
            body_json(AppError::DatabaseError(anyhow::anyhow!("connection refused"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "connection refused" }));
    }

    #[test]
    fn malformed_object_id_is_a_bad_request() {
        let err = mongodb::bson::oid::ObjectId::parse_str("not-an-id").unwrap_err();
        assert_eq!(AppError::from(err).status_code(), StatusCode::BAD_REQUEST);
    }
}

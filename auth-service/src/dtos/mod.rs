pub mod auth;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body produced by `service_core::error::AppError`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "This email already exists!")]
    pub error: String,
    /// Same text as `error`; only present on 402 responses.
    pub message: Option<String>,
    /// Field errors; only present on validation failures.
    pub details: Option<String>,
}

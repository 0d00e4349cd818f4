use axum::{extract::State, response::IntoResponse, Json};
use service_core::{error::AppError, utils::ValidatedJson};

use crate::{
    dtos::auth::{SigninRequest, SignupRequest},
    startup::AppState,
};

/// Service banner.
pub async fn index() -> &'static str {
    "authService"
}

/// Create a doctor or user account
#[utoipa::path(
    post,
    path = "/authService/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created; doctor signups carry `doctor` instead of `user`", body = crate::dtos::auth::UserSignupResponse),
        (status = 400, description = "Email already exists or invalid body", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let res = state.accounts.signup(req).await?;
    Ok(Json(res))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/authService/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Full account record; doctor signins return a doctor record", body = crate::dtos::auth::UserResponse),
        (status = 402, description = "Unknown account or password mismatch", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::dtos::ErrorResponse)
    ),
    tag = "Authentication"
)]
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SigninRequest>,
) -> Result<impl IntoResponse, AppError> {
    let account = state.accounts.signin(req).await?;
    Ok(Json(account))
}

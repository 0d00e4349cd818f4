use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{ClientKind, Doctor, User};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_account_fields"))]
pub struct SignupRequest {
    /// `"doctor"` creates a doctor account; any other value a user account.
    #[schema(example = "doctor")]
    pub client: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "house@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Required for user accounts.
    #[schema(example = "jane")]
    pub username: Option<String>,

    /// Required for doctor accounts.
    #[schema(example = "Gregory House")]
    pub doctorname: Option<String>,

    /// Required for doctor accounts.
    #[serde(rename = "registrationNo")]
    #[schema(example = "MCI-20931")]
    pub registration_no: Option<String>,
}

impl SignupRequest {
    pub fn kind(&self) -> ClientKind {
        ClientKind::from_tag(self.client.as_deref())
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn validate_account_fields(req: &SignupRequest) -> Result<(), ValidationError> {
    match req.kind() {
        ClientKind::Doctor if !present(&req.doctorname) || !present(&req.registration_no) => Err(
            ValidationError::new("doctor_fields").with_message(Cow::Borrowed(
                "doctorname and registrationNo are required for doctors",
            )),
        ),
        ClientKind::User if !present(&req.username) => Err(ValidationError::new("user_fields")
            .with_message(Cow::Borrowed("username is required for users"))),
        _ => Ok(()),
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    #[schema(example = "doctor")]
    pub client: Option<String>,

    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "house@example.com")]
    pub email: String,

    pub password: String,
}

impl SigninRequest {
    pub fn kind(&self) -> ClientKind {
        ClientKind::from_tag(self.client.as_deref())
    }
}

/// Doctor record as returned to clients, password included.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DoctorResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    pub doctorname: String,
    pub email: String,
    pub password: String,
    pub client: String,
    #[serde(rename = "registrationNo")]
    pub registration_no: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.to_hex(),
            doctorname: doctor.doctorname,
            email: doctor.email,
            password: doctor.password,
            client: doctor.client,
            registration_no: doctor.registration_no,
        }
    }
}

/// User record as returned to clients, password included.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f7")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub client: String,
    pub queries: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            username: user.username,
            email: user.email,
            password: user.password,
            client: user.client,
            queries: user.queries.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DoctorSignupResponse {
    pub doctor: DoctorResponse,
    #[schema(example = "Doctor created successfully!")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserSignupResponse {
    pub user: UserResponse,
    #[schema(example = "User created successfully!")]
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SignupResponse {
    Doctor(DoctorSignupResponse),
    User(UserSignupResponse),
}

/// Signin returns the bare account record.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AccountResponse {
    Doctor(DoctorResponse),
    User(UserResponse),
}

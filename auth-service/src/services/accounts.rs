use std::sync::Arc;

use service_core::error::AppError;

use crate::dtos::auth::{
    AccountResponse, DoctorSignupResponse, SigninRequest, SignupRequest, SignupResponse,
    UserSignupResponse,
};
use crate::models::{ClientKind, Doctor, User};
use crate::services::{metrics, AccountStore};
use crate::utils::passwords_match;

pub const EMAIL_EXISTS: &str = "This email already exists!";

/// Signup and signin over whichever [`AccountStore`] the service runs with.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    /// Creates a doctor or user account.
    ///
    /// The duplicate-email check is a read before the insert, so two
    /// concurrent signups with the same email can both succeed.
    pub async fn signup(&self, req: SignupRequest) -> Result<SignupResponse, AppError> {
        let kind = req.kind();
        let client = req
            .client
            .clone()
            .unwrap_or_else(|| kind.as_str().to_string());

        let response = match kind {
            ClientKind::Doctor => {
                if self.store.find_doctor_by_email(&req.email).await?.is_some() {
                    metrics::record_signup(kind.as_str(), "duplicate");
                    return Err(AppError::bad_request(EMAIL_EXISTS));
                }

                let doctor = Doctor::new(
                    req.doctorname.unwrap_or_default(),
                    req.email,
                    req.password,
                    client,
                    req.registration_no.unwrap_or_default(),
                );
                self.store.insert_doctor(&doctor).await?;

                tracing::info!(doctor_id = %doctor.id, "Doctor account created");

                SignupResponse::Doctor(DoctorSignupResponse {
                    doctor: doctor.into(),
                    message: "Doctor created successfully!".to_string(),
                })
            }
            ClientKind::User => {
                if self.store.find_user_by_email(&req.email).await?.is_some() {
                    metrics::record_signup(kind.as_str(), "duplicate");
                    return Err(AppError::bad_request(EMAIL_EXISTS));
                }

                let user = User::new(
                    req.username.unwrap_or_default(),
                    req.email,
                    req.password,
                    client,
                );
                self.store.insert_user(&user).await?;

                tracing::info!(user_id = %user.id, "User account created");

                SignupResponse::User(UserSignupResponse {
                    user: user.into(),
                    message: "User created successfully!".to_string(),
                })
            }
        };

        metrics::record_signup(kind.as_str(), "created");
        Ok(response)
    }

    /// Looks the account up by email and checks the password by equality.
    pub async fn signin(&self, req: SigninRequest) -> Result<AccountResponse, AppError> {
        let kind = req.kind();

        let result = match kind {
            ClientKind::Doctor => match self.store.find_doctor_by_email(&req.email).await? {
                None => Err(AppError::not_found("No such doctor exists")),
                Some(doctor) if !passwords_match(&req.password, &doctor.password) => Err(
                    AppError::invalid_credentials("Password does not match for any of the doctor"),
                ),
                Some(doctor) => Ok(AccountResponse::Doctor(doctor.into())),
            },
            ClientKind::User => match self.store.find_user_by_email(&req.email).await? {
                None => Err(AppError::not_found("No such user exists")),
                Some(user) if !passwords_match(&req.password, &user.password) => Err(
                    AppError::invalid_credentials("Password does not match for any of the user"),
                ),
                Some(user) => Ok(AccountResponse::User(user.into())),
            },
        };

        let outcome = match &result {
            Ok(_) => "success",
            Err(AppError::NotFound(_)) => "unknown_account",
            Err(_) => "wrong_password",
        };
        metrics::record_signin(kind.as_str(), outcome);

        result
    }
}

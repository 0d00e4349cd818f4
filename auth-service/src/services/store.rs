use async_trait::async_trait;
use service_core::error::AppError;

use crate::models::{Doctor, User};

/// Persistence operations the account handlers need.
///
/// Each call is a single independent read or write; callers get no
/// atomicity across calls.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_user(&self, user: &User) -> Result<(), AppError>;

    async fn find_doctor_by_email(&self, email: &str) -> Result<Option<Doctor>, AppError>;

    async fn insert_doctor(&self, doctor: &Doctor) -> Result<(), AppError>;

    /// Liveness probe against the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}

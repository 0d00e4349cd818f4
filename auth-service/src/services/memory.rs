//! In-process account store for local runs and tests.

use crate::models::{Doctor, User};
use crate::services::AccountStore;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAccountStore {
    users: RwLock<Vec<User>>,
    doctors: RwLock<Vec<Doctor>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    pub async fn doctors(&self) -> Vec<Doctor> {
        self.doctors.read().await.clone()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn find_doctor_by_email(&self, email: &str) -> Result<Option<Doctor>, AppError> {
        let doctors = self.doctors.read().await;
        Ok(doctors.iter().find(|d| d.email == email).cloned())
    }

    async fn insert_doctor(&self, doctor: &Doctor) -> Result<(), AppError> {
        self.doctors.write().await.push(doctor.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

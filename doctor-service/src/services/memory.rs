//! In-process store for local runs and tests. Doctors and queries are
//! written by other services, so they are seeded directly.

use crate::models::{Doctor, Prescription, Query};
use crate::services::ClinicStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryClinicStore {
    doctors: RwLock<Vec<Doctor>>,
    queries: RwLock<Vec<Query>>,
    prescriptions: RwLock<Vec<Prescription>>,
}

impl InMemoryClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_doctor(&self, doctor: Doctor) {
        self.doctors.write().await.push(doctor);
    }

    pub async fn insert_query(&self, query: Query) {
        self.queries.write().await.push(query);
    }

    pub async fn queries(&self) -> Vec<Query> {
        self.queries.read().await.clone()
    }

    pub async fn prescriptions(&self) -> Vec<Prescription> {
        self.prescriptions.read().await.clone()
    }
}

#[async_trait]
impl ClinicStore for InMemoryClinicStore {
    async fn find_doctor(&self, id: &ObjectId) -> Result<Option<Doctor>, AppError> {
        let doctors = self.doctors.read().await;
        Ok(doctors.iter().find(|d| &d.id == id).cloned())
    }

    async fn find_query(&self, id: &ObjectId) -> Result<Option<Query>, AppError> {
        let queries = self.queries.read().await;
        Ok(queries.iter().find(|q| &q.id == id).cloned())
    }

    async fn set_query_prescriptions(
        &self,
        query_id: &ObjectId,
        prescriptions: &[ObjectId],
    ) -> Result<(), AppError> {
        let mut queries = self.queries.write().await;
        if let Some(query) = queries.iter_mut().find(|q| &q.id == query_id) {
            query.prescriptions = prescriptions.to_vec();
        }
        Ok(())
    }

    async fn insert_prescription(&self, prescription: &Prescription) -> Result<(), AppError> {
        self.prescriptions.write().await.push(prescription.clone());
        Ok(())
    }

    async fn find_prescription(&self, id: &ObjectId) -> Result<Option<Prescription>, AppError> {
        let prescriptions = self.prescriptions.read().await;
        Ok(prescriptions.iter().find(|p| &p.id == id).cloned())
    }

    async fn update_prescription_body(
        &self,
        id: &ObjectId,
        body: &str,
    ) -> Result<Option<Prescription>, AppError> {
        let mut prescriptions = self.prescriptions.write().await;
        Ok(prescriptions.iter_mut().find(|p| &p.id == id).map(|p| {
            p.body = body.to_string();
            p.clone()
        }))
    }

    async fn delete_prescription(&self, id: &ObjectId) -> Result<(), AppError> {
        self.prescriptions.write().await.retain(|p| &p.id != id);
        Ok(())
    }

    async fn list_prescriptions(&self) -> Result<Vec<Prescription>, AppError> {
        Ok(self.prescriptions.read().await.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

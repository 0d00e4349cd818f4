use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

use crate::models::{Doctor, Prescription, Query};

/// Document operations behind the prescription endpoints.
///
/// Every method is one independent read or write. Nothing here spans calls,
/// so a sequence such as insert-then-link is not atomic.
#[async_trait]
pub trait ClinicStore: Send + Sync {
    async fn find_doctor(&self, id: &ObjectId) -> Result<Option<Doctor>, AppError>;

    async fn find_query(&self, id: &ObjectId) -> Result<Option<Query>, AppError>;

    /// Overwrites the query's whole prescription list.
    async fn set_query_prescriptions(
        &self,
        query_id: &ObjectId,
        prescriptions: &[ObjectId],
    ) -> Result<(), AppError>;

    async fn insert_prescription(&self, prescription: &Prescription) -> Result<(), AppError>;

    async fn find_prescription(&self, id: &ObjectId) -> Result<Option<Prescription>, AppError>;

    /// Replaces the body and returns the updated document, or `None` when no
    /// prescription has this id.
    async fn update_prescription_body(
        &self,
        id: &ObjectId,
        body: &str,
    ) -> Result<Option<Prescription>, AppError>;

    async fn delete_prescription(&self, id: &ObjectId) -> Result<(), AppError>;

    async fn list_prescriptions(&self) -> Result<Vec<Prescription>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

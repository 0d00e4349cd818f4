use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

use crate::dtos::{
    CreatePrescriptionResponse, DeletePrescriptionResponse, PrescriptionResponse,
    UpdatePrescriptionResponse,
};
use crate::models::Prescription;
use crate::services::{metrics, ClinicStore};

pub const NO_DOCTOR: &str = "No doctor exists with given id";
pub const NO_QUERY: &str = "No such query exists";
pub const NO_PRESCRIPTION: &str = "No such prescription exists";

/// Prescription lifecycle over a [`ClinicStore`].
///
/// Create and delete each touch two documents in sequence without a
/// transaction. A failure between the calls leaves them out of step.
#[derive(Clone)]
pub struct PrescriptionService {
    store: Arc<dyn ClinicStore>,
}

impl PrescriptionService {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ClinicStore> {
        &self.store
    }

    /// Writes a prescription for `query_id` and appends it to the query.
    pub async fn create(
        &self,
        doctor_id: ObjectId,
        query_id: ObjectId,
        body: String,
    ) -> Result<CreatePrescriptionResponse, AppError> {
        let Some(doctor) = self.store.find_doctor(&doctor_id).await? else {
            metrics::record_prescription("create", "unknown_doctor");
            return Err(AppError::not_found(NO_DOCTOR));
        };
        let Some(mut query) = self.store.find_query(&query_id).await? else {
            metrics::record_prescription("create", "unknown_query");
            return Err(AppError::not_found(NO_QUERY));
        };

        let prescription = Prescription::new(&doctor, query.id, body);
        self.store.insert_prescription(&prescription).await?;

        query.prescriptions.push(prescription.id);
        self.store
            .set_query_prescriptions(&query.id, &query.prescriptions)
            .await?;

        tracing::info!(
            prescription_id = %prescription.id,
            doctor_id = %doctor.id,
            query_id = %query.id,
            "Prescription created"
        );
        metrics::record_prescription("create", "success");

        Ok(CreatePrescriptionResponse {
            message: "prescription created successfully".to_string(),
            prescription: prescription.into(),
            query: query.into(),
        })
    }

    pub async fn update(
        &self,
        prescription_id: ObjectId,
        body: String,
    ) -> Result<UpdatePrescriptionResponse, AppError> {
        let Some(prescription) = self
            .store
            .update_prescription_body(&prescription_id, &body)
            .await?
        else {
            metrics::record_prescription("update", "unknown_prescription");
            return Err(AppError::not_found(NO_PRESCRIPTION));
        };

        tracing::info!(prescription_id = %prescription.id, "Prescription updated");
        metrics::record_prescription("update", "success");

        Ok(UpdatePrescriptionResponse {
            message: "prescription updated successfully".to_string(),
            prescription: prescription.into(),
        })
    }

    /// Unlinks the prescription from the query, then deletes it.
    pub async fn delete(
        &self,
        query_id: ObjectId,
        prescription_id: ObjectId,
    ) -> Result<DeletePrescriptionResponse, AppError> {
        if self.store.find_prescription(&prescription_id).await?.is_none() {
            metrics::record_prescription("delete", "unknown_prescription");
            return Err(AppError::not_found(NO_PRESCRIPTION));
        }
        let Some(mut query) = self.store.find_query(&query_id).await? else {
            metrics::record_prescription("delete", "unknown_query");
            return Err(AppError::not_found(NO_QUERY));
        };

        if !query.unlink_prescription(&prescription_id) {
            tracing::warn!(
                prescription_id = %prescription_id,
                query_id = %query.id,
                "Prescription was not linked to the query"
            );
        }
        self.store
            .set_query_prescriptions(&query.id, &query.prescriptions)
            .await?;
        self.store.delete_prescription(&prescription_id).await?;

        tracing::info!(prescription_id = %prescription_id, query_id = %query.id, "Prescription deleted");
        metrics::record_prescription("delete", "success");

        Ok(DeletePrescriptionResponse {
            message: "deleted successfully".to_string(),
            query: query.into(),
        })
    }

    pub async fn list(&self) -> Result<Vec<PrescriptionResponse>, AppError> {
        let prescriptions = self.store.list_prescriptions().await?;
        Ok(prescriptions.into_iter().map(Into::into).collect())
    }
}

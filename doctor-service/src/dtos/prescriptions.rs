use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Prescription, Query};

/// Body of create and update requests.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PrescriptionBody {
    #[validate(length(min = 1, message = "Prescription body is required"))]
    #[schema(example = "Paracetamol 500mg twice a day for three days")]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrescriptionResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f8")]
    pub id: String,
    pub doctorname: String,
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    #[serde(rename = "queryId", skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    pub body: String,
}

impl From<Prescription> for PrescriptionResponse {
    fn from(p: Prescription) -> Self {
        Self {
            id: p.id.to_hex(),
            doctorname: p.doctorname,
            doctor_id: p.doctor_id.to_hex(),
            query_id: p.query_id.map(|id| id.to_hex()),
            body: p.body,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub prescriptions: Vec<String>,
}

impl From<Query> for QueryResponse {
    fn from(q: Query) -> Self {
        Self {
            id: q.id.to_hex(),
            user_id: q.user_id.map(|id| id.to_hex()),
            body: q.body,
            prescriptions: q.prescriptions.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePrescriptionResponse {
    #[schema(example = "prescription created successfully")]
    pub message: String,
    pub prescription: PrescriptionResponse,
    /// The query with the new prescription appended.
    #[serde(rename = "Query")]
    pub query: QueryResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatePrescriptionResponse {
    #[schema(example = "prescription updated successfully")]
    pub message: String,
    pub prescription: PrescriptionResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletePrescriptionResponse {
    #[schema(example = "deleted successfully")]
    pub message: String,
    /// The query after the prescription was unlinked.
    pub query: QueryResponse,
}

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::Doctor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Copied from the doctor at creation; not kept in sync.
    pub doctorname: String,
    #[serde(rename = "doctorId")]
    pub doctor_id: ObjectId,
    /// Older documents were written without the query link.
    #[serde(rename = "queryId", default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<ObjectId>,
    pub body: String,
}

impl Prescription {
    pub fn new(doctor: &Doctor, query_id: ObjectId, body: String) -> Self {
        Self {
            id: ObjectId::new(),
            doctorname: doctor.doctorname.clone(),
            doctor_id: doctor.id,
            query_id: Some(query_id),
            body,
        }
    }
}

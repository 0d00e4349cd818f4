use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Read-only view of a `doctors` document. Accounts are created by the auth
/// service; this service only needs the id and display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub doctorname: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "registrationNo", default)]
    pub registration_no: String,
}

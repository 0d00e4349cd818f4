//! Doctor accounts, stored in the `doctors` collection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub doctorname: String,
    pub email: String,
    /// Stored and compared as plaintext.
    pub password: String,
    #[serde(default)]
    pub client: String,
    #[serde(rename = "registrationNo", default)]
    pub registration_no: String,
}

impl Doctor {
    pub fn new(
        doctorname: String,
        email: String,
        password: String,
        client: String,
        registration_no: String,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            doctorname,
            email,
            password,
            client,
            registration_no,
        }
    }
}

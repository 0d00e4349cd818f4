use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A patient question. Prescriptions answering it are linked by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub prescriptions: Vec<ObjectId>,
}

impl Query {
    pub fn new(user_id: Option<ObjectId>, body: Option<String>) -> Self {
        Self {
            id: ObjectId::new(),
            user_id,
            body,
            prescriptions: Vec::new(),
        }
    }

    /// Drops every occurrence of `prescription_id`. Returns whether the list changed.
    pub fn unlink_prescription(&mut self, prescription_id: &ObjectId) -> bool {
        let before = self.prescriptions.len();
        self.prescriptions.retain(|id| id != prescription_id);
        self.prescriptions.len() != before
    }
}

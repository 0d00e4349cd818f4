//! Patient accounts, stored in the `users` collection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub username: String,
    pub email: String,
    /// Stored and compared as plaintext.
    pub password: String,
    #[serde(default)]
    pub client: String,
    /// Queries submitted by this user.
    #[serde(default)]
    pub queries: Vec<ObjectId>,
}

impl User {
    pub fn new(username: String, email: String, password: String, client: String) -> Self {
        Self {
            id: ObjectId::new(),
            username,
            email,
            password,
            client,
            queries: Vec::new(),
        }
    }
}

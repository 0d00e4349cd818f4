use crate::models::{Doctor, User};
use crate::services::AccountStore;
use async_trait::async_trait;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::config::MongoConfig;
use service_core::database;
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(config: &MongoConfig) -> Result<Self, AppError> {
        let (client, db) = database::connect(config, "auth-service").await?;
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for auth-service");

        // Lookup only. Email uniqueness is checked at signup, not enforced here.
        let email_index = |name: &str| {
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().name(name.to_string()).build())
                .build()
        };

        self.users()
            .create_index(email_index("user_email_lookup"), None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create email index on users collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on users.email");

        self.doctors()
            .create_index(email_index("doctor_email_lookup"), None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create email index on doctors collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on doctors.email");

        Ok(())
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    pub fn doctors(&self) -> Collection<Doctor> {
        self.db.collection("doctors")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl AccountStore for MongoDb {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users().find_one(doc! { "email": email }, None).await?)
    }

    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.users().insert_one(user, None).await.map_err(|e| {
            tracing::error!(user_id = %user.id, "Failed to insert user: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn find_doctor_by_email(&self, email: &str) -> Result<Option<Doctor>, AppError> {
        Ok(self.doctors().find_one(doc! { "email": email }, None).await?)
    }

    async fn insert_doctor(&self, doctor: &Doctor) -> Result<(), AppError> {
        self.doctors().insert_one(doctor, None).await.map_err(|e| {
            tracing::error!(doctor_id = %doctor.id, "Failed to insert doctor: {}", e);
            AppError::from(e)
        })?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        database::ping(&self.client).await
    }
}

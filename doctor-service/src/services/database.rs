use crate::models::{Doctor, Prescription, Query};
use crate::services::ClinicStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Client as MongoClient, Collection, Database, IndexModel,
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
        let (client, db) = database::connect(config, "doctor-service").await?;
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for doctor-service");

        let query_index = IndexModel::builder()
            .keys(doc! { "queryId": 1 })
            .options(
                IndexOptions::builder()
                    .name("prescription_query_lookup".to_string())
                    .build(),
            )
            .build();

        self.prescriptions()
            .create_index(query_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create queryId index on prescriptions collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on prescriptions.queryId");

        Ok(())
    }

    pub fn doctors(&self) -> Collection<Doctor> {
        self.db.collection("doctors")
    }

    pub fn queries(&self) -> Collection<Query> {
        self.db.collection("queries")
    }

    pub fn prescriptions(&self) -> Collection<Prescription> {
        self.db.collection("prescriptions")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl ClinicStore for MongoDb {
    async fn find_doctor(&self, id: &ObjectId) -> Result<Option<Doctor>, AppError> {
        Ok(self.doctors().find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_query(&self, id: &ObjectId) -> Result<Option<Query>, AppError> {
        Ok(self.queries().find_one(doc! { "_id": id }, None).await?)
    }

    async fn set_query_prescriptions(
        &self,
        query_id: &ObjectId,
        prescriptions: &[ObjectId],
    ) -> Result<(), AppError> {
        self.queries()
            .update_one(
                doc! { "_id": query_id },
                doc! { "$set": { "prescriptions": prescriptions.to_vec() } },
                None,
            )
            .await
            .map_err(|e| {
                tracing::error!(query_id = %query_id, "Failed to update query prescriptions: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn insert_prescription(&self, prescription: &Prescription) -> Result<(), AppError> {
        self.prescriptions()
            .insert_one(prescription, None)
            .await
            .map_err(|e| {
                tracing::error!(prescription_id = %prescription.id, "Failed to insert prescription: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn find_prescription(&self, id: &ObjectId) -> Result<Option<Prescription>, AppError> {
        Ok(self.prescriptions().find_one(doc! { "_id": id }, None).await?)
    }

    async fn update_prescription_body(
        &self,
        id: &ObjectId,
        body: &str,
    ) -> Result<Option<Prescription>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .prescriptions()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": { "body": body } }, options)
            .await?)
    }

    async fn delete_prescription(&self, id: &ObjectId) -> Result<(), AppError> {
        self.prescriptions()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(prescription_id = %id, "Failed to delete prescription: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn list_prescriptions(&self) -> Result<Vec<Prescription>, AppError> {
        let cursor = self.prescriptions().find(None, None).await?;
        let prescriptions: Vec<Prescription> = cursor.try_collect().await?;
        Ok(prescriptions)
    }

    async fn ping(&self) -> Result<(), AppError> {
        database::ping(&self.client).await
    }
}

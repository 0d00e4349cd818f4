//! Shared setup for doctor-service integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use doctor_service::config::DoctorConfig;
use doctor_service::models::{Doctor, Prescription, Query};
use doctor_service::services::{ClinicStore, InMemoryClinicStore, MongoDb};
use doctor_service::{router, AppState, Application};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use service_core::config::{Config as CoreConfig, MongoConfig};
use service_core::error::AppError;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryClinicStore>,
    pub doctor: Doctor,
    pub query: Query,
}

impl TestApp {
    /// Router over an in-memory store seeded with one doctor and one query.
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryClinicStore::new());
        let doctor = sample_doctor();
        let query = Query::new(Some(ObjectId::new()), Some("recurring migraines".to_string()));
        store.insert_doctor(doctor.clone()).await;
        store.insert_query(query.clone()).await;

        let router = router(AppState::new(store.clone()));
        Self {
            router,
            store,
            doctor,
            query,
        }
    }

    /// Router whose store rejects every call. The seeded fixtures exist only
    /// in the unused in-memory store.
    pub async fn failing() -> Self {
        let app = Self::new().await;
        Self {
            router: router(AppState::new(Arc::new(FailingClinicStore))),
            ..app
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.request(method, uri, body).await;
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    pub async fn create(
        &self,
        doctor_id: &str,
        query_id: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.json(
            Method::POST,
            &format!("/doctorService/{}/{}/prescription", doctor_id, query_id),
            Some(serde_json::json!({ "body": body })),
        )
        .await
    }

    /// Creates a prescription for the seeded doctor and query, returning its id.
    pub async fn create_seeded(&self, body: &str) -> String {
        let (status, json) = self
            .create(&self.doctor.id.to_hex(), &self.query.id.to_hex(), body)
            .await;
        assert_eq!(status, StatusCode::OK, "create failed: {}", json);
        json["prescription"]["_id"].as_str().unwrap().to_string()
    }
}

/// Store whose backend is unreachable.
pub struct FailingClinicStore;

fn unreachable_backend() -> AppError {
    AppError::from(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl ClinicStore for FailingClinicStore {
    async fn find_doctor(&self, _id: &ObjectId) -> Result<Option<Doctor>, AppError> {
        Err(unreachable_backend())
    }

    async fn find_query(&self, _id: &ObjectId) -> Result<Option<Query>, AppError> {
        Err(unreachable_backend())
    }

    async fn set_query_prescriptions(
        &self,
        _query_id: &ObjectId,
        _prescriptions: &[ObjectId],
    ) -> Result<(), AppError> {
        Err(unreachable_backend())
    }

    async fn insert_prescription(&self, _prescription: &Prescription) -> Result<(), AppError> {
        Err(unreachable_backend())
    }

    async fn find_prescription(&self, _id: &ObjectId) -> Result<Option<Prescription>, AppError> {
        Err(unreachable_backend())
    }

    async fn update_prescription_body(
        &self,
        _id: &ObjectId,
        _body: &str,
    ) -> Result<Option<Prescription>, AppError> {
        Err(unreachable_backend())
    }

    async fn delete_prescription(&self, _id: &ObjectId) -> Result<(), AppError> {
        Err(unreachable_backend())
    }

    async fn list_prescriptions(&self) -> Result<Vec<Prescription>, AppError> {
        Err(unreachable_backend())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable_backend())
    }
}

pub fn sample_doctor() -> Doctor {
    Doctor {
        id: ObjectId::new(),
        doctorname: "Meredith Grey".to_string(),
        email: "grey@example.com".to_string(),
        registration_no: "MCI-55120".to_string(),
    }
}

pub struct MongoTestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl MongoTestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("doctor_test_{}", Uuid::new_v4().simple());

        let config = DoctorConfig {
            common: CoreConfig {
                port: 0,
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
            mongodb: MongoConfig {
                uri: std::env::var("TEST_MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                database: Some(db_name.clone()),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let address = format!("http://127.0.0.1:{}", port);

        let client = reqwest::Client::new();
        for _ in 0..50 {
            if client.get(format!("{}/health", address)).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        Self {
            address,
            db,
            db_name,
        }
    }

    /// Inserts a doctor and a query the way the other services would.
    pub async fn seed(&self) -> (Doctor, Query) {
        let doctor = sample_doctor();
        let query = Query::new(None, Some("sprained ankle".to_string()));
        self.db
            .doctors()
            .insert_one(&doctor, None)
            .await
            .expect("Failed to seed doctor");
        self.db
            .queries()
            .insert_one(&query, None)
            .await
            .expect("Failed to seed query");
        (doctor, query)
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

//! Test helpers for auth-service integration tests.
//!
//! `TestApp` drives the real router over an in-memory store.
//! `MongoTestApp` spawns the full application against a live MongoDB.

#![allow(dead_code)]

use async_trait::async_trait;
use auth_service::config::AuthConfig;
use auth_service::models::{Doctor, User};
use auth_service::services::{AccountStore, InMemoryAccountStore, MongoDb};
use auth_service::{router, AppState, Application};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use service_core::config::{Config as CoreConfig, MongoConfig};
use service_core::error::AppError;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryAccountStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAccountStore::new());
        let router = router(AppState::new(store.clone()));
        Self { router, store }
    }

    /// Router whose store rejects every call. `store` stays empty.
    pub fn failing() -> Self {
        Self {
            router: router(AppState::new(Arc::new(FailingAccountStore))),
            store: Arc::new(InMemoryAccountStore::new()),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    pub async fn signup(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.post_json("/authService/signup", body).await
    }

    pub async fn signin(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.post_json("/authService/signin", body).await
    }
}

/// Store whose backend is unreachable.
pub struct FailingAccountStore;

fn unreachable_backend() -> AppError {
    AppError::from(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl AccountStore for FailingAccountStore {
    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(unreachable_backend())
    }

    async fn insert_user(&self, _user: &User) -> Result<(), AppError> {
        Err(unreachable_backend())
    }

    async fn find_doctor_by_email(&self, _email: &str) -> Result<Option<Doctor>, AppError> {
        Err(unreachable_backend())
    }

    async fn insert_doctor(&self, _doctor: &Doctor) -> Result<(), AppError> {
        Err(unreachable_backend())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable_backend())
    }
}

pub fn doctor_signup(email: &str) -> serde_json::Value {
    serde_json::json!({
        "client": "doctor",
        "email": email,
        "password": "vicodin",
        "doctorname": "Gregory House",
        "registrationNo": "MCI-20931"
    })
}

pub fn user_signup(email: &str) -> serde_json::Value {
    serde_json::json!({
        "client": "user",
        "email": email,
        "password": "secret",
        "username": "jane"
    })
}

pub struct MongoTestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl MongoTestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("auth_test_{}", Uuid::new_v4().simple());

        let config = AuthConfig {
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

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

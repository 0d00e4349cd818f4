use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use service_core::observability::shutdown_signal;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::config::AuthConfig;
use crate::dtos;
use crate::handlers;
use crate::services::{AccountService, AccountStore, MongoDb};

/// Largest request body accepted, in bytes.
pub const BODY_LIMIT: usize = 30 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::auth::signup, handlers::auth::signin),
    components(schemas(
        dtos::auth::SignupRequest,
        dtos::auth::SigninRequest,
        dtos::auth::DoctorResponse,
        dtos::auth::UserResponse,
        dtos::auth::DoctorSignupResponse,
        dtos::auth::UserSignupResponse,
        dtos::ErrorResponse,
    )),
    tags((name = "Authentication", description = "Patient and doctor accounts"))
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            accounts: AccountService::new(store),
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Full HTTP surface of the service, independent of the backing store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/.well-known/openapi.json", get(openapi_json))
        .route("/authService", get(handlers::index))
        .route("/authService/signup", post(handlers::signup))
        .route("/authService/signin", post(handlers::signin))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    db: MongoDb,
    router: Router,
}

impl Application {
    pub async fn build(config: AuthConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            e
        })?;
        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let router = router(AppState::new(Arc::new(db.clone())));

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Auth service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            db,
            router,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{delete, get, patch, post},
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

use crate::config::DoctorConfig;
use crate::dtos;
use crate::handlers;
use crate::services::{ClinicStore, MongoDb, PrescriptionService};

pub const BODY_LIMIT: usize = 30 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::prescriptions::create_prescription,
        handlers::prescriptions::update_prescription,
        handlers::prescriptions::delete_prescription,
        handlers::prescriptions::list_prescriptions,
    ),
    components(schemas(
        dtos::PrescriptionBody,
        dtos::PrescriptionResponse,
        dtos::QueryResponse,
        dtos::CreatePrescriptionResponse,
        dtos::UpdatePrescriptionResponse,
        dtos::DeletePrescriptionResponse,
        dtos::ErrorResponse,
    )),
    tags((name = "Prescriptions", description = "Doctor answers to patient queries"))
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub prescriptions: PrescriptionService,
}

impl AppState {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self {
            prescriptions: PrescriptionService::new(store),
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Path segments are named positionally (`id`, `child_id`) because sibling
/// routes must agree on parameter names. `/doctorService/prescriptions` wins
/// over `/doctorService/:id`, so other methods on it answer 405 rather than
/// the 400 a malformed id would get.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/.well-known/openapi.json", get(openapi_json))
        .route("/doctorService", get(handlers::index))
        .route(
            "/doctorService/prescriptions",
            get(handlers::list_prescriptions),
        )
        .route("/doctorService/:id", patch(handlers::update_prescription))
        .route(
            "/doctorService/:id/:child_id",
            delete(handlers::delete_prescription),
        )
        .route(
            "/doctorService/:id/:child_id/prescription",
            post(handlers::create_prescription),
        )
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
    pub async fn build(config: DoctorConfig) -> Result<Self, AppError> {
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

        tracing::info!("Doctor service listening on port {}", port);

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

//! # Patient Registry Backend
//!
//! HTTP service for patient records backed by a single SQLite table.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (PatientService, validation)
//!     ↓
//! Storage Layer (DbConnection, PatientRepository)
//! ```
//!
//! Handlers share no mutable state; each request borrows a pooled
//! connection for the duration of a statement.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::PatientService;
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService,
}

impl AppState {
    pub fn new(patient_service: PatientService) -> Self {
        Self { patient_service }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::new(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    info!("Setting up domain model");
    let patient_service = PatientService::new(db_conn);

    Ok(AppState::new(patient_service))
}

/// CORS setup to allow a browser frontend served from `origin`
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH])
        .allow_headers(Any))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/patient", post(io::create_patient))
        .route("/patient/all", get(io::list_patients))
        .route(
            "/patient/:id",
            get(io::get_patient)
                .put(io::replace_patient)
                .delete(io::delete_patient)
                .patch(io::patch_patient),
        )
        .layer(cors)
        .with_state(app_state)
}

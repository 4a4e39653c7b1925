use std::net::SocketAddr;

use clap::Parser;

use crate::storage::connection::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};

/// Server settings, read from command-line flags or `PATIENT_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "patient-registry", version, about = "HTTP service for patient records")]
pub struct ServerConfig {
    /// SQLite database URL
    #[arg(long, env = "PATIENT_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long = "bind", env = "PATIENT_BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind_addr: SocketAddr,

    /// Origin allowed to make cross-origin requests
    #[arg(long, env = "PATIENT_CORS_ORIGIN", default_value = "http://localhost:8080")]
    pub cors_origin: String,

    /// Upper bound on pooled database connections
    #[arg(long, env = "PATIENT_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

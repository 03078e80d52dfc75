//! Liveness service for the Squeegee Samurai backend.
//!
//! `GET /` and `GET /health` answer with
//! `{"status":"ok","service":"squeegee-samurai-backend","timestamp":"..."}`.

pub mod app;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;

pub use app::build_router;
pub use config::AppConfig;
pub use models::{HealthStatus, SERVICE_NAME};

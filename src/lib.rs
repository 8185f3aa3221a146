//! PulseAPI AI service
//!
//! Serves the health, status and analysis endpoints consumed by the PulseAPI
//! backend and dashboard.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::error::ServiceError;
pub use crate::models::{
    AnalysisRequest, AnalysisResponse, ErrorResponse, HealthResponse, StatusResponse,
};

// Model exports
pub mod requests;
pub mod responses;

pub use requests::AnalysisRequest;
pub use responses::{AnalysisResponse, ErrorResponse, HealthResponse, StatusResponse, SERVICE_NAME};

use serde::{Deserialize, Serialize};

/// Name reported by every service-identifying payload
pub const SERVICE_NAME: &str = "pulseapi-ai-service";

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            message: "AI service is running".to_string(),
        }
    }
}

/// Dependency status response
///
/// Redis and backend are reported as connected without being probed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub service: String,
    pub redis: String,
    pub backend: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            redis: "connected".to_string(),
            backend: "connected".to_string(),
        }
    }
}

/// Analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub id: String,
    pub status: String,
    pub message: String,
    pub anomalies_detected: u32,
    pub confidence: f64,
}

impl AnalysisResponse {
    pub fn completed() -> Self {
        Self {
            id: "analysis-123".to_string(),
            status: "completed".to_string(),
            message: "Analysis completed".to_string(),
            anomalies_detected: 0,
            confidence: 0.85,
        }
    }
}

/// Error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn not_found(method: &str, path: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("No route for {} {}", method, path),
            status_code: 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_payload() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"ok","service":"pulseapi-ai-service","message":"AI service is running"}"#
        );
    }

    #[test]
    fn test_status_payload() {
        let json = serde_json::to_string(&StatusResponse::ok()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"ok","service":"pulseapi-ai-service","redis":"connected","backend":"connected"}"#
        );
    }

    #[test]
    fn test_analysis_payload() {
        let json = serde_json::to_string(&AnalysisResponse::completed()).unwrap();
        assert_eq!(
            json,
            r#"{"id":"analysis-123","status":"completed","message":"Analysis completed","anomalies_detected":0,"confidence":0.85}"#
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = ErrorResponse::not_found("GET", "/nope");
        assert_eq!(err.message, "No route for GET /nope");
        assert_eq!(err.status_code, 404);
    }
}

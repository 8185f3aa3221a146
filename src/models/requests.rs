use serde::{Deserialize, Serialize};

/// Request body for the analyze endpoint
///
/// Metric entries are untyped; the service accepts whatever the client sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub metrics: Vec<serde_json::Value>,
}

impl AnalysisRequest {
    /// Best-effort decode of a raw request body
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_metrics() {
        let req = AnalysisRequest::from_body(br#"{"metrics":[1,"cpu",{"p99":12.5},null]}"#).unwrap();
        assert_eq!(req.metrics.len(), 4);
    }

    #[test]
    fn test_missing_metrics_defaults_to_empty() {
        let req = AnalysisRequest::from_body(b"{}").unwrap();
        assert!(req.metrics.is_empty());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(AnalysisRequest::from_body(b"{not json").is_err());
        assert!(AnalysisRequest::from_body(b"").is_err());
    }
}

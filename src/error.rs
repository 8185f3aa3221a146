use thiserror::Error;

/// Errors that stop the service from starting or serving
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let err = ServiceError::Bind {
            addr: "0.0.0.0:8001".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "Failed to bind 0.0.0.0:8001: address in use");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ServiceError = config::ConfigError::Message("bad".to_string()).into();
        assert!(matches!(err, ServiceError::Config(_)));
    }
}

use thiserror::Error;

/// Failure while loading the manifest
///
/// The `Display` string is what the gallery shows to the user.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to read manifest body: {0}")]
    Body(String),

    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(LoadError::Status(500).to_string(), "HTTP 500");
        assert_eq!(LoadError::Status(404).to_string(), "HTTP 404");
    }

    #[test]
    fn test_network_message_is_verbatim() {
        let err = LoadError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}

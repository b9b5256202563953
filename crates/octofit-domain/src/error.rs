//! Fetch Errors
//!
//! Transport, status and body failures all surface as one message string.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error! status: 404");
        assert_eq!(FetchError::Network("Failed to fetch".into()).to_string(), "Failed to fetch");
        assert_eq!(
            FetchError::Parse("expected value at line 1 column 1".into()).to_string(),
            "expected value at line 1 column 1"
        );
    }
}

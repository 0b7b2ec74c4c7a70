//! Utility error types

use thiserror::Error;

/// Errors that can occur in the agent utilities
#[derive(Error, Debug)]
pub enum UtilError {
    /// Strict transform found no `Role:` line
    #[error("Couldn't find a message")]
    NoMessageFound,

    /// Strict transform found no `User:` turn to anchor the directive on
    #[error("Couldn't find place to put start of directive")]
    NoDirectivePlacementFound,

    /// Vocabulary violates the word list rules
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl UtilError {
    /// Create a vocabulary error
    pub fn invalid_vocabulary(msg: impl Into<String>) -> Self {
        UtilError::InvalidVocabulary(msg.into())
    }
}

/// Result type alias for utility operations
pub type UtilResult<T> = Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UtilError::NoMessageFound.to_string(),
            "Couldn't find a message"
        );

        let err = UtilError::invalid_vocabulary("nouns is empty");
        assert_eq!(err.to_string(), "Invalid vocabulary: nouns is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: UtilError = io_err.into();
        assert!(matches!(err, UtilError::Io(_)));
    }
}

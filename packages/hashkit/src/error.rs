//! Error handling for hasher construction and digest computation

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The requested algorithm is not in the supported (or enabled) set.
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Working memory for the digest could not be reserved.
    #[error("Allocation failure: could not reserve {requested} bytes")]
    AllocationFailure {
        /// Number of bytes the compute tried to reserve
        requested: usize,
    },

    /// Destination buffer handed to `hash_into` is shorter than the digest.
    #[error("Destination buffer too small: expected at least {expected}, got {actual}")]
    BufferTooSmall {
        /// Digest length of the bound algorithm
        expected: usize,
        /// Length of the buffer supplied
        actual: usize,
    },

    /// Hasher configuration failed validation or could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal failure such as a dropped compute task.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `unsupported_algorithm` error
    #[must_use]
    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm(what.into())
    }

    /// Create an `invalid_config` error
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether retrying the same call later may succeed.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }
}

impl From<serde_json::Error> for HashError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_allocation_failure_is_retriable() {
        assert!(HashError::AllocationFailure { requested: 32 }.is_retriable());
        assert!(!HashError::unsupported("sha0").is_retriable());
        assert!(!HashError::internal("dropped").is_retriable());
    }

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            HashError::unsupported("code 42").to_string(),
            "Unsupported hash algorithm: code 42"
        );
        let err = HashError::BufferTooSmall {
            expected: 32,
            actual: 8,
        };
        assert_eq!(
            err.to_string(),
            "Destination buffer too small: expected at least 32, got 8"
        );
    }
}

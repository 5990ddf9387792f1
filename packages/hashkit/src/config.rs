//! Hasher configuration: which algorithms are enabled and how async work is chunked

use crate::{HashError, HasherType, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Runtime configuration for constructing hashers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasherConfig {
    /// Algorithms that may be constructed through [`crate::Hasher::with_config`]
    #[serde(default = "default_enabled")]
    pub enabled: Vec<HasherType>,
    /// Bytes fed to the engine between yield points in async compute
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_enabled() -> Vec<HasherType> {
    HasherType::ALL.to_vec()
}

fn default_chunk_size() -> usize {
    8192 // 8 KB
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl HasherConfig {
    /// Restrict the configuration to the given algorithms
    #[must_use]
    pub fn with_enabled(mut self, enabled: impl IntoIterator<Item = HasherType>) -> Self {
        self.enabled = enabled.into_iter().collect();
        self
    }

    /// Set the async chunk size
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Whether `hasher_type` may be constructed under this configuration
    #[must_use]
    pub fn is_enabled(&self, hasher_type: HasherType) -> bool {
        self.enabled.contains(&hasher_type)
    }

    /// Check invariants
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidConfig` if the chunk size is zero or no
    /// algorithm is enabled.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(HashError::invalid_config("chunk_size must be non-zero"));
        }
        if self.enabled.is_empty() {
            return Err(HashError::invalid_config("no hash algorithm enabled"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidConfig` on malformed JSON, unknown algorithm
    /// names, or failed validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidConfig` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to read hasher config");
            HashError::invalid_config(format!("{}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidConfig` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

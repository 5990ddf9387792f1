//! Hasher construction and digest computation

use crate::engine::Engine;
use crate::streaming::StreamingHasher;
use crate::{AsyncDigestResult, Digest, HashError, HasherConfig, HasherType, Result};
use futures::Stream;
use tokio::sync::oneshot;
use tracing::{debug, trace, warn};

/// Computes digests under one algorithm chosen at construction
///
/// A `Hasher` carries no state between calls: every computation builds its
/// own transform context, so one instance can be shared freely and distinct
/// instances never observe each other.
///
/// Equality compares the bound algorithm only; the async chunk size taken
/// from a [`HasherConfig`] does not affect the digests produced.
#[derive(Clone, Copy, Debug)]
pub struct Hasher {
    hasher_type: HasherType,
    chunk_size: usize,
}

impl Hasher {
    /// Create a hasher bound to `hasher_type`
    #[must_use]
    pub fn new(hasher_type: HasherType) -> Self {
        debug!(algorithm = %hasher_type, "Creating hasher");
        Self {
            hasher_type,
            chunk_size: HasherConfig::default().chunk_size,
        }
    }

    /// Create a hasher from a stable numeric algorithm code
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for an unknown code.
    pub fn from_code(code: u32) -> Result<Self> {
        let hasher_type = HasherType::try_from(code).map_err(|e| {
            warn!(code, "Rejected unsupported hash algorithm code");
            e
        })?;
        Ok(Self::new(hasher_type))
    }

    /// Create a hasher from an algorithm name such as `"sha256"` or `"keccak256"`
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        let hasher_type = name.parse::<HasherType>().map_err(|e| {
            warn!(name, "Rejected unsupported hash algorithm name");
            e
        })?;
        Ok(Self::new(hasher_type))
    }

    /// Create a hasher restricted to the algorithms enabled in `config`
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidConfig` if the configuration fails
    /// validation and `HashError::UnsupportedAlgorithm` if `hasher_type` is
    /// not enabled.
    pub fn with_config(hasher_type: HasherType, config: &HasherConfig) -> Result<Self> {
        config.validate()?;
        if !config.is_enabled(hasher_type) {
            warn!(algorithm = %hasher_type, "Hash algorithm disabled by configuration");
            return Err(HashError::unsupported(format!(
                "{hasher_type} (disabled by configuration)"
            )));
        }
        debug!(algorithm = %hasher_type, chunk_size = config.chunk_size, "Creating hasher");
        Ok(Self {
            hasher_type,
            chunk_size: config.chunk_size,
        })
    }

    /// Algorithm this hasher is bound to
    #[must_use]
    pub fn hasher_type(&self) -> HasherType {
        self.hasher_type
    }

    /// Length in bytes of every digest this hasher produces
    #[must_use]
    pub fn digest_len(&self) -> usize {
        self.hasher_type.digest_len()
    }

    /// Hash `input` in full and return its digest
    ///
    /// # Errors
    ///
    /// Returns `HashError::AllocationFailure` if the output buffer cannot be
    /// reserved. Input content and length never cause a failure.
    pub fn hash(&self, input: &[u8]) -> Result<Digest> {
        trace!(algorithm = %self.hasher_type, len = input.len(), "Computing digest");
        let mut bytes = self.output_buffer()?;
        let mut engine = Engine::new(self.hasher_type);
        engine.update(input);
        engine.finalize_into(&mut bytes);
        Ok(Digest::new(self.hasher_type, bytes))
    }

    /// Hash `src` into the front of `dst`, returning the number of bytes written
    ///
    /// # Errors
    ///
    /// Returns `HashError::BufferTooSmall` if `dst` is shorter than
    /// [`Hasher::digest_len`]; `dst` is left untouched in that case.
    pub fn hash_into(&self, dst: &mut [u8], src: &[u8]) -> Result<usize> {
        let len = self.digest_len();
        if dst.len() < len {
            return Err(HashError::BufferTooSmall {
                expected: len,
                actual: dst.len(),
            });
        }
        let mut engine = Engine::new(self.hasher_type);
        engine.update(src);
        engine.finalize_into(&mut dst[..len]);
        Ok(len)
    }

    /// Hash `data` on the current tokio runtime
    ///
    /// The data is fed to the transform in configured chunks with a yield
    /// point after each one.
    ///
    /// # Panics
    ///
    /// Panics if called from outside the context of a tokio runtime.
    pub fn compute<T: Into<Vec<u8>>>(&self, data: T) -> AsyncDigestResult {
        let data = data.into();
        let hasher = *self;

        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = hasher.hash_chunked(&data).await;
            let _ = tx.send(result);
        });

        AsyncDigestResult::new(rx)
    }

    /// Hash a stream of byte chunks incrementally
    pub fn stream<S>(&self, input: S) -> StreamingHasher<S>
    where
        S: Stream<Item = Vec<u8>>,
    {
        StreamingHasher::new(input, self.hasher_type)
    }

    async fn hash_chunked(&self, data: &[u8]) -> Result<Digest> {
        let mut bytes = self.output_buffer()?;
        let mut engine = Engine::new(self.hasher_type);

        for chunk in data.chunks(self.chunk_size) {
            engine.update(chunk);
            tokio::task::yield_now().await;
        }

        engine.finalize_into(&mut bytes);
        Ok(Digest::new(self.hasher_type, bytes))
    }

    fn output_buffer(&self) -> Result<Vec<u8>> {
        let len = self.digest_len();
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(len).map_err(|e| {
            warn!(algorithm = %self.hasher_type, error = %e, "Digest buffer allocation failed");
            HashError::AllocationFailure { requested: len }
        })?;
        bytes.resize(len, 0);
        Ok(bytes)
    }
}

impl PartialEq for Hasher {
    fn eq(&self, other: &Self) -> bool {
        self.hasher_type == other.hasher_type
    }
}

impl Eq for Hasher {}

impl From<HasherType> for Hasher {
    fn from(hasher_type: HasherType) -> Self {
        Self::new(hasher_type)
    }
}

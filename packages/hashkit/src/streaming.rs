//! Incremental hashing over a stream of byte chunks

use crate::engine::Engine;
use crate::{Digest, HashError, HasherType, Result};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Hashes each chunk of `input` as it arrives
    ///
    /// Yields one [`StreamProgress`] per input chunk, then a final item
    /// carrying the digest of everything seen.
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        hasher_type: HasherType,
        engine: Option<Engine>,
        total_bytes: u64,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    pub(crate) fn new(input: S, hasher_type: HasherType) -> Self {
        Self {
            input,
            hasher_type,
            engine: Some(Engine::new(hasher_type)),
            total_bytes: 0,
        }
    }

    /// Total number of bytes processed so far
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Progress item emitted by [`StreamingHasher`]
#[derive(Debug, Clone)]
pub struct StreamProgress {
    /// Bytes in the chunk just processed (zero for the final item)
    pub bytes_processed: u64,
    /// Total bytes processed so far
    pub total_bytes: u64,
    /// Digest of the whole stream, present only on the final item
    pub digest: Option<Digest>,
}

impl StreamProgress {
    /// Whether this is the final item
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.digest.is_some()
    }
}

/// Outcome of draining a [`StreamingHasher`]
#[derive(Debug, Clone)]
pub struct StreamDigest {
    /// Digest of the concatenated chunks
    pub digest: Digest,
    /// Total bytes hashed
    pub total_bytes: u64,
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamProgress>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        let Some(engine) = this.engine.as_mut() else {
            return Poll::Ready(None);
        };

        match this.input.poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                let chunk_size = chunk.len() as u64;
                *this.total_bytes += chunk_size;
                engine.update(&chunk);

                Poll::Ready(Some(Ok(StreamProgress {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                let Some(engine) = this.engine.take() else {
                    return Poll::Ready(None);
                };
                let mut bytes = vec![0u8; this.hasher_type.digest_len()];
                engine.finalize_into(&mut bytes);

                Poll::Ready(Some(Ok(StreamProgress {
                    bytes_processed: 0,
                    total_bytes: *this.total_bytes,
                    digest: Some(Digest::new(*this.hasher_type, bytes)),
                })))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Drain a streaming hasher and return the final digest
///
/// # Errors
///
/// Returns `HashError::Internal` if the stream ends without a final digest.
pub async fn collect_digest<S>(mut hasher: StreamingHasher<S>) -> Result<StreamDigest>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    while let Some(progress) = hasher.next().await {
        let progress = progress?;
        if let Some(digest) = progress.digest {
            return Ok(StreamDigest {
                digest,
                total_bytes: progress.total_bytes,
            });
        }
    }

    Err(HashError::internal("Stream ended without producing a final digest"))
}

//! Multi-algorithm hashing behind a single `Hasher` type
//!
//! ```
//! use hashkit::{Hasher, HasherType};
//!
//! let hasher = Hasher::new(HasherType::Sha256);
//! let digest = hasher.hash(b"hello").unwrap();
//! assert_eq!(digest.len(), 32);
//! assert_eq!(
//!     digest.to_hex(),
//!     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
//! );
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod async_result;
pub mod config;
mod engine;
pub mod error;
pub mod hasher;
pub mod output;
pub mod streaming;

// Re-export error types
pub use error::{HashError, Result};

pub use algorithm::HasherType;
pub use async_result::{AsyncDigestResult, AsyncDigestResultWithHandler};
pub use config::HasherConfig;
pub use hasher::Hasher;
pub use output::Digest;
pub use streaming::{collect_digest, StreamDigest, StreamProgress, StreamingHasher};

//! Digest value type with encoding support

use crate::HasherType;

/// Fixed-length output of a hash computation
///
/// The length always equals [`HasherType::digest_len`] of the algorithm that
/// produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    hasher_type: HasherType,
    bytes: Vec<u8>,
}

impl Digest {
    pub(crate) fn new(hasher_type: HasherType, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), hasher_type.digest_len());
        Self { hasher_type, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn hasher_type(&self) -> HasherType {
        self.hasher_type
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a `Vec<u8>`
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hexadecimal rendering
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Get the digest as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose, Engine as _};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Get the digest as a base64url string (URL-safe)
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.bytes)
    }

    /// Length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for digests of the supported algorithms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Digest {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.bytes.as_slice() == other.as_slice()
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Digest {
        Digest::new(HasherType::Md5, (0u8..16).collect())
    }

    #[test]
    fn renders_hex_and_base64() {
        let d = sample();
        assert_eq!(d.to_hex(), "000102030405060708090a0b0c0d0e0f");
        assert_eq!(d.to_string(), d.to_hex());
        assert_eq!(d.to_base64(), "AAECAwQFBgcICQoLDA0ODw==");
        assert_eq!(d.to_base64url(), "AAECAwQFBgcICQoLDA0ODw");
    }

    #[test]
    fn compares_against_raw_bytes() {
        let d = sample();
        let raw: Vec<u8> = (0u8..16).collect();
        assert!(d == *raw.as_slice());
        assert_eq!(d.len(), 16);
        assert!(!d.is_empty());
        assert_eq!(d.hasher_type(), HasherType::Md5);
        assert_eq!(Vec::from(d), raw);
    }
}

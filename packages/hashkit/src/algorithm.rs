//! The closed set of supported hash algorithms
//!
//! Numeric codes are stable and match the native hasher enumeration so values
//! crossing a foreign boundary can be validated with [`HasherType::try_from`].

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported hash algorithm variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum HasherType {
    /// SHA-1
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// Double SHA-256, `SHA256(SHA256(m))`
    Sha256d,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA3-256 (FIPS 202)
    Sha3_256,
    /// RIPEMD-160
    Ripemd160,
    /// `RIPEMD160(SHA256(m))`
    Hash160,
    /// Original Keccak-256, as used by Ethereum
    Keccak256,
    /// MD5
    Md5,
}

impl HasherType {
    /// Every supported variant, in code order
    pub const ALL: [HasherType; 11] = [
        HasherType::Sha1,
        HasherType::Sha224,
        HasherType::Sha256,
        HasherType::Sha256d,
        HasherType::Sha384,
        HasherType::Sha512,
        HasherType::Sha3_256,
        HasherType::Ripemd160,
        HasherType::Hash160,
        HasherType::Keccak256,
        HasherType::Md5,
    ];

    /// Digest length in bytes
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            HasherType::Sha1 => 20,
            HasherType::Sha224 => 28,
            HasherType::Sha256 => 32,
            HasherType::Sha256d => 32,
            HasherType::Sha384 => 48,
            HasherType::Sha512 => 64,
            HasherType::Sha3_256 => 32,
            HasherType::Ripemd160 => 20,
            HasherType::Hash160 => 20,
            HasherType::Keccak256 => 32,
            HasherType::Md5 => 16,
        }
    }

    /// Stable numeric code
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            HasherType::Sha1 => 0,
            HasherType::Sha224 => 1,
            HasherType::Sha256 => 2,
            HasherType::Sha256d => 3,
            HasherType::Sha384 => 4,
            HasherType::Sha512 => 5,
            HasherType::Sha3_256 => 6,
            HasherType::Ripemd160 => 7,
            HasherType::Hash160 => 8,
            HasherType::Keccak256 => 9,
            HasherType::Md5 => 10,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HasherType::Sha1 => "sha1",
            HasherType::Sha224 => "sha224",
            HasherType::Sha256 => "sha256",
            HasherType::Sha256d => "sha256d",
            HasherType::Sha384 => "sha384",
            HasherType::Sha512 => "sha512",
            HasherType::Sha3_256 => "sha3",
            HasherType::Ripemd160 => "rmd160",
            HasherType::Hash160 => "hash160",
            HasherType::Keccak256 => "keccak256",
            HasherType::Md5 => "md5",
        }
    }
}

impl TryFrom<u32> for HasherType {
    type Error = HashError;

    fn try_from(code: u32) -> Result<Self> {
        HasherType::ALL
            .into_iter()
            .find(|t| t.code() == code)
            .ok_or_else(|| HashError::unsupported(format!("code {code}")))
    }
}

impl FromStr for HasherType {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let found = match lowered.as_str() {
            "sha1" | "sha-1" => HasherType::Sha1,
            "sha224" | "sha-224" => HasherType::Sha224,
            "sha256" | "sha-256" => HasherType::Sha256,
            "sha256d" | "sha256_2" | "double-sha256" => HasherType::Sha256d,
            "sha384" | "sha-384" => HasherType::Sha384,
            "sha512" | "sha-512" => HasherType::Sha512,
            "sha3" | "sha3-256" | "sha3_256" => HasherType::Sha3_256,
            "rmd160" | "ripemd160" | "ripemd-160" => HasherType::Ripemd160,
            "hash160" => HasherType::Hash160,
            "keccak256" | "keccak-256" => HasherType::Keccak256,
            "md5" => HasherType::Md5,
            _ => return Err(HashError::unsupported(s)),
        };
        Ok(found)
    }
}

impl TryFrom<String> for HasherType {
    type Error = HashError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<HasherType> for &'static str {
    fn from(t: HasherType) -> Self {
        t.name()
    }
}

impl fmt::Display for HasherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_and_are_dense() {
        for (i, t) in HasherType::ALL.into_iter().enumerate() {
            assert_eq!(t.code() as usize, i);
            assert_eq!(HasherType::try_from(t.code()), Ok(t));
        }
    }

    #[test]
    fn unknown_code_is_unsupported() {
        let err = HasherType::try_from(11).unwrap_err();
        assert!(matches!(err, HashError::UnsupportedAlgorithm(_)));
        assert!(HasherType::try_from(u32::MAX).is_err());
    }

    #[test]
    fn names_parse_back() {
        for t in HasherType::ALL {
            assert_eq!(t.name().parse::<HasherType>(), Ok(t));
            assert_eq!(t.to_string(), t.name());
        }
        assert_eq!("SHA-256".parse::<HasherType>(), Ok(HasherType::Sha256));
        assert_eq!("ripemd160".parse::<HasherType>(), Ok(HasherType::Ripemd160));
        assert!(matches!(
            "blake3".parse::<HasherType>(),
            Err(HashError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&HasherType::Keccak256).unwrap();
        assert_eq!(json, "\"keccak256\"");
        let back: HasherType = serde_json::from_str("\"sha3\"").unwrap();
        assert_eq!(back, HasherType::Sha3_256);
        assert!(serde_json::from_str::<HasherType>("\"whirlpool\"").is_err());
    }
}

//! Per-call transform state
//!
//! An [`Engine`] is built fresh for every computation and consumed by
//! [`Engine::finalize_into`], so no transform context ever outlives the call
//! that created it.

use crate::HasherType;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Keccak256, Sha3_256};

/// Internal hasher state for the different algorithms
pub(crate) enum Engine {
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha256d(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha3_256(Sha3_256),
    Ripemd160(Ripemd160),
    Hash160(Sha256),
    Keccak256(Keccak256),
    Md5(Md5),
}

impl Engine {
    pub(crate) fn new(hasher_type: HasherType) -> Self {
        match hasher_type {
            HasherType::Sha1 => Engine::Sha1(Sha1::new()),
            HasherType::Sha224 => Engine::Sha224(Sha224::new()),
            HasherType::Sha256 => Engine::Sha256(Sha256::new()),
            HasherType::Sha256d => Engine::Sha256d(Sha256::new()),
            HasherType::Sha384 => Engine::Sha384(Sha384::new()),
            HasherType::Sha512 => Engine::Sha512(Sha512::new()),
            HasherType::Sha3_256 => Engine::Sha3_256(Sha3_256::new()),
            HasherType::Ripemd160 => Engine::Ripemd160(Ripemd160::new()),
            HasherType::Hash160 => Engine::Hash160(Sha256::new()),
            HasherType::Keccak256 => Engine::Keccak256(Keccak256::new()),
            HasherType::Md5 => Engine::Md5(Md5::new()),
        }
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        match self {
            Engine::Sha1(h) => h.update(data),
            Engine::Sha224(h) => h.update(data),
            Engine::Sha256(h) | Engine::Sha256d(h) | Engine::Hash160(h) => h.update(data),
            Engine::Sha384(h) => h.update(data),
            Engine::Sha512(h) => h.update(data),
            Engine::Sha3_256(h) => h.update(data),
            Engine::Ripemd160(h) => h.update(data),
            Engine::Keccak256(h) => h.update(data),
            Engine::Md5(h) => h.update(data),
        }
    }

    /// Write the final digest into `out`, which must be exactly the digest length.
    pub(crate) fn finalize_into(self, out: &mut [u8]) {
        match self {
            Engine::Sha1(h) => out.copy_from_slice(&h.finalize()),
            Engine::Sha224(h) => out.copy_from_slice(&h.finalize()),
            Engine::Sha256(h) => out.copy_from_slice(&h.finalize()),
            Engine::Sha256d(h) => out.copy_from_slice(&Sha256::digest(h.finalize())),
            Engine::Sha384(h) => out.copy_from_slice(&h.finalize()),
            Engine::Sha512(h) => out.copy_from_slice(&h.finalize()),
            Engine::Sha3_256(h) => out.copy_from_slice(&h.finalize()),
            Engine::Ripemd160(h) => out.copy_from_slice(&h.finalize()),
            Engine::Hash160(h) => out.copy_from_slice(&Ripemd160::digest(h.finalize())),
            Engine::Keccak256(h) => out.copy_from_slice(&h.finalize()),
            Engine::Md5(h) => out.copy_from_slice(&h.finalize()),
        }
    }
}

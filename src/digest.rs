// src/digest.rs
//! One-shot message digests
//!
//! Stateless: identical algorithm and input always produce identical bytes.

use crate::error::CryptoError;
use crate::registry::HashAlgorithm;

/// Compute the digest of `data` under the named algorithm
pub fn digest(algorithm: &str, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    Ok(HashAlgorithm::parse(algorithm)?.digest(data))
}

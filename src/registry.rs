// src/registry.rs
//! Algorithm registry — closed sets of symbolic names
//!
//! Every name crossing the boundary (cipher mode, hash, RSA padding, key
//! format, signature scheme) parses into one of these enums exactly once.
//! The engines only ever see enum values; an unknown name is a typed
//! "unsupported" error, never a crash and never a pass-through string.

use crate::consts::SIGNATURE_SCHEME;
use crate::error::CryptoError;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// AES block cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherMode {
    Cbc,
    Ctr,
    Cfb8,
}

impl CipherMode {
    pub fn parse(name: &str) -> Result<Self, CryptoError> {
        match name {
            "CBC" => Ok(CipherMode::Cbc),
            "CTR" => Ok(CipherMode::Ctr),
            "CFB8" => Ok(CipherMode::Cfb8),
            other => Err(CryptoError::UnsupportedMode(other.to_owned())),
        }
    }

    /// Fixed mode → padding table: CBC carries PKCS#7 block padding
    /// (what JCA calls PKCS5Padding on a 16-byte block), stream-like
    /// modes carry none.
    pub const fn padding(self) -> BlockPadding {
        match self {
            CipherMode::Cbc => BlockPadding::Pkcs7,
            CipherMode::Ctr | CipherMode::Cfb8 => BlockPadding::None,
        }
    }
}

/// Padding scheme attached to a cipher mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockPadding {
    Pkcs7,
    None,
}

/// Hash algorithms accepted for digests, signatures and OAEP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn parse(name: &str) -> Result<Self, CryptoError> {
        match name {
            "SHA-1" => Ok(HashAlgorithm::Sha1),
            "SHA-256" => Ok(HashAlgorithm::Sha256),
            "SHA-384" => Ok(HashAlgorithm::Sha384),
            "SHA-512" => Ok(HashAlgorithm::Sha512),
            other => Err(CryptoError::UnsupportedHash(other.to_owned())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// One-shot digest of `data`
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

/// RSA encryption padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaPadding {
    Pkcs1,
    Oaep,
}

impl RsaPadding {
    pub fn parse(name: &str) -> Result<Self, CryptoError> {
        match name {
            "PKCS1" => Ok(RsaPadding::Pkcs1),
            "OAEP" => Ok(RsaPadding::Oaep),
            other => Err(CryptoError::UnsupportedPadding(other.to_owned())),
        }
    }
}

/// Standard key encodings — each names one KeyStore namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// PKCS#8 DER, private keys
    Pkcs8,
    /// SubjectPublicKeyInfo DER, public keys
    Spki,
}

impl KeyFormat {
    pub fn parse(name: &str) -> Result<Self, CryptoError> {
        match name {
            "pkcs8" => Ok(KeyFormat::Pkcs8),
            "spki" => Ok(KeyFormat::Spki),
            other => Err(CryptoError::UnsupportedFormat(other.to_owned())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            KeyFormat::Pkcs8 => "pkcs8",
            KeyFormat::Spki => "spki",
        }
    }
}

/// Signing is fixed to PKCS#1 v1.5; anything else is rejected up front
pub fn ensure_signature_scheme(scheme: &str) -> Result<(), CryptoError> {
    if scheme == SIGNATURE_SCHEME {
        Ok(())
    } else {
        Err(CryptoError::UnsupportedScheme(scheme.to_owned()))
    }
}

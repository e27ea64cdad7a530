// src/lib.rs
//! crypto-bridge-engine — bridge-exposed cryptographic operations
//!
//! Features:
//! - One-shot SHA-1/256/384/512 digests
//! - AES CBC / CTR / CFB8 transforms over raw key + IV bytes
//! - RSA key lifecycle (generate, import, export) behind opaque UUID handles
//! - RSA PKCS#1 v1.5 sign/verify and PKCS#1 v1.5 / OAEP encrypt/decrypt
//!
//! Callers talk to [`CryptoBridge`]: base64 payloads and symbolic algorithm
//! names in, base64 results or tagged errors (stable code + message) out.

pub mod aes;
pub mod bridge;
pub mod config;
pub mod consts;
pub mod digest;
pub mod error;
pub mod keystore;
pub mod registry;
pub mod rsa;

// Re-export everything callers need at the crate root
pub use bridge::{CryptoBridge, RsaKeyDescriptor, RsaKeyPairDescriptor};
pub use error::{BridgeError, CryptoError, ErrorCode};
pub use keystore::KeyStore;
pub use registry::{CipherMode, HashAlgorithm, KeyFormat, RsaPadding};
pub use self::rsa::RsaEngine;

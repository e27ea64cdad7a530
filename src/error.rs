// src/error.rs
//! Error taxonomy for the engine
//!
//! `CryptoError` is the internal taxonomy (argument / resource / transform
//! failures). `BridgeError` is what crosses the operation boundary: a stable
//! code plus a human-readable message, nothing else.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Internal failure taxonomy, produced by the engines and the registry
#[derive(Error, Debug)]
pub enum CryptoError {
    // Argument errors — rejected before the primitive runs
    #[error("mode not supported: {0}")]
    UnsupportedMode(String),

    #[error("hash not supported: {0}")]
    UnsupportedHash(String),

    #[error("padding not supported: {0}")]
    UnsupportedPadding(String),

    #[error("format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("scheme not supported: {0}")]
    UnsupportedScheme(String),

    #[error("OAEP requires a hash parameter")]
    MissingOaepHash,

    #[error("invalid {what} length: {len} bytes")]
    InvalidLength { what: &'static str, len: usize },

    #[error("invalid base64 in {0}")]
    Encoding(&'static str),

    #[error("modulus size {0} outside supported range")]
    ModulusOutOfRange(usize),

    // Resource errors — a handle that does not resolve in its namespace
    #[error("key does not exist: {0}")]
    KeyNotFound(String),

    // Transform errors — the primitive itself failed
    #[error("key encoding invalid: {0}")]
    MalformedKey(String),

    #[error("transform failed: {0}")]
    Transform(String),

    #[error(transparent)]
    Rsa(#[from] rsa::Error),
}

/// Stable operation codes, one per named operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "DIGEST_ERROR")]
    Digest,
    #[serde(rename = "AES_ENCRYPT_ERROR")]
    AesEncrypt,
    #[serde(rename = "AES_DECRYPT_ERROR")]
    AesDecrypt,
    #[serde(rename = "RSA_GENERATE_ERROR")]
    RsaGenerate,
    #[serde(rename = "RSA_IMPORT_ERROR")]
    RsaImport,
    #[serde(rename = "RSA_EXPORT_ERROR")]
    RsaExport,
    #[serde(rename = "RSA_SIGN_ERROR")]
    RsaSign,
    #[serde(rename = "RSA_VERIFY_ERROR")]
    RsaVerify,
    #[serde(rename = "RSA_ENCRYPT_ERROR")]
    RsaEncrypt,
    #[serde(rename = "RSA_DECRYPT_ERROR")]
    RsaDecrypt,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Digest => "DIGEST_ERROR",
            ErrorCode::AesEncrypt => "AES_ENCRYPT_ERROR",
            ErrorCode::AesDecrypt => "AES_DECRYPT_ERROR",
            ErrorCode::RsaGenerate => "RSA_GENERATE_ERROR",
            ErrorCode::RsaImport => "RSA_IMPORT_ERROR",
            ErrorCode::RsaExport => "RSA_EXPORT_ERROR",
            ErrorCode::RsaSign => "RSA_SIGN_ERROR",
            ErrorCode::RsaVerify => "RSA_VERIFY_ERROR",
            ErrorCode::RsaEncrypt => "RSA_ENCRYPT_ERROR",
            ErrorCode::RsaDecrypt => "RSA_DECRYPT_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged error returned across the operation boundary
#[derive(Error, Debug, Serialize)]
#[error("{code}: {message}")]
pub struct BridgeError {
    pub code: ErrorCode,
    pub message: String,
}

impl BridgeError {
    /// Converter for the operation boundary: tags the internal error with
    /// the operation's stable code and logs it
    pub(crate) fn tag(code: ErrorCode) -> impl FnOnce(CryptoError) -> BridgeError {
        move |err| {
            tracing::warn!(code = code.as_str(), %err, "crypto operation failed");
            BridgeError {
                code,
                message: err.to_string(),
            }
        }
    }
}

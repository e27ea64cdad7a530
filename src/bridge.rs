// src/bridge.rs
//! The operation surface exposed to the bridge
//!
//! Ten named operations taking textual arguments: binary payloads cross as
//! standard base64, algorithm names as symbolic strings, keys as opaque
//! handle ids. Every failure is converted here, at the boundary, into one
//! `BridgeError` carrying the operation's stable code; no partial results,
//! nothing retried.

use crate::aes::{self, AesOp};
use crate::digest;
use crate::error::{BridgeError, CryptoError, ErrorCode};
use crate::registry::{ensure_signature_scheme, CipherMode, HashAlgorithm, KeyFormat, RsaPadding};
use crate::rsa::RsaEngine;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle descriptor returned by generate/import — the id is all a caller
/// ever holds, key material stays inside the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaKeyDescriptor {
    pub uuid: Uuid,
    pub format: KeyFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsaKeyPairDescriptor {
    pub private_key: RsaKeyDescriptor,
    pub public_key: RsaKeyDescriptor,
}

/// The crypto operations service
#[derive(Debug, Default)]
pub struct CryptoBridge {
    rsa: RsaEngine,
}

impl CryptoBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rsa_engine(&self) -> &RsaEngine {
        &self.rsa
    }

    /// `digest(algorithm, data) -> base64`
    pub fn digest(&self, algorithm: &str, data: &str) -> Result<String, BridgeError> {
        (|| {
            let data = decode(data, "data")?;
            Ok(BASE64.encode(digest::digest(algorithm, &data)?))
        })()
        .map_err(BridgeError::tag(ErrorCode::Digest))
    }

    /// `aesEncrypt(mode, iv, key, data) -> base64`
    pub fn aes_encrypt(
        &self,
        mode: &str,
        iv: &str,
        key: &str,
        data: &str,
    ) -> Result<String, BridgeError> {
        self.aes_transform(AesOp::Encrypt, mode, iv, key, data)
            .map_err(BridgeError::tag(ErrorCode::AesEncrypt))
    }

    /// `aesDecrypt(mode, iv, key, data) -> base64`
    pub fn aes_decrypt(
        &self,
        mode: &str,
        iv: &str,
        key: &str,
        data: &str,
    ) -> Result<String, BridgeError> {
        self.aes_transform(AesOp::Decrypt, mode, iv, key, data)
            .map_err(BridgeError::tag(ErrorCode::AesDecrypt))
    }

    fn aes_transform(
        &self,
        op: AesOp,
        mode: &str,
        iv: &str,
        key: &str,
        data: &str,
    ) -> Result<String, CryptoError> {
        let mode = CipherMode::parse(mode)?;
        tracing::debug!(?op, ?mode, padding = ?mode.padding(), "aes transform");
        let iv = decode(iv, "iv")?;
        let key = decode(key, "key")?;
        let data = decode(data, "data")?;
        Ok(BASE64.encode(aes::transform(op, mode, &iv, &key, &data)?))
    }

    /// `rsaGenerateKeyPair(modulusBits) -> { privateKey, publicKey }`
    pub fn rsa_generate_key_pair(
        &self,
        modulus_bits: usize,
    ) -> Result<RsaKeyPairDescriptor, BridgeError> {
        let (private_id, public_id) = self
            .rsa
            .generate_key_pair(modulus_bits)
            .map_err(BridgeError::tag(ErrorCode::RsaGenerate))?;
        Ok(RsaKeyPairDescriptor {
            private_key: RsaKeyDescriptor {
                uuid: private_id,
                format: KeyFormat::Pkcs8,
            },
            public_key: RsaKeyDescriptor {
                uuid: public_id,
                format: KeyFormat::Spki,
            },
        })
    }

    /// `rsaImportKey(format, key) -> { uuid, format }`
    pub fn rsa_import_key(&self, format: &str, key: &str) -> Result<RsaKeyDescriptor, BridgeError> {
        (|| {
            let format = KeyFormat::parse(format)?;
            let der = decode(key, "key")?;
            let uuid = self.rsa.import_key(format, &der)?;
            Ok(RsaKeyDescriptor { uuid, format })
        })()
        .map_err(BridgeError::tag(ErrorCode::RsaImport))
    }

    /// `rsaExportKey(format, id) -> base64`
    pub fn rsa_export_key(&self, format: &str, id: &str) -> Result<String, BridgeError> {
        (|| {
            let format = KeyFormat::parse(format)?;
            let id = parse_handle(id)?;
            Ok(BASE64.encode(self.rsa.export_key(format, id)?))
        })()
        .map_err(BridgeError::tag(ErrorCode::RsaExport))
    }

    /// `rsaSign(scheme, hash, id, data) -> base64`
    pub fn rsa_sign(
        &self,
        scheme: &str,
        hash: &str,
        id: &str,
        data: &str,
    ) -> Result<String, BridgeError> {
        (|| {
            ensure_signature_scheme(scheme)?;
            let hash = HashAlgorithm::parse(hash)?;
            let id = parse_handle(id)?;
            let data = decode(data, "data")?;
            Ok(BASE64.encode(self.rsa.sign(hash, id, &data)?))
        })()
        .map_err(BridgeError::tag(ErrorCode::RsaSign))
    }

    /// `rsaVerify(scheme, hash, id, data, signature) -> bool`
    ///
    /// An invalid signature is a successful `false`, not an error.
    pub fn rsa_verify(
        &self,
        scheme: &str,
        hash: &str,
        id: &str,
        data: &str,
        signature: &str,
    ) -> Result<bool, BridgeError> {
        (|| {
            ensure_signature_scheme(scheme)?;
            let hash = HashAlgorithm::parse(hash)?;
            let id = parse_handle(id)?;
            let data = decode(data, "data")?;
            let signature = decode(signature, "signature")?;
            self.rsa.verify(hash, id, &data, &signature)
        })()
        .map_err(BridgeError::tag(ErrorCode::RsaVerify))
    }

    /// `rsaEncrypt(padding, hash?, id, data) -> base64`
    pub fn rsa_encrypt(
        &self,
        padding: &str,
        hash: Option<&str>,
        id: &str,
        data: &str,
    ) -> Result<String, BridgeError> {
        (|| {
            let padding = RsaPadding::parse(padding)?;
            let hash = hash.map(HashAlgorithm::parse).transpose()?;
            let id = parse_handle(id)?;
            let data = decode(data, "data")?;
            Ok(BASE64.encode(self.rsa.encrypt(padding, hash, id, &data)?))
        })()
        .map_err(BridgeError::tag(ErrorCode::RsaEncrypt))
    }

    /// `rsaDecrypt(padding, hash?, id, data) -> base64`
    pub fn rsa_decrypt(
        &self,
        padding: &str,
        hash: Option<&str>,
        id: &str,
        data: &str,
    ) -> Result<String, BridgeError> {
        (|| {
            let padding = RsaPadding::parse(padding)?;
            let hash = hash.map(HashAlgorithm::parse).transpose()?;
            let id = parse_handle(id)?;
            let data = decode(data, "data")?;
            Ok(BASE64.encode(self.rsa.decrypt(padding, hash, id, &data)?))
        })()
        .map_err(BridgeError::tag(ErrorCode::RsaDecrypt))
    }
}

fn decode(payload: &str, what: &'static str) -> Result<Vec<u8>, CryptoError> {
    BASE64
        .decode(payload)
        .map_err(|_| CryptoError::Encoding(what))
}

// A handle that is not even a UUID cannot be in any namespace, so it gets
// the same error an unknown handle does.
fn parse_handle(id: &str) -> Result<Uuid, CryptoError> {
    Uuid::parse_str(id).map_err(|_| CryptoError::KeyNotFound(id.to_owned()))
}

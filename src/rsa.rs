// src/rsa.rs
//! RSA key lifecycle and asymmetric transforms
//!
//! Every operation resolves its key through the handle store; nothing here
//! holds key material between calls. Signing is PKCS#1 v1.5 over a prehash,
//! encryption is PKCS#1 v1.5 or OAEP where the label digest and the MGF1
//! digest are always the same hash.

use crate::config;
use crate::consts::F4_EXPONENT;
use crate::error::CryptoError;
use crate::keystore::KeyStore;
use crate::registry::{HashAlgorithm, KeyFormat, RsaPadding};
use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use uuid::Uuid;

/// RSA engine owning the process-wide handle store
#[derive(Debug, Default)]
pub struct RsaEngine {
    store: KeyStore,
}

impl RsaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keystore(&self) -> &KeyStore {
        &self.store
    }

    /// Generate a key pair with public exponent F4 and store both halves
    /// under fresh handles: (private id, public id)
    pub fn generate_key_pair(&self, modulus_bits: usize) -> Result<(Uuid, Uuid), CryptoError> {
        let cfg = config::load();
        if !(cfg.rsa.min_modulus_bits..=cfg.rsa.max_modulus_bits).contains(&modulus_bits) {
            return Err(CryptoError::ModulusOutOfRange(modulus_bits));
        }
        tracing::debug!(modulus_bits, "generating RSA key pair");
        let private =
            RsaPrivateKey::new_with_exp(&mut OsRng, modulus_bits, &BigUint::from(F4_EXPONENT))?;
        let public = RsaPublicKey::from(&private);
        Ok((self.store.put_private(private), self.store.put_public(public)))
    }

    /// Decode a standard key encoding and store it under a fresh handle
    pub fn import_key(&self, format: KeyFormat, der: &[u8]) -> Result<Uuid, CryptoError> {
        match format {
            KeyFormat::Pkcs8 => {
                let key = RsaPrivateKey::from_pkcs8_der(der)
                    .map_err(|err| CryptoError::MalformedKey(err.to_string()))?;
                Ok(self.store.put_private(key))
            }
            KeyFormat::Spki => {
                let key = RsaPublicKey::from_public_key_der(der)
                    .map_err(|err| CryptoError::MalformedKey(err.to_string()))?;
                Ok(self.store.put_public(key))
            }
        }
    }

    /// Standard DER encoding of the key behind `id`, in the namespace
    /// matching `format`
    pub fn export_key(&self, format: KeyFormat, id: Uuid) -> Result<Vec<u8>, CryptoError> {
        match format {
            KeyFormat::Pkcs8 => {
                let key = self.store.private(id)?;
                let doc = key
                    .to_pkcs8_der()
                    .map_err(|err| CryptoError::Transform(err.to_string()))?;
                Ok(doc.as_bytes().to_vec())
            }
            KeyFormat::Spki => {
                let key = self.store.public(id)?;
                let doc = key
                    .to_public_key_der()
                    .map_err(|err| CryptoError::Transform(err.to_string()))?;
                Ok(doc.into_vec())
            }
        }
    }

    /// PKCS#1 v1.5 signature over the digest of `data`
    pub fn sign(&self, hash: HashAlgorithm, id: Uuid, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let key = self.store.private(id)?;
        Ok(key.sign(pkcs1v15_padding(hash), &hash.digest(data))?)
    }

    /// Check a PKCS#1 v1.5 signature.
    ///
    /// An invalid signature is a successful `false`; only missing keys and
    /// argument problems are errors.
    pub fn verify(
        &self,
        hash: HashAlgorithm,
        id: Uuid,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        let key = self.store.public(id)?;
        // A signature that is not one modulus wide is malformed input,
        // not a failed verification
        if signature.len() != key.size() {
            return Err(CryptoError::Transform(format!(
                "signature length {} does not match modulus",
                signature.len()
            )));
        }
        match key.verify(pkcs1v15_padding(hash), &hash.digest(data), signature) {
            Ok(()) => Ok(true),
            Err(rsa::Error::Verification) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Encrypt with the public key behind `id`
    pub fn encrypt(
        &self,
        padding: RsaPadding,
        hash: Option<HashAlgorithm>,
        id: Uuid,
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let key = self.store.public(id)?;
        match padding {
            RsaPadding::Pkcs1 => Ok(key.encrypt(&mut OsRng, Pkcs1v15Encrypt, data)?),
            RsaPadding::Oaep => {
                let hash = hash.ok_or(CryptoError::MissingOaepHash)?;
                Ok(key.encrypt(&mut OsRng, oaep_padding(hash), data)?)
            }
        }
    }

    /// Decrypt with the private key behind `id`
    pub fn decrypt(
        &self,
        padding: RsaPadding,
        hash: Option<HashAlgorithm>,
        id: Uuid,
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let key = self.store.private(id)?;
        match padding {
            RsaPadding::Pkcs1 => Ok(key.decrypt(Pkcs1v15Encrypt, data)?),
            RsaPadding::Oaep => {
                let hash = hash.ok_or(CryptoError::MissingOaepHash)?;
                Ok(key.decrypt(oaep_padding(hash), data)?)
            }
        }
    }
}

/// Hash → signature-padding table ({hash}withRSA in JCA terms)
fn pkcs1v15_padding(hash: HashAlgorithm) -> Pkcs1v15Sign {
    match hash {
        HashAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        HashAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

/// Hash → OAEP/MGF1 table; the same hash parameterizes both
fn oaep_padding(hash: HashAlgorithm) -> Oaep {
    match hash {
        HashAlgorithm::Sha1 => Oaep::new_with_mgf_hash::<Sha1, Sha1>(),
        HashAlgorithm::Sha256 => Oaep::new_with_mgf_hash::<Sha256, Sha256>(),
        HashAlgorithm::Sha384 => Oaep::new_with_mgf_hash::<Sha384, Sha384>(),
        HashAlgorithm::Sha512 => Oaep::new_with_mgf_hash::<Sha512, Sha512>(),
    }
}

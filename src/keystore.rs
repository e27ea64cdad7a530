// src/keystore.rs
//! In-memory key handle store
//!
//! Two independent namespaces (private keys, public keys), each a concurrent
//! map from a random v4 UUID handle to key material. A handle is created by
//! `put_*`, read by `private`/`public`, never mutated and never deleted:
//! entries accumulate for the process lifetime. Known limitation, kept to
//! match the behavior callers depend on.

use crate::error::CryptoError;
use dashmap::DashMap;
use rsa::{RsaPrivateKey, RsaPublicKey};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct KeyStore {
    private_keys: DashMap<Uuid, RsaPrivateKey>,
    public_keys: DashMap<Uuid, RsaPublicKey>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert private key material under a fresh handle.
    ///
    /// The id is random, never derived from the key and never reused;
    /// racing inserts each get their own entry.
    pub fn put_private(&self, key: RsaPrivateKey) -> Uuid {
        let id = Uuid::new_v4();
        self.private_keys.insert(id, key);
        id
    }

    /// Insert public key material under a fresh handle
    pub fn put_public(&self, key: RsaPublicKey) -> Uuid {
        let id = Uuid::new_v4();
        self.public_keys.insert(id, key);
        id
    }

    /// Resolve a handle in the private namespace.
    ///
    /// Returns a clone so no map guard is held across RSA computation.
    pub fn private(&self, id: Uuid) -> Result<RsaPrivateKey, CryptoError> {
        self.private_keys
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CryptoError::KeyNotFound(id.to_string()))
    }

    /// Resolve a handle in the public namespace
    pub fn public(&self, id: Uuid) -> Result<RsaPublicKey, CryptoError> {
        self.public_keys
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| CryptoError::KeyNotFound(id.to_string()))
    }

    pub fn private_count(&self) -> usize {
        self.private_keys.len()
    }

    pub fn public_count(&self) -> usize {
        self.public_keys.len()
    }
}

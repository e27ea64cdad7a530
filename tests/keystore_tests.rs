// tests/keystore_tests.rs
use crypto_bridge_engine::{CryptoBridge, KeyStore};
use rand::rngs::OsRng;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use std::collections::HashSet;
use std::sync::Mutex;
use std::thread;
use uuid::Uuid;

fn small_key() -> RsaPrivateKey {
    RsaPrivateKey::new_with_exp(&mut OsRng, 512, &BigUint::from(65537u64)).unwrap()
}

#[test]
fn test_namespaces_are_independent() {
    let store = KeyStore::new();
    let key = small_key();
    let private_id = store.put_private(key.clone());
    let public_id = store.put_public(RsaPublicKey::from(&key));

    assert!(store.private(private_id).is_ok());
    assert!(store.public(public_id).is_ok());
    // A handle only resolves in its own namespace
    assert!(store.private(public_id).is_err());
    assert!(store.public(private_id).is_err());
}

#[test]
fn test_unknown_handle_is_not_found() {
    let store = KeyStore::new();
    assert!(store.private(Uuid::new_v4()).is_err());
    assert!(store.public(Uuid::new_v4()).is_err());
}

#[test]
fn test_repeated_put_of_same_material_gets_fresh_handles() {
    let store = KeyStore::new();
    let key = small_key();
    let first = store.put_private(key.clone());
    let second = store.put_private(key);
    assert_ne!(first, second);
    assert_eq!(store.private_count(), 2);
}

#[test]
fn test_concurrent_inserts_yield_distinct_handles() {
    let store = KeyStore::new();
    let key = small_key();
    let ids = Mutex::new(Vec::new());

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..8 {
                    let id = store.put_private(key.clone());
                    ids.lock().unwrap().push(id);
                }
            });
        }
    });

    let ids = ids.into_inner().unwrap();
    assert_eq!(ids.len(), 32);
    assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 32);
    assert_eq!(store.private_count(), 32);
}

#[test]
fn test_concurrent_generation_yields_distinct_handles() {
    let bridge = CryptoBridge::new();
    let pairs = Mutex::new(Vec::new());

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..2 {
                    let pair = bridge.rsa_generate_key_pair(512).unwrap();
                    pairs.lock().unwrap().push(pair);
                }
            });
        }
    });

    let pairs = pairs.into_inner().unwrap();
    assert_eq!(pairs.len(), 8);
    let private_ids: HashSet<_> = pairs.iter().map(|p| p.private_key.uuid).collect();
    let public_ids: HashSet<_> = pairs.iter().map(|p| p.public_key.uuid).collect();
    assert_eq!(private_ids.len(), 8);
    assert_eq!(public_ids.len(), 8);
}

// tests/digest_tests.rs
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use crypto_bridge_engine::digest::digest;
use crypto_bridge_engine::{CryptoBridge, ErrorCode};

#[test]
fn test_digest_known_vectors() {
    let cases = [
        ("SHA-1", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            "SHA-256",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            "SHA-384",
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            "SHA-512",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
    ];
    for (algorithm, expected) in cases {
        let out = digest(algorithm, b"abc").unwrap();
        assert_eq!(hex::encode(out), expected);
    }
}

#[test]
fn test_digest_empty_input() {
    let out = digest("SHA-256", b"").unwrap();
    assert_eq!(
        hex::encode(out),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_digest_deterministic() {
    let first = digest("SHA-512", b"same input").unwrap();
    let second = digest("SHA-512", b"same input").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_digest_unknown_algorithm_rejected() {
    assert!(digest("MD5", b"x").is_err());
    assert!(digest("sha-256", b"x").is_err()); // names are case-sensitive
}

#[test]
fn test_bridge_digest_roundtrip() {
    let bridge = CryptoBridge::new();
    let out = bridge.digest("SHA-256", &B64.encode(b"abc")).unwrap();
    assert_eq!(
        hex::encode(B64.decode(out).unwrap()),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_bridge_digest_errors_are_tagged() {
    let bridge = CryptoBridge::new();
    let err = bridge.digest("MD5", &B64.encode(b"abc")).unwrap_err();
    assert_eq!(err.code, ErrorCode::Digest);
    assert_eq!(err.code.as_str(), "DIGEST_ERROR");

    let err = bridge.digest("SHA-256", "!!! not base64").unwrap_err();
    assert_eq!(err.code, ErrorCode::Digest);
}

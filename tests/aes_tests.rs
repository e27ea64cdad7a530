// tests/aes_tests.rs
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use crypto_bridge_engine::aes::{self, AesOp};
use crypto_bridge_engine::registry::CipherMode;
use crypto_bridge_engine::{CryptoBridge, ErrorCode};

fn patterned(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| seed.wrapping_add(i as u8)).collect()
}

#[test]
fn test_roundtrip_all_modes_and_key_lengths() {
    let bridge = CryptoBridge::new();
    let iv = B64.encode(patterned(16, 7));
    let data = B64.encode(patterned(37, 100));
    for mode in ["CBC", "CTR", "CFB8"] {
        for key_len in [16, 24, 32] {
            let key = B64.encode(patterned(key_len, 42));
            let ciphertext = bridge.aes_encrypt(mode, &iv, &key, &data).unwrap();
            assert_ne!(ciphertext, data, "{mode}/{key_len} left data unchanged");
            let plaintext = bridge.aes_decrypt(mode, &iv, &key, &ciphertext).unwrap();
            assert_eq!(plaintext, data, "{mode}/{key_len} roundtrip failed");
        }
    }
}

#[test]
fn test_cbc_pads_stream_modes_preserve_length() {
    let bridge = CryptoBridge::new();
    let iv = B64.encode(patterned(16, 1));
    let key = B64.encode(patterned(16, 2));
    let data = patterned(37, 3);
    let data_b64 = B64.encode(&data);

    let cbc = bridge.aes_encrypt("CBC", &iv, &key, &data_b64).unwrap();
    // 37 bytes pad up to the next block boundary
    assert_eq!(B64.decode(cbc).unwrap().len(), 48);

    for mode in ["CTR", "CFB8"] {
        let out = bridge.aes_encrypt(mode, &iv, &key, &data_b64).unwrap();
        assert_eq!(B64.decode(out).unwrap().len(), data.len());
    }
}

// NIST SP 800-38A, AES-128 with the standard test key
const NIST_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const NIST_BLOCK1: &str = "6bc1bee22e409f96e93d7e117393172a";

#[test]
fn test_cbc_nist_vector() {
    let key = hex::decode(NIST_KEY).unwrap();
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode(NIST_BLOCK1).unwrap();
    let ciphertext = aes::transform(AesOp::Encrypt, CipherMode::Cbc, &iv, &key, &plaintext).unwrap();
    assert_eq!(
        hex::encode(&ciphertext[..16]),
        "7649abac8119b246cee98e9b12e9197d"
    );
}

#[test]
fn test_ctr_nist_vector() {
    // Confirms the full-block big-endian counter
    let key = hex::decode(NIST_KEY).unwrap();
    let iv = hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff").unwrap();
    let plaintext = hex::decode(NIST_BLOCK1).unwrap();
    let ciphertext = aes::transform(AesOp::Encrypt, CipherMode::Ctr, &iv, &key, &plaintext).unwrap();
    assert_eq!(hex::encode(ciphertext), "874d6191b620e3261bef6864990db6ce");
}

#[test]
fn test_cfb8_nist_vector() {
    let key = hex::decode(NIST_KEY).unwrap();
    let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172aae2d").unwrap();
    let ciphertext =
        aes::transform(AesOp::Encrypt, CipherMode::Cfb8, &iv, &key, &plaintext).unwrap();
    assert_eq!(hex::encode(ciphertext), "3b79424c9c0dd436bace9e0ed4586a4f32b9");
}

#[test]
fn test_unsupported_mode_rejected() {
    let bridge = CryptoBridge::new();
    let iv = B64.encode(patterned(16, 0));
    let key = B64.encode(patterned(16, 0));
    let data = B64.encode(b"payload");
    let err = bridge.aes_encrypt("ECB", &iv, &key, &data).unwrap_err();
    assert_eq!(err.code, ErrorCode::AesEncrypt);
    let err = bridge.aes_decrypt("GCM", &iv, &key, &data).unwrap_err();
    assert_eq!(err.code, ErrorCode::AesDecrypt);
}

#[test]
fn test_bad_key_and_iv_lengths_rejected() {
    let bridge = CryptoBridge::new();
    let data = B64.encode(b"payload");
    let err = bridge
        .aes_encrypt(
            "CBC",
            &B64.encode(patterned(16, 0)),
            &B64.encode(patterned(10, 0)), // not an AES key length
            &data,
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AesEncrypt);

    let err = bridge
        .aes_encrypt(
            "CTR",
            &B64.encode(patterned(8, 0)), // IV must be one block
            &B64.encode(patterned(16, 0)),
            &data,
        )
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AesEncrypt);
}

#[test]
fn test_cbc_truncated_ciphertext_is_transform_error() {
    // Plaintext ends in 0x00: dropping the padding block leaves a final
    // block whose last byte can never be valid PKCS#7 padding.
    let iv = patterned(16, 9);
    let key = patterned(16, 20);
    let mut plaintext = patterned(16, 50);
    plaintext[15] = 0x00;

    let ciphertext =
        aes::transform(AesOp::Encrypt, CipherMode::Cbc, &iv, &key, &plaintext).unwrap();
    assert_eq!(ciphertext.len(), 32);

    let tampered = &ciphertext[..16];
    let result = aes::transform(AesOp::Decrypt, CipherMode::Cbc, &iv, &key, tampered);
    assert!(result.is_err());
}

#[test]
fn test_cbc_non_block_multiple_ciphertext_is_transform_error() {
    let bridge = CryptoBridge::new();
    let iv = B64.encode(patterned(16, 0));
    let key = B64.encode(patterned(16, 0));
    let err = bridge
        .aes_decrypt("CBC", &iv, &key, &B64.encode(patterned(21, 0)))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AesDecrypt);
}

#[test]
fn test_invalid_base64_payload_rejected() {
    let bridge = CryptoBridge::new();
    let good = B64.encode(patterned(16, 0));
    let err = bridge
        .aes_encrypt("CBC", &good, &good, "not base64 !!!")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AesEncrypt);
}

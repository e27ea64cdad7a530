// src/aes.rs
//! AES symmetric transforms
//!
//! `transform` is self-contained: raw key and IV bytes in, result bytes out,
//! nothing cached between calls. The key length selects the AES variant
//! (16/24/32 bytes), the mode comes pre-parsed from the registry so the
//! mode → padding pairing is already fixed: CBC/PKCS#7, CTR and CFB8 unpadded.
//! CTR runs a full-block big-endian counter, matching the JCA default the
//! callers were built against.

use crate::consts::AES_BLOCK_SIZE;
use crate::error::CryptoError;
use crate::registry::CipherMode;
use aes::cipher::{
    block_padding::Pkcs7, AsyncStreamCipher, BlockDecryptMut, BlockEncryptMut, KeyIvInit,
    StreamCipher,
};
use aes::{Aes128, Aes192, Aes256};

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesOp {
    Encrypt,
    Decrypt,
}

/// Apply the cipher selected by `mode` and the key length to `data`
pub fn transform(
    op: AesOp,
    mode: CipherMode,
    iv: &[u8],
    key: &[u8],
    data: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    // Every supported mode takes a one-block IV
    if iv.len() != AES_BLOCK_SIZE {
        return Err(CryptoError::InvalidLength { what: "iv", len: iv.len() });
    }
    match (mode, op) {
        (CipherMode::Cbc, AesOp::Encrypt) => match key.len() {
            16 => cbc_encrypt::<cbc::Encryptor<Aes128>>(key, iv, data),
            24 => cbc_encrypt::<cbc::Encryptor<Aes192>>(key, iv, data),
            32 => cbc_encrypt::<cbc::Encryptor<Aes256>>(key, iv, data),
            len => Err(CryptoError::InvalidLength { what: "key", len }),
        },
        (CipherMode::Cbc, AesOp::Decrypt) => match key.len() {
            16 => cbc_decrypt::<cbc::Decryptor<Aes128>>(key, iv, data),
            24 => cbc_decrypt::<cbc::Decryptor<Aes192>>(key, iv, data),
            32 => cbc_decrypt::<cbc::Decryptor<Aes256>>(key, iv, data),
            len => Err(CryptoError::InvalidLength { what: "key", len }),
        },
        // CTR is its own inverse
        (CipherMode::Ctr, _) => match key.len() {
            16 => ctr_apply::<ctr::Ctr128BE<Aes128>>(key, iv, data),
            24 => ctr_apply::<ctr::Ctr128BE<Aes192>>(key, iv, data),
            32 => ctr_apply::<ctr::Ctr128BE<Aes256>>(key, iv, data),
            len => Err(CryptoError::InvalidLength { what: "key", len }),
        },
        (CipherMode::Cfb8, AesOp::Encrypt) => match key.len() {
            16 => cfb8_encrypt::<cfb8::Encryptor<Aes128>>(key, iv, data),
            24 => cfb8_encrypt::<cfb8::Encryptor<Aes192>>(key, iv, data),
            32 => cfb8_encrypt::<cfb8::Encryptor<Aes256>>(key, iv, data),
            len => Err(CryptoError::InvalidLength { what: "key", len }),
        },
        (CipherMode::Cfb8, AesOp::Decrypt) => match key.len() {
            16 => cfb8_decrypt::<cfb8::Decryptor<Aes128>>(key, iv, data),
            24 => cfb8_decrypt::<cfb8::Decryptor<Aes192>>(key, iv, data),
            32 => cfb8_decrypt::<cfb8::Decryptor<Aes256>>(key, iv, data),
            len => Err(CryptoError::InvalidLength { what: "key", len }),
        },
    }
}

// Key and IV lengths are checked before these run; the init Result still
// has to be mapped.

fn cbc_encrypt<E>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    E: KeyIvInit + BlockEncryptMut,
{
    let cipher = E::new_from_slices(key, iv)
        .map_err(|_| CryptoError::InvalidLength { what: "iv", len: iv.len() })?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(data))
}

fn cbc_decrypt<D>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let cipher = D::new_from_slices(key, iv)
        .map_err(|_| CryptoError::InvalidLength { what: "iv", len: iv.len() })?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| CryptoError::Transform("bad padding or truncated ciphertext".to_owned()))
}

fn ctr_apply<C>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    C: KeyIvInit + StreamCipher,
{
    let mut cipher = C::new_from_slices(key, iv)
        .map_err(|_| CryptoError::InvalidLength { what: "iv", len: iv.len() })?;
    let mut buf = data.to_vec();
    cipher
        .try_apply_keystream(&mut buf)
        .map_err(|_| CryptoError::Transform("keystream exhausted".to_owned()))?;
    Ok(buf)
}

fn cfb8_encrypt<E>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    E: KeyIvInit + AsyncStreamCipher + BlockEncryptMut,
{
    let cipher = E::new_from_slices(key, iv)
        .map_err(|_| CryptoError::InvalidLength { what: "iv", len: iv.len() })?;
    let mut buf = data.to_vec();
    cipher.encrypt(&mut buf);
    Ok(buf)
}

fn cfb8_decrypt<D>(key: &[u8], iv: &[u8], data: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    D: KeyIvInit + AsyncStreamCipher + BlockDecryptMut,
{
    let cipher = D::new_from_slices(key, iv)
        .map_err(|_| CryptoError::InvalidLength { what: "iv", len: iv.len() })?;
    let mut buf = data.to_vec();
    cipher.decrypt(&mut buf);
    Ok(buf)
}

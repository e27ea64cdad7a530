// src/consts.rs
//! Shared constants — algorithm parameters and defaults

/// Fixed RSA public exponent (F4)
pub const F4_EXPONENT: u64 = 65537;

/// Smallest RSA modulus the engine will generate
// 512-bit keys are weak, but the legacy caller surface includes them
pub const MIN_MODULUS_BITS: usize = 512;

/// Largest RSA modulus the engine will generate
pub const MAX_MODULUS_BITS: usize = 4096;

/// AES block size in bytes — every supported mode takes a one-block IV
pub const AES_BLOCK_SIZE: usize = 16;

/// The only signature scheme the sign/verify surface accepts
pub const SIGNATURE_SCHEME: &str = "PKCS1-v1_5";

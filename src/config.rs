// src/config.rs
use crate::consts::{MAX_MODULUS_BITS, MIN_MODULUS_BITS};
use serde::Deserialize;
use std::sync::OnceLock;

/// Global config — loaded once, TOML file + built-in defaults
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rsa: RsaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RsaConfig {
    /// Inclusive window of modulus sizes `generate_key_pair` accepts
    #[serde(default = "default_min_modulus_bits")]
    pub min_modulus_bits: usize,
    #[serde(default = "default_max_modulus_bits")]
    pub max_modulus_bits: usize,
}

impl Default for RsaConfig {
    fn default() -> Self {
        RsaConfig {
            min_modulus_bits: default_min_modulus_bits(),
            max_modulus_bits: default_max_modulus_bits(),
        }
    }
}

fn default_min_modulus_bits() -> usize {
    MIN_MODULUS_BITS
}

fn default_max_modulus_bits() -> usize {
    MAX_MODULUS_BITS
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing or invalid.
/// The file is named by `CRYPTO_BRIDGE_CONFIG`; embedding callers that set
/// nothing get the defaults and need no file at all.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let Ok(path) = std::env::var("CRYPTO_BRIDGE_CONFIG") else {
            return Config::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(%path, %err, "invalid config file, using defaults");
                    Config::default()
                }
            },
            Err(err) => {
                tracing::warn!(%path, %err, "config file unreadable, using defaults");
                Config::default()
            }
        }
    })
}

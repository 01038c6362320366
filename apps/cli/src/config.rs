//! Environment-driven configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use thiserror::Error;

/// Directory holding the JSON files.
pub const DATA_DIR_VAR: &str = "FLASHCARDS_DIR";
/// Optional seed for reproducible shuffles.
pub const SEED_VAR: &str = "FLASHCARDS_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FLASHCARDS_SEED must be an unsigned integer, got {value:?}")]
    InvalidSeed { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup(SEED_VAR) {
            let seed = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed { value })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }

    /// Random generator for the session: seeded if configured, else from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

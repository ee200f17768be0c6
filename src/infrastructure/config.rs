//! Configuration management

use crate::domain::DEFAULT_EXCERPT_LENGTH;
use crate::error::{QuireError, Result};
use crate::infrastructure::password::{CredentialHasher, DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Characters kept when an excerpt is generated from content
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
    /// argon2 memory cost for new password hashes
    #[serde(default = "default_hash_memory_kib")]
    pub hash_memory_kib: u32,
    /// argon2 iteration count for new password hashes
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    pub created: DateTime<Utc>,
}

fn default_excerpt_length() -> usize {
    DEFAULT_EXCERPT_LENGTH
}

fn default_hash_memory_kib() -> u32 {
    DEFAULT_MEMORY_KIB
}

fn default_hash_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            hash_memory_kib: DEFAULT_MEMORY_KIB,
            hash_iterations: DEFAULT_ITERATIONS,
            created: Utc::now(),
        }
    }

    /// Load config from .quire/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".quire").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuireError::NotQuireDirectory(path.to_path_buf())
            } else {
                QuireError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| QuireError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .quire/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let quire_dir = path.join(".quire");
        let config_path = quire_dir.join("config.toml");

        if !quire_dir.exists() {
            fs::create_dir(&quire_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuireError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Hasher for new passwords, checking QUIRE_HASH_MEMORY_KIB and
    /// QUIRE_HASH_ITERATIONS before the configured cost
    pub fn hasher(&self) -> CredentialHasher {
        CredentialHasher::new(
            env_override("QUIRE_HASH_MEMORY_KIB").unwrap_or(self.hash_memory_kib),
            env_override("QUIRE_HASH_ITERATIONS").unwrap_or(self.hash_iterations),
        )
    }
}

fn env_override(key: &str) -> Option<u32> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring invalid environment override");
            None
        }
    }
}

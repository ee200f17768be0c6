//! Config management use case

use crate::error::{QuireError, Result};
use crate::infrastructure::{BlogRepository, Config, CredentialHasher, FileSystemRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "excerpt_length, hash_memory_kib, hash_iterations, created";

/// Service for managing blog configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "excerpt_length" => Ok(config.excerpt_length.to_string()),
            "hash_memory_kib" => Ok(config.hash_memory_kib.to_string()),
            "hash_iterations" => Ok(config.hash_iterations.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(QuireError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "excerpt_length" => config.excerpt_length = parse_positive(key, value)?,
            "hash_memory_kib" => config.hash_memory_kib = parse_positive(key, value)?,
            "hash_iterations" => config.hash_iterations = parse_positive(key, value)?,
            "created" => {
                return Err(QuireError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(QuireError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        // argon2 must accept the resulting cost
        CredentialHasher::new(config.hash_memory_kib, config.hash_iterations).validate()?;

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_positive<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr + PartialOrd + Default,
{
    match value.parse::<T>() {
        Ok(n) if n > T::default() => Ok(n),
        _ => Err(QuireError::Config(format!(
            "Invalid value for {}: '{}' (expected a positive integer)",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let mut config = Config::new();
        config.hash_memory_kib = 8;
        config.hash_iterations = 1;
        repo.save_config(&config).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_and_set_excerpt_length() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("excerpt_length").unwrap(), "150");
        service.set("excerpt_length", "80").unwrap();
        assert_eq!(service.get("excerpt_length").unwrap(), "80");
    }

    #[test]
    fn test_set_rejects_non_positive() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("excerpt_length", "0").is_err());
        assert!(service.set("hash_iterations", "-1").is_err());
        assert!(service.set("hash_iterations", "abc").is_err());
    }

    #[test]
    fn test_set_rejects_cost_argon2_refuses() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("hash_memory_kib", "1").is_err());
        assert_eq!(service.get("hash_memory_kib").unwrap(), "8");
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.get("created").is_ok());
        match service.set("created", "2025-01-01T00:00:00Z").unwrap_err() {
            QuireError::Config(msg) => assert!(msg.contains("read-only")),
            e => panic!("Expected Config error, got {}", e),
        }
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        match service.get("editor").unwrap_err() {
            QuireError::Config(msg) => assert!(msg.contains("Unknown config key: 'editor'")),
            e => panic!("Expected Config error, got {}", e),
        }
    }
}

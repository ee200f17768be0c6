//! File system workspace repository

use crate::error::{QuireError, Result};
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for a blog workspace
pub trait BlogRepository {
    /// Load configuration from .quire/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quire/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quire directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quire directory structure
    fn initialize(&self) -> Result<()>;

    /// Key-value storage backing the article and session stores
    fn storage(&self) -> FileStorage;
}

/// File system implementation of BlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover blog root by walking up from current directory
    /// First checks QUIRE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUIRE_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_quire_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuireError::Config(format!(
                    "QUIRE_ROOT is set to '{}' but no .quire directory found. \
                    Run 'quire init' in that directory or unset QUIRE_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover blog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_quire_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuireError::NotQuireDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_quire_dir(path: &Path) -> bool {
        path.join(".quire").is_dir()
    }

    fn quire_dir(&self) -> PathBuf {
        self.root.join(".quire")
    }
}

impl BlogRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_quire_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(QuireError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.quire_dir())?;
        Ok(())
    }

    fn storage(&self) -> FileStorage {
        FileStorage::new(self.quire_dir())
    }
}

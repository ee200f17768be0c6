//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod password;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use password::CredentialHasher;
pub use repository::{BlogRepository, FileSystemRepository};
pub use storage::{FileStorage, MemoryStorage, Storage};

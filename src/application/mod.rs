//! Application layer - Stores and use cases

pub mod articles;
pub mod backup;
pub mod context;
pub mod init;
pub mod manage_config;
pub mod session;

pub use articles::{ArticleStats, ArticleStore};
pub use backup::BackupService;
pub use context::BlogContext;
pub use init::{init, InitOptions};
pub use manage_config::ConfigService;
pub use session::SessionStore;

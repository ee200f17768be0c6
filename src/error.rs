//! Error types for quire

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quire application
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Not a quire directory: {0}")]
    NotQuireDirectory(PathBuf),

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("No admin account has been initialized")]
    NoSessionInitialized,

    #[error("Invalid article: {0}")]
    InvalidDraft(String),

    #[error("Duplicate article id: {0}")]
    DuplicateId(String),

    #[error("Invalid backup format: {0}")]
    InvalidFormat(#[source] serde_json::Error),

    #[error("Stored {key} data is corrupt: {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<argon2::password_hash::Error> for QuireError {
    fn from(err: argon2::password_hash::Error) -> Self {
        QuireError::PasswordHash(err.to_string())
    }
}

impl QuireError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuireError::NotQuireDirectory(_) => 2,
            QuireError::NotFound(_) => 3,
            QuireError::NotAuthenticated | QuireError::NoSessionInitialized => 4,
            QuireError::InvalidCredentials => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuireError::NotQuireDirectory(path) => {
                format!(
                    "Not a quire directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quire init' in this directory to create a new blog\n\
                    • Navigate to an existing quire directory\n\
                    • Set QUIRE_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            QuireError::NotFound(id) => {
                format!(
                    "Article not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'quire list' to see article ids\n\
                    • Ids are case-sensitive and must be given in full",
                    id
                )
            }
            QuireError::NotAuthenticated => "Not logged in\n\n\
                This command changes blog data and needs an admin session.\n\
                Example: quire login --username admin --password <password>"
                .to_string(),
            QuireError::InvalidCredentials => "Invalid username or password\n\n\
                Suggestions:\n\
                • Usernames are case-sensitive\n\
                • The default account created by 'quire init' is admin / admin123"
                .to_string(),
            QuireError::InvalidFormat(err) => {
                format!(
                    "Invalid backup format: {}\n\n\
                    A backup is a JSON document with an \"articles\" array and an optional \"session\" object.\n\
                    Example: quire export --output backups/",
                    err
                )
            }
            QuireError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: quire config excerpt_length 200",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;

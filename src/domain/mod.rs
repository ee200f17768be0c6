//! Domain layer - Business logic and domain models

pub mod article;
pub mod markup;
pub mod session;
pub mod snapshot;

pub use article::{Article, ArticleDraft, ArticlePatch, DEFAULT_EXCERPT_LENGTH};
pub use session::SessionRecord;
pub use snapshot::{backup_file_name, Snapshot};

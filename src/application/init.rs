//! Initialize blog use case

use crate::application::session::check_credentials;
use crate::application::BlogContext;
use crate::domain::article::sample_drafts;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Options for `quire init`
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub username: String,
    pub password: String,
    pub with_samples: bool,
    pub config: Config,
}

impl Default for InitOptions {
    fn default() -> Self {
        InitOptions {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            with_samples: false,
            config: Config::new(),
        }
    }
}

/// Initialize a new blog workspace at the specified path.
pub fn init(path: &Path, options: &InitOptions) -> Result<BlogContext> {
    check_credentials(&options.username, &options.password)?;
    options.config.hasher().validate()?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    // Leave no partial workspace behind
    populate(repo, options).inspect_err(|_| {
        if let Err(e) = fs::remove_dir_all(path.join(".quire")) {
            warn!(error = %e, "failed to remove partial .quire directory");
        }
    })
}

fn populate(repo: FileSystemRepository, options: &InitOptions) -> Result<BlogContext> {
    repo.save_config(&options.config)?;

    let ctx = BlogContext::open(repo)?;
    ctx.session.initialize(&options.username, &options.password)?;
    if options.with_samples {
        ctx.articles.seed_if_empty(sample_drafts())?;
    }

    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuireError;
    use tempfile::TempDir;

    fn options() -> InitOptions {
        let mut config = Config::new();
        config.hash_memory_kib = 8;
        config.hash_iterations = 1;
        InitOptions {
            config,
            ..InitOptions::default()
        }
    }

    #[test]
    fn test_init_creates_workspace_and_account() {
        let temp = TempDir::new().unwrap();

        let ctx = init(temp.path(), &options()).unwrap();

        assert!(temp.path().join(".quire/config.toml").exists());
        assert!(temp.path().join(".quire/session.json").exists());
        assert_eq!(ctx.session.username().unwrap().as_deref(), Some("admin"));
        assert!(!ctx.session.is_logged_in().unwrap());
        assert!(ctx.articles.list().unwrap().is_empty());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new").join("blog");

        init(&path, &options()).unwrap();

        assert!(path.join(".quire").is_dir());
    }

    #[test]
    fn test_init_with_samples() {
        let temp = TempDir::new().unwrap();
        let mut opts = options();
        opts.with_samples = true;

        let ctx = init(temp.path(), &opts).unwrap();

        assert_eq!(ctx.articles.list_published().unwrap().len(), 3);
    }

    #[test]
    fn test_rejected_credentials_leave_no_workspace() {
        let temp = TempDir::new().unwrap();
        let mut opts = options();
        opts.password = String::new();

        assert!(matches!(
            init(temp.path(), &opts),
            Err(QuireError::Config(_))
        ));
        assert!(!temp.path().join(".quire").exists());

        let ctx = init(temp.path(), &options()).unwrap();
        assert_eq!(ctx.session.username().unwrap().as_deref(), Some("admin"));
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &options()).unwrap();

        assert!(init(temp.path(), &options()).is_err());
    }
}

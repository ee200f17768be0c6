//! Stores opened over a discovered workspace

use crate::application::{ArticleStore, BackupService, SessionStore};
use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config, FileStorage, FileSystemRepository};

/// Everything a command needs: config plus both stores sharing one storage
pub struct BlogContext {
    pub repository: FileSystemRepository,
    pub config: Config,
    pub articles: ArticleStore<FileStorage>,
    pub session: SessionStore<FileStorage>,
}

impl BlogContext {
    pub fn open(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let storage = repository.storage();

        Ok(BlogContext {
            articles: ArticleStore::new(storage.clone()).with_excerpt_length(config.excerpt_length),
            session: SessionStore::new(storage, config.hasher()),
            repository,
            config,
        })
    }

    pub fn backup(&self) -> BackupService<'_, FileStorage> {
        BackupService::new(&self.articles, &self.session)
    }
}

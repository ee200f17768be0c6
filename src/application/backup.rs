//! Backup and restore across both stores

use crate::application::{ArticleStore, SessionStore};
use crate::domain::{backup_file_name, Snapshot};
use crate::error::Result;
use crate::infrastructure::Storage;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Exports and imports snapshots of the article and session stores
pub struct BackupService<'a, S: Storage> {
    articles: &'a ArticleStore<S>,
    session: &'a SessionStore<S>,
}

impl<'a, S: Storage> BackupService<'a, S> {
    pub fn new(articles: &'a ArticleStore<S>, session: &'a SessionStore<S>) -> Self {
        BackupService { articles, session }
    }

    pub fn export_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            articles: Some(self.articles.list()?),
            session: self.session.record()?,
        })
    }

    /// Overwrite whichever stores the snapshot covers.
    ///
    /// If the session write fails the previous articles are put back.
    pub fn import_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        snapshot.validate()?;

        let previous = match (&snapshot.articles, &snapshot.session) {
            (Some(_), Some(_)) => Some(self.articles.list()?),
            _ => None,
        };

        if let Some(articles) = &snapshot.articles {
            self.articles.replace_all(articles)?;
        }

        if let Some(session) = &snapshot.session {
            if let Err(e) = self.session.replace(session) {
                if let Some(previous) = previous {
                    if let Err(rollback) = self.articles.replace_all(&previous) {
                        error!(error = %rollback, "failed to restore articles after import error");
                    }
                }
                return Err(e);
            }
        }

        info!(
            articles = snapshot.articles.as_ref().map(Vec::len),
            session = snapshot.session.is_some(),
            "imported snapshot"
        );
        Ok(())
    }

    /// Parse a backup document and import it
    pub fn import_json(&self, input: &str) -> Result<Snapshot> {
        let snapshot = Snapshot::from_json(input)?;
        self.import_snapshot(&snapshot)?;
        Ok(snapshot)
    }

    /// Write today's backup file into `dir`, returning its path
    pub fn write_backup(&self, dir: &Path) -> Result<PathBuf> {
        let json = self.export_snapshot()?.to_json_pretty()?;

        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(backup_file_name(Local::now().date_naive()));
        fs::write(&path, json)?;

        info!(path = %path.display(), "wrote backup");
        Ok(path)
    }
}

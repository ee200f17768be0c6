//! Single-admin session: credentials and login flag

use crate::domain::SessionRecord;
use crate::error::{QuireError, Result};
use crate::infrastructure::storage::{read_json, write_json, SESSION_KEY};
use crate::infrastructure::{CredentialHasher, Storage};
use tracing::{debug, info, warn};

/// Owns the persisted admin record
#[derive(Debug, Clone)]
pub struct SessionStore<S: Storage> {
    storage: S,
    hasher: CredentialHasher,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S, hasher: CredentialHasher) -> Self {
        SessionStore { storage, hasher }
    }

    pub(crate) fn record(&self) -> Result<Option<SessionRecord>> {
        read_json(&self.storage, SESSION_KEY)
    }

    pub(crate) fn replace(&self, record: &SessionRecord) -> Result<()> {
        write_json(&self.storage, SESSION_KEY, record)
    }

    /// Create the admin record unless one exists. Returns whether it was created.
    pub fn initialize(&self, username: &str, password: &str) -> Result<bool> {
        if self.record()?.is_some() {
            debug!("session already initialized");
            return Ok(false);
        }

        check_credentials(username, password)?;

        let record = SessionRecord::new(username, self.hasher.hash(password)?);
        self.replace(&record)?;
        info!(username, "initialized admin account");
        Ok(true)
    }

    /// Exact username match plus password verification
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        let Some(mut record) = self.record()? else {
            warn!("login attempted before initialization");
            return Ok(false);
        };

        if record.username != username {
            warn!(username, "login failed");
            return Ok(false);
        }

        let verified = self
            .hasher
            .verify(password, &record.password_hash)
            .inspect_err(|e| warn!(error = %e, "stored password hash is unreadable"))?;
        if !verified {
            warn!(username, "login failed");
            return Ok(false);
        }

        record.logged_in = true;
        self.replace(&record)?;
        info!(username, "logged in");
        Ok(true)
    }

    pub fn logout(&self) -> Result<()> {
        let Some(mut record) = self.record()? else {
            return Ok(());
        };

        if record.logged_in {
            record.logged_in = false;
            self.replace(&record)?;
            info!(username = %record.username, "logged out");
        }
        Ok(())
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.record()?.is_some_and(|r| r.logged_in))
    }

    /// Fails with `NotAuthenticated` unless a session is active
    pub fn require_login(&self) -> Result<()> {
        if self.is_logged_in()? {
            Ok(())
        } else {
            Err(QuireError::NotAuthenticated)
        }
    }

    /// Rehash and store a new password; `false` when no record exists.
    ///
    /// Callers must only reach this from an authenticated context.
    pub fn change_password(&self, new_password: &str) -> Result<bool> {
        check_password(new_password)?;
        let Some(mut record) = self.record()? else {
            return Ok(false);
        };

        record.password_hash = self.hasher.hash(new_password)?;
        self.replace(&record)?;
        info!(username = %record.username, "changed password");
        Ok(true)
    }

    pub fn username(&self) -> Result<Option<String>> {
        Ok(self.record()?.map(|r| r.username))
    }
}

/// Username and password must both be non-empty
pub fn check_credentials(username: &str, password: &str) -> Result<()> {
    if username.is_empty() {
        return Err(QuireError::Config(
            "Admin username must not be empty".to_string(),
        ));
    }
    check_password(password)
}

fn check_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(QuireError::Config(
            "Admin password must not be empty".to_string(),
        ));
    }
    Ok(())
}

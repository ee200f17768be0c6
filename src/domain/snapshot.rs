//! Backup document covering both stores

use crate::domain::{Article, SessionRecord};
use crate::error::{QuireError, Result};
use argon2::password_hash::PasswordHash;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Full or partial export of articles plus the session record.
///
/// On import, a missing (or `null`) field leaves the matching store alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<Article>>,
    #[serde(default, alias = "auth", skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionRecord>,
}

impl Snapshot {
    /// Parse a backup document, surfacing the underlying JSON error
    pub fn from_json(input: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(QuireError::InvalidFormat)?;
        if !value.is_object() {
            return Err(QuireError::InvalidFormat(serde::de::Error::custom(
                "expected a JSON object with an \"articles\" array",
            )));
        }
        let snapshot: Snapshot = serde_json::from_value(value).map_err(QuireError::InvalidFormat)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject duplicate article ids and session records no login could verify
    pub fn validate(&self) -> Result<()> {
        self.check_unique_ids()?;
        if let Some(session) = &self.session {
            PasswordHash::new(&session.password_hash).map_err(|e| {
                QuireError::InvalidFormat(serde::de::Error::custom(format!(
                    "session passwordHash is not a PHC hash string: {}",
                    e
                )))
            })?;
        }
        Ok(())
    }

    fn check_unique_ids(&self) -> Result<()> {
        let Some(articles) = &self.articles else {
            return Ok(());
        };
        let mut seen = HashSet::new();
        for article in articles {
            if !seen.insert(article.id.as_str()) {
                return Err(QuireError::DuplicateId(article.id.clone()));
            }
        }
        Ok(())
    }
}

/// File name used for a backup taken on `date`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("blog_backup_{}.json", date.format("%Y-%m-%d"))
}

//! Article records, drafts and patches

use crate::domain::markup;
use crate::error::{QuireError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default number of characters kept when an excerpt is generated
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

/// A single authored post as it is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub published: bool,
}

impl Article {
    /// Case-insensitive substring match on title, content and category
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

/// Fields supplied by the author when creating an article
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub category: String,
    pub content: String,
    pub excerpt: String,
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        ArticleDraft {
            title: title.into(),
            category: category.into(),
            content: content.into(),
            excerpt: excerpt.into(),
        }
    }

    /// Trim fields, check required ones and fill in a missing excerpt.
    pub fn normalize(self, excerpt_length: usize) -> Result<Self> {
        let title = required("title", &self.title)?;
        let category = required("category", &self.category)?;
        if self.content.trim().is_empty() {
            return Err(QuireError::InvalidDraft("content is required".to_string()));
        }

        let excerpt = match self.excerpt.trim() {
            "" => markup::generate_excerpt(&self.content, excerpt_length),
            given => given.to_string(),
        };

        Ok(ArticleDraft {
            title,
            category,
            content: self.content,
            excerpt,
        })
    }
}

/// Partial update; `None` fields keep the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<NaiveDate>,
    pub published: Option<bool>,
}

impl ArticlePatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == ArticlePatch::default()
    }

    /// Merge onto `article`, leaving it untouched if the patch is invalid.
    ///
    /// An explicitly blank excerpt is regenerated from the resulting content.
    pub fn apply_to(&self, article: &mut Article, excerpt_length: usize) -> Result<()> {
        let title = self.title.as_deref().map(|t| required("title", t)).transpose()?;
        let category = self
            .category
            .as_deref()
            .map(|c| required("category", c))
            .transpose()?;
        if matches!(&self.content, Some(c) if c.trim().is_empty()) {
            return Err(QuireError::InvalidDraft("content is required".to_string()));
        }

        if let Some(title) = title {
            article.title = title;
        }
        if let Some(category) = category {
            article.category = category;
        }
        if let Some(content) = &self.content {
            article.content = content.clone();
        }
        if let Some(excerpt) = &self.excerpt {
            article.excerpt = match excerpt.trim() {
                "" => markup::generate_excerpt(&article.content, excerpt_length),
                given => given.to_string(),
            };
        }
        if let Some(date) = self.date {
            article.date = date;
        }
        if let Some(published) = self.published {
            article.published = published;
        }

        Ok(())
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(QuireError::InvalidDraft(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Starter posts written by `quire init --with-samples`
pub fn sample_drafts() -> Vec<(ArticleDraft, NaiveDate)> {
    let samples = [
        (
            "Understanding Modern Front-End Framework Design",
            "Engineering",
            "<p>A look at the core ideas behind React, Vue and Angular, and how they tame the usual problems of large applications.</p>",
            (2024, 1, 15),
        ),
        (
            "How the iOS Design Language Evolved",
            "Design",
            "<p>From skeuomorphism to flat design and beyond: how the iOS visual language kept pace with its hardware.</p>",
            (2024, 1, 12),
        ),
        (
            "Building Fast Web Applications",
            "Performance",
            "<p>Practical strategies for faster web apps, including code splitting, lazy loading and caching.</p>",
            (2024, 1, 10),
        ),
    ];

    samples
        .into_iter()
        .filter_map(|(title, category, content, (y, m, d))| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some((ArticleDraft::new(title, category, content, ""), date))
        })
        .collect()
}

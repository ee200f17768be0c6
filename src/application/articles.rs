//! Article collection: CRUD and feed queries

use crate::domain::{Article, ArticleDraft, ArticlePatch, DEFAULT_EXCERPT_LENGTH};
use crate::error::{QuireError, Result};
use crate::infrastructure::storage::{read_json, write_json, ARTICLES_KEY};
use crate::infrastructure::Storage;
use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

/// Counts shown on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleStats {
    pub total: usize,
    pub published: usize,
    pub categories: usize,
}

/// Owns the persisted article collection, kept newest-first
#[derive(Debug, Clone)]
pub struct ArticleStore<S: Storage> {
    storage: S,
    excerpt_length: usize,
}

impl<S: Storage> ArticleStore<S> {
    pub fn new(storage: S) -> Self {
        ArticleStore {
            storage,
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
        }
    }

    pub fn with_excerpt_length(mut self, excerpt_length: usize) -> Self {
        self.excerpt_length = excerpt_length;
        self
    }

    fn load(&self) -> Result<Vec<Article>> {
        Ok(read_json(&self.storage, ARTICLES_KEY)?.unwrap_or_default())
    }

    fn save(&self, articles: &[Article]) -> Result<()> {
        write_json(&self.storage, ARTICLES_KEY, articles)?;
        debug!(count = articles.len(), "saved articles");
        Ok(())
    }

    /// All articles, newest first
    pub fn list(&self) -> Result<Vec<Article>> {
        self.load()
    }

    pub fn list_published(&self) -> Result<Vec<Article>> {
        let mut articles = self.load()?;
        articles.retain(|a| a.published);
        Ok(articles)
    }

    pub fn get(&self, id: &str) -> Result<Article> {
        self.load()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| QuireError::NotFound(id.to_string()))
    }

    /// Store a new published article dated today
    pub fn add(&self, draft: ArticleDraft) -> Result<Article> {
        self.add_dated(draft, Local::now().date_naive())
    }

    fn add_dated(&self, draft: ArticleDraft, date: NaiveDate) -> Result<Article> {
        let draft = draft.normalize(self.excerpt_length)?;
        let mut articles = self.load()?;

        let article = Article {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            category: draft.category,
            content: draft.content,
            excerpt: draft.excerpt,
            date,
            published: true,
        };

        articles.insert(0, article.clone());
        self.save(&articles)?;

        info!(id = %article.id, title = %article.title, "added article");
        Ok(article)
    }

    /// Merge `patch` onto the article with `id`
    pub fn update(&self, id: &str, patch: &ArticlePatch) -> Result<Article> {
        let mut articles = self.load()?;
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| QuireError::NotFound(id.to_string()))?;

        patch.apply_to(article, self.excerpt_length)?;
        let updated = article.clone();
        self.save(&articles)?;

        info!(id, "updated article");
        Ok(updated)
    }

    /// Remove the article with `id`; returns whether one was removed
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut articles = self.load()?;
        let before = articles.len();
        articles.retain(|a| a.id != id);

        if articles.len() == before {
            debug!(id, "delete found no article");
            return Ok(false);
        }

        self.save(&articles)?;
        info!(id, "deleted article");
        Ok(true)
    }

    /// Case-insensitive match on title, content or category
    pub fn search(&self, query: &str) -> Result<Vec<Article>> {
        let mut articles = self.load()?;
        articles.retain(|a| a.matches(query));
        Ok(articles)
    }

    pub fn stats(&self) -> Result<ArticleStats> {
        let articles = self.load()?;
        let categories: HashSet<&str> = articles.iter().map(|a| a.category.as_str()).collect();

        Ok(ArticleStats {
            total: articles.len(),
            published: articles.iter().filter(|a| a.published).count(),
            categories: categories.len(),
        })
    }

    /// Write the sample posts when the collection is empty.
    /// The first entry ends up first in the list.
    pub fn seed_if_empty(&self, samples: Vec<(ArticleDraft, NaiveDate)>) -> Result<bool> {
        if !self.load()?.is_empty() {
            return Ok(false);
        }

        for (draft, date) in samples.into_iter().rev() {
            self.add_dated(draft, date)?;
        }
        Ok(true)
    }

    /// Overwrite the whole collection (backup restore)
    pub(crate) fn replace_all(&self, articles: &[Article]) -> Result<()> {
        self.save(articles)
    }
}

//! Optional article freshness metadata.
//!
//! Freshness only re-orders an already-selected recommendation set; it never
//! influences which articles get selected.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::interactions::ArticleId;

/// Per-article creation timestamps.
#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    created_at: HashMap<ArticleId, DateTime<Utc>>,
}

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = (ArticleId, DateTime<Utc>)>,
    ) -> Self {
        Self {
            created_at: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, article_id: ArticleId, created_at: DateTime<Utc>) {
        self.created_at.insert(article_id, created_at);
    }

    pub fn created_at(&self, article_id: ArticleId) -> Option<DateTime<Utc>> {
        self.created_at.get(&article_id).copied()
    }

    pub fn contains(&self, article_id: ArticleId) -> bool {
        self.created_at.contains_key(&article_id)
    }

    pub fn len(&self) -> usize {
        self.created_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created_at.is_empty()
    }

    /// Re-orders an already-selected set by descending creation timestamp.
    ///
    /// Pure re-sort: no article outside `selected` can enter the result.
    /// Articles missing from the catalog are dropped, so the output may be
    /// shorter than the input. Equal timestamps keep their pre-sort rank.
    pub fn sort_by_freshness(&self, selected: &[ArticleId]) -> Vec<ArticleId> {
        let mut dated: Vec<(ArticleId, DateTime<Utc>)> = selected
            .iter()
            .filter_map(|&article_id| {
                self.created_at(article_id)
                    .map(|created_at| (article_id, created_at))
            })
            .collect();

        dated.sort_by(|a, b| b.1.cmp(&a.1));

        dated.into_iter().map(|(article_id, _)| article_id).collect()
    }
}

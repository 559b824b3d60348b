//! User-article interaction log.
//!
//! One record per click event; duplicates are kept. The log derives everything
//! the engine needs from history: a user's distinct seen set, the raw click
//! count (duplicates included, matching the auto-routing policy), and the
//! known-article universe. Seen and unseen always partition the universe.


use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type ArticleId = u64;

/// A single click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub article_id: ArticleId,
}

/// In-memory interaction table, indexed by user.
///
/// Read-only once loaded; the engine never mutates it during a request.
#[derive(Debug, Clone, Default)]
pub struct InteractionLog {
    clicks: HashMap<UserId, Vec<ArticleId>>,
    articles: BTreeSet<ArticleId>,
    event_count: usize,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Interaction>) -> Self {
        let mut log = Self::new();
        for record in records {
            log.record(record.user_id, record.article_id);
        }
        log
    }

    pub fn record(&mut self, user_id: UserId, article_id: ArticleId) {
        self.clicks.entry(user_id).or_default().push(article_id);
        self.articles.insert(article_id);
        self.event_count += 1;
    }

    /// Number of click events recorded for `user_id`, duplicates included.
    pub fn click_count(&self, user_id: UserId) -> usize {
        self.clicks.get(&user_id).map_or(0, Vec::len)
    }

    /// Distinct article ids the user has interacted with.
    pub fn seen(&self, user_id: UserId) -> BTreeSet<ArticleId> {
        self.clicks
            .get(&user_id)
            .map(|clicked| clicked.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Every article id that appears in at least one interaction, ascending.
    pub fn articles(&self) -> &BTreeSet<ArticleId> {
        &self.articles
    }

    /// Universe minus the user's seen set, in ascending article-id order.
    ///
    /// The fixed ordering is what makes downstream rankings deterministic:
    /// stable sorts over this list break score ties by ascending article id.
    pub fn unseen(&self, user_id: UserId) -> Vec<ArticleId> {
        let seen = self.seen(user_id);
        self.articles
            .iter()
            .copied()
            .filter(|article_id| !seen.contains(article_id))
            .collect()
    }

    pub fn user_count(&self) -> usize {
        self.clicks.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }

    pub fn is_empty(&self) -> bool {
        self.event_count == 0
    }
}

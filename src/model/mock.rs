//! Scripted affinity model for tests.

use std::collections::HashMap;

use super::{AffinityModel, PredictionError};
use crate::interactions::{ArticleId, UserId};

/// Returns scripted scores per `(user, article)` pair. Pairs without a script
/// fall back to `default_score`, or fail with [`PredictionError`] when no
/// default is set.
#[derive(Debug, Clone, Default)]
pub struct MockAffinityModel {
    scores: HashMap<(UserId, ArticleId), f32>,
    default_score: Option<f32>,
}

impl MockAffinityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every unscripted pair predicts `score` instead of failing.
    pub fn with_default(score: f32) -> Self {
        Self {
            scores: HashMap::new(),
            default_score: Some(score),
        }
    }

    pub fn with_score(mut self, user_id: UserId, article_id: ArticleId, score: f32) -> Self {
        self.scores.insert((user_id, article_id), score);
        self
    }

    pub fn set_score(&mut self, user_id: UserId, article_id: ArticleId, score: f32) {
        self.scores.insert((user_id, article_id), score);
    }
}

impl AffinityModel for MockAffinityModel {
    fn predict(&self, user_id: UserId, article_id: ArticleId) -> Result<f32, PredictionError> {
        self.scores
            .get(&(user_id, article_id))
            .copied()
            .or(self.default_score)
            .ok_or(PredictionError::UnknownArticle { article_id })
    }
}

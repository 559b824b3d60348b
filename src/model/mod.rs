//! Collaborative-filtering model interface.
//!
//! The engine consumes a trained model as an opaque scorer: one call per
//! `(user, article)` pair. Training happens elsewhere; [`FactorModel`] only
//! replays exported biases and latent factors at inference time.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::PredictionError;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockAffinityModel;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::interactions::{ArticleId, UserId};

/// Single-pair affinity scoring: the sole capability the engine needs.
///
/// Implementations must be read-only; the same snapshot may be shared across
/// requests behind an `Arc` without locking.
pub trait AffinityModel: Send + Sync {
    fn predict(&self, user_id: UserId, article_id: ArticleId) -> Result<f32, PredictionError>;
}

/// Biased matrix-factorization model (SVD-style), loaded from an exported
/// artifact.
///
/// Prediction is `clamp(global_mean + b_u + b_i + p_u · q_i)` over the rating
/// scale the model was trained on. A user or article outside the trained
/// factors is a hard [`PredictionError`], never a silent default score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorModel {
    pub global_mean: f32,
    pub rating_min: f32,
    pub rating_max: f32,
    #[serde(default)]
    pub user_biases: HashMap<UserId, f32>,
    #[serde(default)]
    pub item_biases: HashMap<ArticleId, f32>,
    pub user_factors: HashMap<UserId, Vec<f32>>,
    pub item_factors: HashMap<ArticleId, Vec<f32>>,
}

impl FactorModel {
    pub fn user_count(&self) -> usize {
        self.user_factors.len()
    }

    pub fn article_count(&self) -> usize {
        self.item_factors.len()
    }

    pub fn knows_user(&self, user_id: UserId) -> bool {
        self.user_factors.contains_key(&user_id)
    }

    pub fn knows_article(&self, article_id: ArticleId) -> bool {
        self.item_factors.contains_key(&article_id)
    }
}

impl AffinityModel for FactorModel {
    fn predict(&self, user_id: UserId, article_id: ArticleId) -> Result<f32, PredictionError> {
        let user_factors = self
            .user_factors
            .get(&user_id)
            .ok_or(PredictionError::UnknownUser { user_id })?;
        let item_factors = self
            .item_factors
            .get(&article_id)
            .ok_or(PredictionError::UnknownArticle { article_id })?;

        let user_bias = self.user_biases.get(&user_id).copied().unwrap_or(0.0);
        let item_bias = self.item_biases.get(&article_id).copied().unwrap_or(0.0);
        let dot: f32 = user_factors
            .iter()
            .zip(item_factors.iter())
            .map(|(p, q)| p * q)
            .sum();

        let raw = self.global_mean + user_bias + item_bias + dot;
        Ok(raw.clamp(self.rating_min, self.rating_max))
    }
}

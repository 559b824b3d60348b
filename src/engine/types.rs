use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALPHA, DEFAULT_HISTORY_THRESHOLD, DEFAULT_TOP_N};
use crate::interactions::UserId;

use super::error::RecommendError;

/// Closed set of recommendation strategies.
///
/// `Auto` routes on history depth; the other three force a recommender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendMode {
    Auto,
    Cbf,
    Cf,
    Hybrid,
}

impl RecommendMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendMode::Auto => "auto",
            RecommendMode::Cbf => "cbf",
            RecommendMode::Cf => "cf",
            RecommendMode::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for RecommendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendMode {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(RecommendMode::Auto),
            "cbf" => Ok(RecommendMode::Cbf),
            "cf" => Ok(RecommendMode::Cf),
            "hybrid" => Ok(RecommendMode::Hybrid),
            other => Err(RecommendError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

/// One recommendation request.
///
/// Defaults match the production knobs: `auto` mode, `alpha = 0.5`,
/// `history_threshold = 5`, `top_n = 5`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    pub user_id: UserId,
    pub mode: RecommendMode,
    /// Hybrid fusion weight in `[0, 1]`: 1.0 is pure CBF, 0.0 pure CF.
    pub alpha: f32,
    /// Click count at which auto switches to hybrid (inclusive).
    pub history_threshold: usize,
    /// Maximum result length; must be positive.
    pub top_n: usize,
}

impl RecommendRequest {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            mode: RecommendMode::Auto,
            alpha: DEFAULT_ALPHA,
            history_threshold: DEFAULT_HISTORY_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_mode(mut self, mode: RecommendMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_history_threshold(mut self, history_threshold: usize) -> Self {
        self.history_threshold = history_threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Fails fast on out-of-domain parameters, before any scoring starts.
    pub fn validate(&self) -> Result<(), RecommendError> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(RecommendError::InvalidParameter {
                name: "alpha",
                reason: format!("{} is outside [0, 1]", self.alpha),
            });
        }
        if self.top_n == 0 {
            return Err(RecommendError::InvalidParameter {
                name: "top_n",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

use thiserror::Error;

use crate::model::PredictionError;
use crate::store::StoreError;

/// Errors surfaced by [`crate::engine::Recommender`].
///
/// The engine never retries; retry policy belongs to the surrounding service
/// layer. An unknown or history-less user is not an error (it yields an empty
/// result under the auto policy).
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Mode string is not one of `auto`, `cbf`, `cf`, `hybrid`.
    #[error("invalid recommendation mode '{value}' (expected auto, cbf, cf or hybrid)")]
    InvalidMode { value: String },

    /// A request parameter is outside its valid domain.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// An artifact needed by the engine is unavailable or unreadable.
    #[error("missing resource: {0}")]
    MissingResource(#[from] StoreError),

    /// A per-pair CF prediction failed.
    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

pub type RecommendResult<T> = Result<T, RecommendError>;

use thiserror::Error;

use crate::interactions::{ArticleId, UserId};

/// A single-pair prediction failed.
///
/// Skipping a failed candidate would bias the ranking without caller
/// visibility, so these always propagate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("user {user_id} is not covered by the trained factors")]
    UnknownUser { user_id: UserId },

    #[error("article {article_id} is not covered by the trained factors")]
    UnknownArticle { article_id: ArticleId },
}

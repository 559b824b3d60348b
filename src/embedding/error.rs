use thiserror::Error;

use crate::interactions::ArticleId;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding dimension cannot be zero")]
    ZeroDimension,

    #[error("embedding for article {article_id} has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        article_id: ArticleId,
        expected: usize,
        actual: usize,
    },

    #[error("article {article_id} appears more than once in the embedding index")]
    DuplicateArticle { article_id: ArticleId },

    #[error("embedding matrix holds {actual} values, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::interactions::ArticleId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("embedding data {path} is not a valid f32 buffer")]
    InvalidEmbeddingData { path: PathBuf },

    #[error(
        "embedding data {path} holds {actual} floats, expected {expected} ({rows} rows x {dim} dims)"
    )]
    EmbeddingShapeMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
        rows: usize,
        dim: usize,
    },

    #[error("invalid created_at timestamp {timestamp} for article {article_id} in {path}")]
    InvalidTimestamp {
        path: PathBuf,
        article_id: ArticleId,
        timestamp: i64,
    },

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(path: &Path, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

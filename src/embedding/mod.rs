//! Article embedding index and similarity scoring.
//!
//! The index holds a dense row-major `f32` matrix plus the bijection between
//! article ids and row positions. Lookups of ids that were dropped from the
//! metadata snapshot return `None`; callers exclude them instead of failing
//! the request.

pub mod error;


pub use error::EmbeddingError;

use std::collections::HashMap;

use crate::interactions::ArticleId;

/// Dense embedding matrix with an article-id ↔ row-index bijection.
#[derive(Debug, Clone)]
pub struct EmbeddingIndex {
    dim: usize,
    data: Vec<f32>,
    rows: HashMap<ArticleId, usize>,
    ids: Vec<ArticleId>,
}

impl EmbeddingIndex {
    /// Builds an index from `(article_id, embedding)` pairs.
    ///
    /// Every embedding must share the dimension of the first one, and each
    /// article id may appear only once.
    pub fn from_rows(
        entries: impl IntoIterator<Item = (ArticleId, Vec<f32>)>,
    ) -> Result<Self, EmbeddingError> {
        let mut dim = 0;
        let mut data = Vec::new();
        let mut rows = HashMap::new();
        let mut ids = Vec::new();

        for (article_id, embedding) in entries {
            if ids.is_empty() {
                if embedding.is_empty() {
                    return Err(EmbeddingError::ZeroDimension);
                }
                dim = embedding.len();
            } else if embedding.len() != dim {
                return Err(EmbeddingError::DimensionMismatch {
                    article_id,
                    expected: dim,
                    actual: embedding.len(),
                });
            }

            if rows.insert(article_id, ids.len()).is_some() {
                return Err(EmbeddingError::DuplicateArticle { article_id });
            }
            ids.push(article_id);
            data.extend_from_slice(&embedding);
        }

        Ok(Self {
            dim,
            data,
            rows,
            ids,
        })
    }

    /// Builds an index from a pre-flattened row-major matrix.
    ///
    /// `data.len()` must equal `ids.len() * dim`.
    pub fn from_parts(
        dim: usize,
        ids: Vec<ArticleId>,
        data: Vec<f32>,
    ) -> Result<Self, EmbeddingError> {
        if dim == 0 {
            return Err(EmbeddingError::ZeroDimension);
        }
        let expected = ids.len() * dim;
        if data.len() != expected {
            return Err(EmbeddingError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let mut rows = HashMap::with_capacity(ids.len());
        for (row, article_id) in ids.iter().enumerate() {
            if rows.insert(*article_id, row).is_some() {
                return Err(EmbeddingError::DuplicateArticle {
                    article_id: *article_id,
                });
            }
        }

        Ok(Self {
            dim,
            data,
            rows,
            ids,
        })
    }

    /// Number of articles (matrix rows).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Row position of `article_id`, if the article survived the snapshot.
    pub fn row_index(&self, article_id: ArticleId) -> Option<usize> {
        self.rows.get(&article_id).copied()
    }

    pub fn contains(&self, article_id: ArticleId) -> bool {
        self.rows.contains_key(&article_id)
    }

    /// Embedding row at `row` (panics only on out-of-range internal misuse).
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Inverse mapping: row position back to article id.
    pub fn article_at(&self, row: usize) -> ArticleId {
        self.ids[row]
    }

    pub fn row_for(&self, article_id: ArticleId) -> Option<&[f32]> {
        self.row_index(article_id).map(|row| self.row(row))
    }

    /// Element-wise mean of the embedding rows of `article_ids`.
    ///
    /// Ids without an embedding row are skipped silently. Returns `None` when
    /// no id resolves to a row, i.e. there is no content signal to rank with.
    pub fn mean_profile(
        &self,
        article_ids: impl IntoIterator<Item = ArticleId>,
    ) -> Option<Vec<f32>> {
        let mut profile = vec![0.0f32; self.dim];
        let mut count = 0usize;

        for article_id in article_ids {
            if let Some(row) = self.row_for(article_id) {
                for (acc, value) in profile.iter_mut().zip(row.iter()) {
                    *acc += value;
                }
                count += 1;
            }
        }

        if count == 0 {
            return None;
        }
        let inv = 1.0 / count as f32;
        for value in &mut profile {
            *value *= inv;
        }
        Some(profile)
    }

    /// Cosine similarity of `profile` against every matrix row, row order.
    pub fn score_all(&self, profile: &[f32]) -> Vec<f32> {
        (0..self.len())
            .map(|row| cosine_similarity(profile, self.row(row)))
            .collect()
    }
}

/// Cosine similarity in `[-1, 1]`.
///
/// Mismatched lengths, empty inputs, and zero-magnitude vectors all yield a
/// deterministic `0.0` rather than propagating a division by zero.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

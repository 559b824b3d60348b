//! Content-based filtering: rank unseen articles by embedding similarity to
//! the user's mean profile.

use std::cmp::Ordering;

use tracing::debug;

use crate::constants::SEEN_ARTICLE_SCORE;
use crate::embedding::EmbeddingIndex;
use crate::interactions::{ArticleId, InteractionLog, UserId};

/// Recommends up to `top_n` unseen articles for `user_id`.
///
/// Missing embeddings are tolerated at every step: seen articles without a
/// row are skipped when building the profile, and a user whose history has no
/// embedded article yields an empty result rather than an error.
pub(crate) fn recommend_cbf(
    log: &InteractionLog,
    index: &EmbeddingIndex,
    user_id: UserId,
    top_n: usize,
) -> Vec<ArticleId> {
    let seen = log.seen(user_id);
    if seen.is_empty() {
        debug!(user_id, "no interaction history, CBF has no signal");
        return Vec::new();
    }

    let Some(profile) = index.mean_profile(seen.iter().copied()) else {
        debug!(user_id, "no seen article has an embedding row");
        return Vec::new();
    };

    let mut scores = index.score_all(&profile);

    // A seen article must never be recommended twice.
    for &article_id in &seen {
        if let Some(row) = index.row_index(article_id) {
            scores[row] = SEEN_ARTICLE_SCORE;
        }
    }

    rank_rows(&scores, top_n)
        .into_iter()
        .map(|row| index.article_at(row))
        .collect()
}

/// Top `top_n` row indices by descending score, ascending row index on ties.
/// Penalized rows are excluded outright, so a short candidate pool shrinks
/// the result instead of leaking seen articles back in.
fn rank_rows(scores: &[f32], top_n: usize) -> Vec<usize> {
    let mut rows: Vec<usize> = (0..scores.len())
        .filter(|&row| scores[row] > SEEN_ARTICLE_SCORE)
        .collect();

    rows.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    rows.truncate(top_n);
    rows
}

//! Weighted fusion of CBF similarity and CF predicted scores.

use std::cmp::Ordering;

use tracing::debug;

use crate::embedding::EmbeddingIndex;
use crate::interactions::{ArticleId, InteractionLog, UserId};
use crate::model::AffinityModel;

use super::cf;
use super::error::RecommendResult;

/// Recommends up to `top_n` unseen articles by
/// `alpha * cbf_similarity + (1 - alpha) * cf_score`.
///
/// Candidates come from the interaction-log universe, as in pure CF. An
/// article that was dropped from the embedding snapshot still participates:
/// its CBF term is 0.0 rather than being excluded from fusion. A user whose
/// history has no embedded article falls back to pure CF.
pub(crate) fn recommend_hybrid(
    log: &InteractionLog,
    index: &EmbeddingIndex,
    model: &dyn AffinityModel,
    user_id: UserId,
    top_n: usize,
    alpha: f32,
) -> RecommendResult<Vec<ArticleId>> {
    let seen = log.seen(user_id);

    let Some(profile) = index.mean_profile(seen.iter().copied()) else {
        debug!(user_id, "no embedded history, falling back to pure CF");
        return cf::recommend_cf(log, model, user_id, top_n);
    };

    // Seen articles are excluded by the unseen candidate list itself, so no
    // row penalty is needed here.
    let cbf_scores = index.score_all(&profile);

    let unseen = log.unseen(user_id);
    let mut fused = Vec::with_capacity(unseen.len());
    for article_id in unseen {
        let cbf = index
            .row_index(article_id)
            .map(|row| cbf_scores[row])
            .unwrap_or(0.0);
        let cf = model.predict(user_id, article_id)?;
        fused.push((article_id, alpha * cbf + (1.0 - alpha) * cf));
    }

    // Stable sort over an ascending-id input: ties resolve to the lower id.
    fused.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    fused.truncate(top_n);

    Ok(fused.into_iter().map(|(article_id, _)| article_id).collect())
}

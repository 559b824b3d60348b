//! Collaborative filtering: rank unseen articles by predicted affinity.

use std::cmp::Ordering;

use crate::interactions::{ArticleId, InteractionLog, UserId};
use crate::model::AffinityModel;

use super::error::RecommendResult;

/// Recommends up to `top_n` unseen articles by model-predicted score.
///
/// The candidate universe is the interaction log: only articles someone has
/// clicked are candidates. A failed prediction aborts the whole request;
/// silently dropping a candidate would bias the ranking.
pub(crate) fn recommend_cf(
    log: &InteractionLog,
    model: &dyn AffinityModel,
    user_id: UserId,
    top_n: usize,
) -> RecommendResult<Vec<ArticleId>> {
    let unseen = log.unseen(user_id);

    let mut predicted = Vec::with_capacity(unseen.len());
    for article_id in unseen {
        let score = model.predict(user_id, article_id)?;
        predicted.push((article_id, score));
    }

    // Stable sort over an ascending-id input: ties resolve to the lower id.
    predicted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    predicted.truncate(top_n);

    Ok(predicted.into_iter().map(|(article_id, _)| article_id).collect())
}

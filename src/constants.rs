//! Cross-cutting, shared defaults.
//!
//! These mirror the knobs of [`crate::engine::RecommendRequest`] and can all be
//! overridden per request or through `CURATOR_*` environment variables.

/// Number of articles returned when the caller does not specify one.
pub const DEFAULT_TOP_N: usize = 5;

/// Hybrid fusion weight: `alpha * cbf + (1 - alpha) * cf`.
pub const DEFAULT_ALPHA: f32 = 0.5;

/// Click count at which the auto policy switches from CBF to hybrid
/// (inclusive on the hybrid side).
pub const DEFAULT_HISTORY_THRESHOLD: usize = 5;

/// Score assigned to already-seen articles before ranking. Below any valid
/// cosine similarity, so a seen article can never re-enter the result set.
pub const SEEN_ARTICLE_SCORE: f32 = f32::NEG_INFINITY;

//! Recommendation decision engine: routing policy + the three recommenders.
//!
//! One deterministic decision per request. The policy inspects the requested
//! mode and the user's click count, runs exactly one recommender, and
//! optionally re-orders the selected set by article freshness.

pub mod error;
pub mod types;

mod cbf;
mod cf;
mod hybrid;


pub use error::{RecommendError, RecommendResult};
pub use types::{RecommendMode, RecommendRequest};

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::catalog::ArticleCatalog;
use crate::config::Config;
use crate::embedding::EmbeddingIndex;
use crate::interactions::{ArticleId, InteractionLog};
use crate::model::AffinityModel;

/// Immutable per-process resource snapshot.
///
/// Loaded once (see [`crate::store::load_bundle`]) and passed in explicitly;
/// the engine never reaches into ambient state. Everything here is read-only
/// for the lifetime of the bundle, so sharing it across requests needs no
/// locking.
pub struct ResourceBundle {
    pub interactions: InteractionLog,
    pub embeddings: EmbeddingIndex,
    pub model: Arc<dyn AffinityModel>,
    pub catalog: Option<ArticleCatalog>,
}

impl std::fmt::Debug for ResourceBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceBundle")
            .field("interactions", &self.interactions)
            .field("embeddings", &self.embeddings)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

/// The recommendation engine.
pub struct Recommender {
    resources: ResourceBundle,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("resources", &self.resources)
            .finish()
    }
}

impl Recommender {
    pub fn new(resources: ResourceBundle) -> Self {
        Self { resources }
    }

    /// Loads all artifacts named by `config` and builds the engine.
    pub fn load(config: &Config) -> RecommendResult<Self> {
        let resources = crate::store::load_bundle(config)?;
        Ok(Self::new(resources))
    }

    pub fn resources(&self) -> &ResourceBundle {
        &self.resources
    }

    /// Produces an ordered list of recommended article ids.
    ///
    /// Routing, per request mode:
    ///
    /// | mode     | click count vs threshold | recommender |
    /// |----------|--------------------------|-------------|
    /// | `auto`   | `0`                      | empty list  |
    /// | `auto`   | `< threshold`            | CBF         |
    /// | `auto`   | `>= threshold`           | hybrid      |
    /// | `cbf`    | ignored                  | CBF         |
    /// | `cf`     | ignored                  | CF          |
    /// | `hybrid` | ignored                  | hybrid      |
    ///
    /// When a catalog is attached, the selected set is re-ordered newest
    /// first before returning (a pure re-sort, never a re-selection).
    #[instrument(
        skip(self, request),
        fields(
            user_id = request.user_id,
            mode = %request.mode,
            top_n = request.top_n,
        )
    )]
    pub fn recommend(&self, request: &RecommendRequest) -> RecommendResult<Vec<ArticleId>> {
        request.validate()?;

        let r = &self.resources;
        let selected = match request.mode {
            RecommendMode::Auto => {
                let nb_clicks = r.interactions.click_count(request.user_id);
                if nb_clicks == 0 {
                    debug!(user_id = request.user_id, "no history, returning empty");
                    Vec::new()
                } else if nb_clicks < request.history_threshold {
                    debug!(nb_clicks, threshold = request.history_threshold, "auto -> cbf");
                    cbf::recommend_cbf(
                        &r.interactions,
                        &r.embeddings,
                        request.user_id,
                        request.top_n,
                    )
                } else {
                    debug!(nb_clicks, threshold = request.history_threshold, "auto -> hybrid");
                    hybrid::recommend_hybrid(
                        &r.interactions,
                        &r.embeddings,
                        r.model.as_ref(),
                        request.user_id,
                        request.top_n,
                        request.alpha,
                    )?
                }
            }
            RecommendMode::Cbf => cbf::recommend_cbf(
                &r.interactions,
                &r.embeddings,
                request.user_id,
                request.top_n,
            ),
            RecommendMode::Cf => cf::recommend_cf(
                &r.interactions,
                r.model.as_ref(),
                request.user_id,
                request.top_n,
            )?,
            RecommendMode::Hybrid => hybrid::recommend_hybrid(
                &r.interactions,
                &r.embeddings,
                r.model.as_ref(),
                request.user_id,
                request.top_n,
                request.alpha,
            )?,
        };

        let selected = match &r.catalog {
            Some(catalog) => catalog.sort_by_freshness(&selected),
            None => selected,
        };

        debug!(count = selected.len(), "recommendation complete");
        Ok(selected)
    }
}

//! Curator library crate (used by the CLI binary and integration tests).
//!
//! Curator serves personalized article recommendations for a user id. Two
//! classical paradigms are blended: content-based filtering (CBF) over article
//! embeddings, and collaborative filtering (CF) via a pre-trained latent-factor
//! model. A routing policy picks one of them (or a weighted hybrid of both)
//! from the depth of the user's interaction history.
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//! - [`Recommender`], [`RecommendRequest`], [`RecommendMode`] - The decision engine
//! - [`ResourceBundle`] - Immutable per-process resource snapshot
//!
//! ## Resources
//! - [`InteractionLog`] - User click events and the known-article universe
//! - [`EmbeddingIndex`] - Article embedding matrix + id/row bijection
//! - [`AffinityModel`], [`FactorModel`] - Single-pair CF scoring
//! - [`ArticleCatalog`] - Optional per-article freshness timestamps
//!
//! ## Artifact Loading
//! - [`store`] functions read local JSON manifests and mmap'd embedding data
//!   into a [`ResourceBundle`]. Transport (blob storage, HTTP) is out of scope.
//!
//! ## Test/Mock Support
//! [`MockAffinityModel`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod interactions;
pub mod model;
pub mod store;

pub use catalog::ArticleCatalog;
pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_ALPHA, DEFAULT_HISTORY_THRESHOLD, DEFAULT_TOP_N, SEEN_ARTICLE_SCORE};
pub use embedding::{EmbeddingError, EmbeddingIndex, cosine_similarity};
pub use engine::{
    RecommendError, RecommendMode, RecommendRequest, RecommendResult, Recommender, ResourceBundle,
};
pub use interactions::{ArticleId, Interaction, InteractionLog, UserId};
#[cfg(any(test, feature = "mock"))]
pub use model::MockAffinityModel;
pub use model::{AffinityModel, FactorModel, PredictionError};
pub use store::{StoreError, StoreResult};

//! Local artifact loading.
//!
//! Reads the exported artifacts into an immutable [`ResourceBundle`]:
//! interaction log and CF model as JSON, the embedding matrix as a raw
//! little-endian f32 file described by a JSON manifest (memory-mapped, then
//! copied into the index). Transport concerns (blob storage, HTTP) live
//! outside this crate; the engine only ever sees in-memory resources.

pub mod error;


pub use error::{StoreError, StoreResult};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ArticleCatalog;
use crate::config::Config;
use crate::embedding::EmbeddingIndex;
use crate::engine::ResourceBundle;
use crate::interactions::{ArticleId, Interaction, InteractionLog};
use crate::model::FactorModel;

/// Sidecar manifest describing the raw embedding matrix file.
///
/// `data_file` is resolved relative to the manifest's directory. Row `i` of
/// the matrix belongs to `article_ids[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingManifest {
    pub dim: usize,
    pub article_ids: Vec<ArticleId>,
    pub data_file: String,
}

/// One row of the article metadata artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub article_id: ArticleId,
    pub created_at_ts: i64,
}

/// Loads the interaction log from a JSON array of click records.
pub fn load_interactions(path: &Path) -> StoreResult<InteractionLog> {
    let records: Vec<Interaction> = read_json(path)?;
    let log = InteractionLog::from_records(records);
    debug!(
        path = %path.display(),
        users = log.user_count(),
        articles = log.article_count(),
        events = log.event_count(),
        "interaction log loaded"
    );
    Ok(log)
}

/// Loads the embedding index: JSON manifest + mmap'd f32 matrix.
pub fn load_embeddings(manifest_path: &Path) -> StoreResult<EmbeddingIndex> {
    let manifest: EmbeddingManifest = read_json(manifest_path)?;

    let data_path = manifest_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&manifest.data_file);

    let file = File::open(&data_path).map_err(|e| StoreError::io(&data_path, e))?;
    // SAFETY: the artifact is treated as read-only for the process lifetime;
    // concurrent external mutation of the file is not supported.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| StoreError::io(&data_path, e))?;

    let floats: &[f32] = bytemuck::try_cast_slice(&mmap)
        .map_err(|_| StoreError::InvalidEmbeddingData {
            path: data_path.clone(),
        })?;

    let expected = manifest.dim * manifest.article_ids.len();
    if floats.len() != expected {
        return Err(StoreError::EmbeddingShapeMismatch {
            path: data_path,
            expected,
            actual: floats.len(),
            rows: manifest.article_ids.len(),
            dim: manifest.dim,
        });
    }

    let index = EmbeddingIndex::from_parts(manifest.dim, manifest.article_ids, floats.to_vec())?;
    debug!(
        path = %manifest_path.display(),
        rows = index.len(),
        dim = index.dim(),
        "embedding index loaded"
    );
    Ok(index)
}

/// Loads exported CF model parameters.
pub fn load_model(path: &Path) -> StoreResult<FactorModel> {
    let model: FactorModel = read_json(path)?;
    debug!(
        path = %path.display(),
        users = model.user_count(),
        articles = model.article_count(),
        "CF model loaded"
    );
    Ok(model)
}

/// Loads article freshness metadata.
pub fn load_catalog(path: &Path) -> StoreResult<ArticleCatalog> {
    let records: Vec<CatalogRecord> = read_json(path)?;

    let mut catalog = ArticleCatalog::new();
    for record in records {
        let created_at: DateTime<Utc> = DateTime::from_timestamp(record.created_at_ts, 0)
            .ok_or(StoreError::InvalidTimestamp {
                path: path.to_path_buf(),
                article_id: record.article_id,
                timestamp: record.created_at_ts,
            })?;
        catalog.insert(record.article_id, created_at);
    }

    debug!(path = %path.display(), articles = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Loads every artifact named by `config` into one immutable bundle.
pub fn load_bundle(config: &Config) -> StoreResult<ResourceBundle> {
    let interactions = load_interactions(&config.interactions_path)?;
    let embeddings = load_embeddings(&config.embeddings_manifest)?;
    let model = Arc::new(load_model(&config.model_path)?);
    let catalog = match &config.catalog_path {
        Some(path) => Some(load_catalog(path)?),
        None => None,
    };

    Ok(ResourceBundle {
        interactions,
        embeddings,
        model,
        catalog,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::malformed(path, e))
}

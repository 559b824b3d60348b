//! Shared artifact fixtures for integration tests.
//!
//! Writes a small but complete artifact set into a temp directory:
//! five embedded articles, three users with different history depths, and a
//! trained factor model covering every (user, unseen-article) pair.
//!
//! Geometry, relative to a [0.9, 0.1] taste profile: article 102 aligns
//! exactly, 104 is close, 103 is nearly orthogonal.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use curator::store::{CatalogRecord, EmbeddingManifest};
use curator::{Config, FactorModel, Interaction};

pub const LIGHT_USER: u64 = 8; // 2 clicks
pub const HEAVY_USER: u64 = 5; // 5 clicks, 3 distinct articles
pub const UNKNOWN_USER: u64 = 999;

fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).expect("create artifact");
    file.write_all(bytes).expect("write artifact");
    path
}

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> PathBuf {
    write_file(dir, name, &serde_json::to_vec(value).expect("serialize"))
}

fn interactions() -> Vec<Interaction> {
    let mut records = Vec::new();
    for (user_id, article_id) in [
        (LIGHT_USER, 100),
        (LIGHT_USER, 101),
        (7, 102),
        (7, 103),
        (7, 104),
        (HEAVY_USER, 100),
        (HEAVY_USER, 101),
        (HEAVY_USER, 102),
        (HEAVY_USER, 100),
        (HEAVY_USER, 101),
    ] {
        records.push(Interaction {
            user_id,
            article_id,
        });
    }
    records
}

fn model() -> FactorModel {
    FactorModel {
        global_mean: 0.5,
        rating_min: 0.0,
        rating_max: 1.0,
        user_biases: HashMap::new(),
        item_biases: HashMap::new(),
        user_factors: HashMap::from([
            (HEAVY_USER, vec![0.3, 0.3]),
            (7, vec![0.1, 0.1]),
            (LIGHT_USER, vec![0.2, 0.2]),
        ]),
        item_factors: HashMap::from([
            (100, vec![0.5, 0.5]),
            (101, vec![0.4, 0.4]),
            (102, vec![-0.5, -0.5]),
            (103, vec![0.5, 0.5]),
            (104, vec![0.0, 0.0]),
        ]),
    }
}

fn embedding_rows() -> Vec<(u64, Vec<f32>)> {
    vec![
        (100, vec![1.0, 0.0]),
        (101, vec![0.8, 0.2]),
        (102, vec![0.9, 0.1]),
        (103, vec![0.0, 1.0]),
        (104, vec![0.6, 0.4]),
    ]
}

/// Writes interactions, embeddings and the CF model into `dir` and returns a
/// [`Config`] pointing at them (no catalog).
pub fn write_artifacts(dir: &Path) -> Config {
    let interactions_path = write_json(dir, "interactions.json", &interactions());
    let model_path = write_json(dir, "model_cf.json", &model());

    let rows = embedding_rows();
    let data: Vec<f32> = rows.iter().flat_map(|(_, row)| row.iter().copied()).collect();
    write_file(dir, "embeddings.bin", bytemuck::cast_slice(&data));
    let embeddings_manifest = write_json(
        dir,
        "embeddings.json",
        &EmbeddingManifest {
            dim: 2,
            article_ids: rows.iter().map(|(article_id, _)| *article_id).collect(),
            data_file: "embeddings.bin".to_string(),
        },
    );

    Config {
        interactions_path,
        embeddings_manifest,
        model_path,
        catalog_path: None,
        ..Default::default()
    }
}

/// Writes an article catalog where higher ids are strictly fresher.
pub fn write_catalog(dir: &Path) -> PathBuf {
    let records: Vec<CatalogRecord> = [
        (100, 1_700_000_100),
        (101, 1_700_000_200),
        (102, 1_700_000_300),
        (103, 1_700_000_500),
        (104, 1_700_000_400),
    ]
    .into_iter()
    .map(|(article_id, created_at_ts)| CatalogRecord {
        article_id,
        created_at_ts,
    })
    .collect();
    write_json(dir, "articles.json", &records)
}

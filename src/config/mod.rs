//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `CURATOR_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_ALPHA, DEFAULT_HISTORY_THRESHOLD, DEFAULT_TOP_N};

/// Engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CURATOR_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interaction log artifact (JSON array of click records).
    /// Default: `./artifacts/interactions.json`.
    pub interactions_path: PathBuf,

    /// Embedding manifest (JSON; names the raw f32 data file).
    /// Default: `./artifacts/embeddings.json`.
    pub embeddings_manifest: PathBuf,

    /// Exported CF model parameters (JSON). Default: `./artifacts/model_cf.json`.
    pub model_path: PathBuf,

    /// Optional article metadata with creation timestamps. When unset, final
    /// results keep their score order instead of being re-sorted by freshness.
    pub catalog_path: Option<PathBuf>,

    /// Hybrid fusion weight in `[0, 1]`. Default: `0.5`.
    pub alpha: f32,

    /// Auto-mode click threshold (inclusive on the hybrid side). Default: `5`.
    pub history_threshold: usize,

    /// Default result length. Default: `5`.
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interactions_path: PathBuf::from("./artifacts/interactions.json"),
            embeddings_manifest: PathBuf::from("./artifacts/embeddings.json"),
            model_path: PathBuf::from("./artifacts/model_cf.json"),
            catalog_path: None,
            alpha: DEFAULT_ALPHA,
            history_threshold: DEFAULT_HISTORY_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    const ENV_INTERACTIONS_PATH: &'static str = "CURATOR_INTERACTIONS_PATH";
    const ENV_EMBEDDINGS_MANIFEST: &'static str = "CURATOR_EMBEDDINGS_MANIFEST";
    const ENV_MODEL_PATH: &'static str = "CURATOR_MODEL_PATH";
    const ENV_CATALOG_PATH: &'static str = "CURATOR_CATALOG_PATH";
    const ENV_ALPHA: &'static str = "CURATOR_ALPHA";
    const ENV_HISTORY_THRESHOLD: &'static str = "CURATOR_HISTORY_THRESHOLD";
    const ENV_TOP_N: &'static str = "CURATOR_TOP_N";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let interactions_path =
            Self::parse_path_from_env(Self::ENV_INTERACTIONS_PATH, defaults.interactions_path);
        let embeddings_manifest =
            Self::parse_path_from_env(Self::ENV_EMBEDDINGS_MANIFEST, defaults.embeddings_manifest);
        let model_path = Self::parse_path_from_env(Self::ENV_MODEL_PATH, defaults.model_path);
        let catalog_path = Self::parse_optional_path_from_env(Self::ENV_CATALOG_PATH);
        let alpha = Self::parse_alpha_from_env(defaults.alpha)?;
        let history_threshold =
            Self::parse_usize_from_env(Self::ENV_HISTORY_THRESHOLD, defaults.history_threshold)?;
        let top_n = Self::parse_top_n_from_env(defaults.top_n)?;

        Ok(Self {
            interactions_path,
            embeddings_manifest,
            model_path,
            catalog_path,
            alpha,
            history_threshold,
            top_n,
        })
    }

    /// Validates artifact paths (does not read them).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [
            &self.interactions_path,
            &self.embeddings_manifest,
            &self.model_path,
        ] {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if let Some(ref path) = self.catalog_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_alpha_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_ALPHA) {
            Ok(value) => {
                let alpha: f32 = value.parse().map_err(|e| ConfigError::AlphaParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                    return Err(ConfigError::InvalidAlpha { value });
                }

                Ok(alpha)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_top_n_from_env(default: usize) -> Result<usize, ConfigError> {
        let top_n = Self::parse_usize_from_env(Self::ENV_TOP_N, default)?;
        if top_n == 0 {
            return Err(ConfigError::InvalidTopN);
        }
        Ok(top_n)
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                name: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}

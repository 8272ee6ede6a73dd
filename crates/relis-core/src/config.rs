//! Analytics configuration: input path, histogram bins, exemplar selection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_CORPUS_PATH: &str = "data/RELIS/q&a.jsonl";
pub const DEFAULT_BIN_UPPER_BOUNDS: &[usize] = &[50, 100, 200, 500, 1000, 2000];
pub const DEFAULT_SHORTEST_K: usize = 10;
pub const DEFAULT_NEAR_MEAN_INDEX: usize = 8000;
pub const DEFAULT_INSPECT_LANGUAGE: &str = "ca";

pub const ENV_CORPUS_PATH: &str = "RELIS_CORPUS_PATH";
pub const ENV_SHORTEST_K: &str = "RELIS_SHORTEST_K";
pub const ENV_NEAR_MEAN_INDEX: &str = "RELIS_NEAR_MEAN_INDEX";
pub const ENV_INSPECT_LANGUAGE: &str = "RELIS_INSPECT_LANGUAGE";

/// Settings for one analytics run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// JSONL corpus to analyze.
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
    /// Inclusive upper bounds of the closed histogram bins. A final
    /// open-ended bin starts one past the last bound.
    #[serde(default = "default_bin_upper_bounds")]
    pub bin_upper_bounds: Vec<usize>,
    /// How many of the shortest answers to dump.
    #[serde(default = "default_shortest_k")]
    pub shortest_k: usize,
    /// Zero-based position in the below-mean list to pick as the exemplar.
    #[serde(default = "default_near_mean_index")]
    pub near_mean_index: usize,
    /// Language whose records are dumped verbatim. `None` skips the dump.
    #[serde(default = "default_inspect_language")]
    pub inspect_language: Option<String>,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS_PATH)
}
fn default_bin_upper_bounds() -> Vec<usize> {
    DEFAULT_BIN_UPPER_BOUNDS.to_vec()
}
fn default_shortest_k() -> usize {
    DEFAULT_SHORTEST_K
}
fn default_near_mean_index() -> usize {
    DEFAULT_NEAR_MEAN_INDEX
}
fn default_inspect_language() -> Option<String> {
    Some(DEFAULT_INSPECT_LANGUAGE.into())
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            bin_upper_bounds: default_bin_upper_bounds(),
            shortest_k: DEFAULT_SHORTEST_K,
            near_mean_index: DEFAULT_NEAR_MEAN_INDEX,
            inspect_language: default_inspect_language(),
        }
    }
}

impl AnalyticsConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(config_path)?;
        let config: AnalyticsConfig = serde_json::from_str(&raw)?;
        info!("Loaded analytics config from {}", config_path.display());
        config.validate()?;
        Ok(config)
    }

    /// Override fields from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Override fields from any variable lookup. Unparseable numbers are
    /// ignored; an empty `RELIS_INSPECT_LANGUAGE` disables the dump.
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CORPUS_PATH) {
            self.corpus_path = PathBuf::from(path);
        }
        if let Some(k) = parse_var(&lookup, ENV_SHORTEST_K) {
            self.shortest_k = k;
        }
        if let Some(idx) = parse_var(&lookup, ENV_NEAR_MEAN_INDEX) {
            self.near_mean_index = idx;
        }
        if let Some(lang) = lookup(ENV_INSPECT_LANGUAGE) {
            self.inspect_language = if lang.is_empty() { None } else { Some(lang) };
        }
    }

    /// Check that the histogram bounds are strictly increasing.
    pub fn validate(&self) -> Result<()> {
        if let Some(pair) = self.bin_upper_bounds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::Config(format!(
                "bin_upper_bounds must be strictly increasing, got {} then {}",
                pair[0], pair[1]
            )));
        }
        Ok(())
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a non-negative integer", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_bounds_are_valid() {
        let config = AnalyticsConfig {
            bin_upper_bounds: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unordered_bounds() {
        let config = AnalyticsConfig {
            bin_upper_bounds: vec![50, 50, 100],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relis.json");
        std::fs::write(&path, r#"{"shortest_k": 3, "inspect_language": null}"#).unwrap();

        let config = AnalyticsConfig::load(&path).unwrap();
        assert_eq!(config.shortest_k, 3);
        assert_eq!(config.inspect_language, None);
        assert_eq!(config.near_mean_index, DEFAULT_NEAR_MEAN_INDEX);
        assert_eq!(config.corpus_path, PathBuf::from(DEFAULT_CORPUS_PATH));
    }

    #[test]
    fn test_load_invalid_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relis.json");
        std::fs::write(&path, r#"{"bin_upper_bounds": [100, 10]}"#).unwrap();
        assert!(matches!(AnalyticsConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_apply_vars() {
        let vars: HashMap<&str, &str> = [
            (ENV_CORPUS_PATH, "other.jsonl"),
            (ENV_SHORTEST_K, "5"),
            (ENV_NEAR_MEAN_INDEX, "not-a-number"),
            (ENV_INSPECT_LANGUAGE, ""),
        ]
        .into_iter()
        .collect();

        let mut config = AnalyticsConfig::default();
        config.apply_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.corpus_path, PathBuf::from("other.jsonl"));
        assert_eq!(config.shortest_k, 5);
        assert_eq!(config.near_mean_index, DEFAULT_NEAR_MEAN_INDEX);
        assert_eq!(config.inspect_language, None);
    }
}

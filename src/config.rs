//! Advisor configuration (`.agri/config.toml`)
//!
//! Every field has a default, so a missing file or a partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AdvisorError, Result};

pub const DEFAULT_CONFIG_PATH: &str = ".agri/config.toml";

/// Model identifier that selects the feature-hashing embedder
pub const HASHING_MODEL: &str = "hashing";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub embeddings: EmbeddingsSection,
    pub retrieval: RetrievalSection,
    pub policy: PolicySection,
    pub knowledge: KnowledgeSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingsSection {
    /// "all-minilm-l6-v2" (ONNX) or "hashing"
    pub model: String,
    pub model_dir: PathBuf,
    pub dimensions: usize,
    /// Expected SHA256 of the ONNX file, checked before loading
    pub sha256: Option<String>,
}

impl Default for EmbeddingsSection {
    fn default() -> Self {
        Self {
            model: "all-minilm-l6-v2".to_string(),
            model_dir: PathBuf::from("resources/models/all-minilm-l6-v2"),
            dimensions: 384,
            sha256: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBackend {
    /// Exact linear scan
    #[default]
    Flat,
    /// Approximate HNSW graph (usearch)
    Hnsw,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSection {
    pub backend: IndexBackend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySection {
    pub threshold: f32,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self { threshold: 0.6 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeSection {
    /// JSON or TOML dataset; the built-in dataset is used when unset
    pub path: Option<PathBuf>,
}

impl AdvisorConfig {
    /// Load configuration from `path`, falling back to defaults if it doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.embeddings.dimensions == 0 {
            return Err(AdvisorError::Config(
                "embeddings.dimensions must be positive".to_string(),
            ));
        }
        if !self.policy.threshold.is_finite() {
            return Err(AdvisorError::Config(
                "policy.threshold must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AdvisorConfig::load(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.embeddings.model, "all-minilm-l6-v2");
        assert_eq!(config.embeddings.dimensions, 384);
        assert_eq!(config.retrieval.backend, IndexBackend::Flat);
        assert_relative_eq!(config.policy.threshold, 0.6);
        assert!(config.knowledge.path.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = AdvisorConfig::from_toml(
            r#"
[embeddings]
model = "hashing"
dimensions = 128

[retrieval]
backend = "hnsw"
"#,
        )
        .unwrap();
        assert_eq!(config.embeddings.model, HASHING_MODEL);
        assert_eq!(config.embeddings.dimensions, 128);
        assert_eq!(config.retrieval.backend, IndexBackend::Hnsw);
        assert_relative_eq!(config.policy.threshold, 0.6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[policy]\nthreshold = 0.75\n[knowledge]\npath = \"kb.json\"\n",
        )
        .unwrap();

        let config = AdvisorConfig::load(&path).unwrap();
        assert_relative_eq!(config.policy.threshold, 0.75);
        assert_eq!(config.knowledge.path, Some(PathBuf::from("kb.json")));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AdvisorConfig::from_toml("[embeddings]\ndimensions = 0\n"),
            Err(AdvisorError::Config(_))
        ));
        assert!(matches!(
            AdvisorConfig::from_toml("[retrieval]\nbackend = \"annoy\"\n"),
            Err(AdvisorError::Config(_))
        ));
    }
}

//! Process-wide embedding provider with one-time model load
//!
//! The engine is created on first use. Concurrent first callers are
//! serialized on `init_lock`; afterwards every caller shares the loaded
//! engine. A failed load leaves the provider empty, so a later call loads
//! again instead of caching the failure.

use parking_lot::Mutex;
use std::sync::OnceLock;

use super::{EmbeddingEngine, HashingEmbedder, OnnxEmbedder};
use crate::config::{EmbeddingsSection, HASHING_MODEL};
use crate::error::{AdvisorError, Result};

type EngineFactory = Box<dyn Fn() -> anyhow::Result<Box<dyn EmbeddingEngine>> + Send + Sync>;

pub struct EmbeddingProvider {
    factory: EngineFactory,
    engine: OnceLock<Mutex<Box<dyn EmbeddingEngine>>>,
    init_lock: Mutex<()>,
}

impl EmbeddingProvider {
    /// Provider that builds its engine lazily with `factory`
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> anyhow::Result<Box<dyn EmbeddingEngine>> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            engine: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Provider around an already constructed engine
    pub fn from_engine(engine: Box<dyn EmbeddingEngine>) -> Self {
        let provider = Self::new(|| -> anyhow::Result<Box<dyn EmbeddingEngine>> {
            anyhow::bail!("engine was supplied pre-loaded and cannot be rebuilt")
        });
        let _ = provider.engine.set(Mutex::new(engine));
        provider
    }

    /// Provider selected by the `[embeddings]` config section
    pub fn from_config(section: &EmbeddingsSection) -> Self {
        let section = section.clone();
        Self::new(move || -> anyhow::Result<Box<dyn EmbeddingEngine>> {
            if section.model == HASHING_MODEL {
                return Ok(Box::new(HashingEmbedder::new(section.dimensions)));
            }
            Ok(Box::new(OnnxEmbedder::from_dir(
                &section.model_dir,
                &section.model,
                section.dimensions,
                section.sha256.as_deref(),
            )?))
        })
    }

    /// Load the engine if it isn't loaded yet
    pub fn ensure_loaded(&self) -> Result<()> {
        self.engine().map(|_| ())
    }

    pub fn is_loaded(&self) -> bool {
        self.engine.get().is_some()
    }

    /// Embed `text`, loading the model on first use
    pub fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut engine = self.engine()?.lock();
        let vector = engine
            .embed(text)
            .map_err(|e| AdvisorError::Embedding(format!("{:#}", e)))?;

        if vector.len() != engine.dimension() {
            return Err(AdvisorError::DimensionMismatch {
                expected: engine.dimension(),
                actual: vector.len(),
            });
        }
        Ok(vector)
    }

    /// Embed many texts under a single lock acquisition
    pub fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut engine = self.engine()?.lock();
        let vectors = engine
            .embed_batch(texts)
            .map_err(|e| AdvisorError::Embedding(format!("{:#}", e)))?;

        let expected = engine.dimension();
        if let Some(bad) = vectors.iter().find(|v| v.len() != expected) {
            return Err(AdvisorError::DimensionMismatch {
                expected,
                actual: bad.len(),
            });
        }
        Ok(vectors)
    }

    pub fn dimension(&self) -> Result<usize> {
        Ok(self.engine()?.lock().dimension())
    }

    pub fn model_name(&self) -> Result<String> {
        Ok(self.engine()?.lock().model_name().to_string())
    }

    fn engine(&self) -> Result<&Mutex<Box<dyn EmbeddingEngine>>> {
        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }

        let _guard = self.init_lock.lock();
        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }

        let engine = (self.factory)().map_err(|e| {
            tracing::error!(error = %format!("{:#}", e), "Embedding model failed to load");
            AdvisorError::ModelUnavailable(format!("{:#}", e))
        })?;
        tracing::info!(
            model = engine.model_name(),
            dimension = engine.dimension(),
            "Loaded embedding model"
        );

        Ok(self.engine.get_or_init(|| Mutex::new(engine)))
    }
}

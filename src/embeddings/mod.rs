//! Embeddings module - Generate semantic embeddings for text
//!
//! Provides trait-based abstraction for embedding generation with an ONNX
//! backend and a model-free hashing backend. `EmbeddingProvider` owns the
//! one-time model load shared by every query.

mod hashing;
mod onnx;
mod provider;
mod similarity;

pub use hashing::HashingEmbedder;
pub use onnx::{verify_sha256, OnnxEmbedder};
pub use provider::EmbeddingProvider;
pub use similarity::{l2_normalize, squared_euclidean};

use anyhow::Result;

/// Trait for embedding generation engines
///
/// Implementations must be deterministic and return vectors of `dimension()`
/// length for every input. Requires Send so the provider can share one
/// engine across worker threads behind a mutex.
pub trait EmbeddingEngine: Send {
    /// Generate embedding for a single text
    fn embed(&mut self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts
    fn embed_batch(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Get embedding dimension (e.g., 384 for all-MiniLM-L6-v2)
    fn dimension(&self) -> usize;

    /// Get model name
    fn model_name(&self) -> &str;
}

//! Error taxonomy for the retrieval-and-escalation engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The embedding model could not be initialized. Fatal for the text path.
    #[error("Embedding model unavailable: {0}")]
    ModelUnavailable(String),

    /// The model is loaded but inference on a given input failed
    #[error("Embedding failed: {0}")]
    Embedding(String),

    /// `nearest` was called on an index built from zero vectors
    #[error("Similarity index is empty")]
    EmptyIndex,

    /// The knowledge base has no entries, so no match is possible
    #[error("No knowledge available to answer the query")]
    NoKnowledge,

    /// Position lookup outside the knowledge base
    #[error("Knowledge base index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    /// Image bytes could not be decoded into an RGB pixel grid
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid knowledge base: {0}")]
    InvalidKnowledge(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Index backend error: {0}")]
    Index(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

//! Retrieval module - text query to closest knowledge entry with confidence
//!
//! Public interface:
//! - `RetrievalService` owning the knowledge base, embedder and index
//! - `MatchResult` for one query's best match

mod service;

pub use service::{distance_to_confidence, MatchResult, RetrievalService};

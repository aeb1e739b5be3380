//! Confidence-gated retrieval for agricultural questions
//!
//! Text queries are embedded and matched against a fixed knowledge base;
//! image queries are classified by mean color. Both feed one escalation
//! policy that decides between an automated answer and a human expert.

pub mod advisor;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod index;
pub mod knowledge;
pub mod policy;
pub mod retrieval;
pub mod vision;

// Re-export commonly used types
pub use advisor::{Advisor, AdvisorBuilder, ImageAnswer, TextAnswer};
pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use knowledge::{KnowledgeBase, KnowledgeEntry, Recommendation};
pub use policy::{EscalationDecision, EscalationPolicy};

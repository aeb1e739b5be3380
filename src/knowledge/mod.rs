//! Knowledge base - the fixed catalog of question/answer/recommendation records
//!
//! Loaded once at startup and never mutated. Supplied to the advisor
//! explicitly so tests can swap in their own datasets.

mod builtin;
mod store;
mod types;

pub use store::KnowledgeBase;
pub use types::{KnowledgeEntry, Recommendation};

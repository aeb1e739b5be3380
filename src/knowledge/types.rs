//! Knowledge base record types
//!
//! These types are storage-agnostic: the store decides where they come from.

use serde::{Deserialize, Serialize};

/// A product or input suggested alongside an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub location: String,
    pub price: String,
}

/// One curated question/answer pair
///
/// Only `question` is embedded for retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: u64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl KnowledgeEntry {
    pub fn new(id: u64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            recommendations: Vec::new(),
        }
    }

    pub fn with_recommendation(
        mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        self.recommendations.push(Recommendation {
            name: name.into(),
            location: location.into(),
            price: price.into(),
        });
        self
    }
}

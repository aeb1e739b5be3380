//! RetrievalService - embed a query, find the closest knowledge entry, score it

use rayon::prelude::*;
use std::sync::Arc;

use crate::config::IndexBackend;
use crate::embeddings::EmbeddingProvider;
use crate::error::{AdvisorError, Result};
use crate::index::{build_index, SimilarityIndex};
use crate::knowledge::{KnowledgeBase, KnowledgeEntry};

/// Closest knowledge entry for one query
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub entry: &'a KnowledgeEntry,
    /// Squared Euclidean distance between query and entry question
    pub raw_distance: f32,
    /// `1 - raw_distance`: ordered, not calibrated, not clamped
    pub confidence: f32,
}

/// Distance to confidence transform
///
/// Monotonically decreasing in distance. Can be negative for distant
/// matches; thresholds are tuned against this exact transform.
pub fn distance_to_confidence(distance: f32) -> f32 {
    1.0 - distance
}

pub struct RetrievalService {
    knowledge: Arc<KnowledgeBase>,
    embedder: Arc<EmbeddingProvider>,
    index: Arc<dyn SimilarityIndex>,
}

impl RetrievalService {
    /// Embed every knowledge-base question and build the index over them
    ///
    /// Loads the embedding model. An empty knowledge base yields an empty
    /// index without touching the model.
    pub fn build(
        knowledge: Arc<KnowledgeBase>,
        embedder: Arc<EmbeddingProvider>,
        backend: IndexBackend,
    ) -> Result<Self> {
        let pairs = if knowledge.is_empty() {
            Vec::new()
        } else {
            let questions: Vec<String> = knowledge
                .entries()
                .iter()
                .map(|e| e.question.clone())
                .collect();
            let vectors = embedder.embed_batch(&questions)?;
            knowledge
                .entries()
                .iter()
                .map(|e| e.id)
                .zip(vectors)
                .collect()
        };

        let index = build_index(backend, pairs)?;
        Self::with_index(knowledge, embedder, Arc::from(index))
    }

    /// Use a prebuilt index; it must cover exactly the knowledge base
    pub fn with_index(
        knowledge: Arc<KnowledgeBase>,
        embedder: Arc<EmbeddingProvider>,
        index: Arc<dyn SimilarityIndex>,
    ) -> Result<Self> {
        if index.len() != knowledge.len() {
            return Err(AdvisorError::Index(format!(
                "index holds {} vectors but knowledge base has {} entries",
                index.len(),
                knowledge.len()
            )));
        }
        Ok(Self {
            knowledge,
            embedder,
            index,
        })
    }

    /// Closest knowledge entry to `query_text`
    ///
    /// No retry and no fallback answer: embedding failures and an empty
    /// knowledge base are returned to the caller.
    pub fn answer(&self, query_text: &str) -> Result<MatchResult<'_>> {
        let vector = self.embedder.embed(query_text)?;

        let matches = match self.index.nearest(&vector, 1) {
            Err(AdvisorError::EmptyIndex) => return Err(AdvisorError::NoKnowledge),
            other => other?,
        };
        let best = matches.first().ok_or(AdvisorError::NoKnowledge)?;

        let entry = self.knowledge.by_id(best.id).ok_or_else(|| {
            AdvisorError::Index(format!("index returned unknown entry id {}", best.id))
        })?;

        tracing::debug!(
            entry = entry.id,
            distance = best.distance,
            "Matched knowledge entry"
        );

        Ok(MatchResult {
            entry,
            raw_distance: best.distance,
            confidence: distance_to_confidence(best.distance),
        })
    }

    /// Answer independent queries on the rayon pool, results in input order
    pub fn answer_batch(&self, queries: &[String]) -> Vec<Result<MatchResult<'_>>> {
        queries.par_iter().map(|q| self.answer(q)).collect()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn index(&self) -> &dyn SimilarityIndex {
        self.index.as_ref()
    }
}

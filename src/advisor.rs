//! Advisor - the two entry points handed to request handlers
//!
//! `answer_text` runs retrieval then the escalation policy; `answer_image`
//! runs the heuristic classifier then the same policy. Construction is an
//! explicit step that loads the model and builds the index once.

use serde::Serialize;
use std::sync::Arc;

use crate::config::{AdvisorConfig, IndexBackend};
use crate::embeddings::EmbeddingProvider;
use crate::error::Result;
use crate::index::SimilarityIndex;
use crate::knowledge::{KnowledgeBase, Recommendation};
use crate::policy::{EscalationDecision, EscalationPolicy};
use crate::retrieval::{MatchResult, RetrievalService};
use crate::vision::{Diagnosis, ImageClassifier};

/// Outcome of a text query
///
/// `answer` and `recommendations` are only filled for `AutoAnswer`; an
/// escalated query carries the signal and scores, never the matched text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnswer {
    pub decision: EscalationDecision,
    pub confidence: f32,
    pub raw_distance: f32,
    pub matched_id: u64,
    pub matched_question: String,
    pub answer: Option<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Outcome of an image query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAnswer {
    pub category: Diagnosis,
    pub label: String,
    pub confidence: f32,
    pub decision: EscalationDecision,
    pub solution: String,
}

pub struct Advisor {
    retrieval: RetrievalService,
    policy: EscalationPolicy,
    classifier: ImageClassifier,
}

#[derive(Default)]
pub struct AdvisorBuilder {
    knowledge: Option<KnowledgeBase>,
    embedder: Option<EmbeddingProvider>,
    index: Option<Arc<dyn SimilarityIndex>>,
    backend: IndexBackend,
    policy: EscalationPolicy,
}

impl AdvisorBuilder {
    /// Knowledge base to retrieve from (default: built-in dataset)
    pub fn knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    /// Embedding provider (default: ONNX all-MiniLM-L6-v2 from the default config)
    pub fn embedder(mut self, embedder: EmbeddingProvider) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn backend(mut self, backend: IndexBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Use a prebuilt index instead of embedding the knowledge base
    pub fn index(mut self, index: Arc<dyn SimilarityIndex>) -> Self {
        self.index = Some(index);
        self
    }

    pub fn policy(mut self, policy: EscalationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<Advisor> {
        let knowledge = Arc::new(self.knowledge.unwrap_or_else(KnowledgeBase::builtin));
        let embedder = Arc::new(self.embedder.unwrap_or_else(|| {
            EmbeddingProvider::from_config(&AdvisorConfig::default().embeddings)
        }));

        let retrieval = match self.index {
            Some(index) => RetrievalService::with_index(knowledge, embedder, index)?,
            None => RetrievalService::build(knowledge, embedder, self.backend)?,
        };

        Ok(Advisor {
            retrieval,
            policy: self.policy,
            classifier: ImageClassifier::new(),
        })
    }
}

impl Advisor {
    pub fn builder() -> AdvisorBuilder {
        AdvisorBuilder::default()
    }

    /// Build everything the config describes: knowledge, model, index, policy
    pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
        let knowledge = match &config.knowledge.path {
            Some(path) => KnowledgeBase::load(path)?,
            None => KnowledgeBase::builtin(),
        };

        Self::builder()
            .knowledge(knowledge)
            .embedder(EmbeddingProvider::from_config(&config.embeddings))
            .backend(config.retrieval.backend)
            .policy(EscalationPolicy::new(config.policy.threshold))
            .build()
    }

    /// Text path: retrieve the closest entry and gate it on confidence
    pub fn answer_text(&self, query: &str) -> Result<TextAnswer> {
        let matched = self.retrieval.answer(query)?;
        Ok(self.gate(matched))
    }

    /// Text path over many independent queries, in parallel
    pub fn answer_texts(&self, queries: &[String]) -> Vec<Result<TextAnswer>> {
        self.retrieval
            .answer_batch(queries)
            .into_iter()
            .map(|r| r.map(|m| self.gate(m)))
            .collect()
    }

    /// Image path: never fails, undecodable images come back as `Error`
    pub fn answer_image(&self, image_bytes: &[u8]) -> ImageAnswer {
        let classification = self.classifier.classify(image_bytes);
        let label = classification.category.label();
        let decision = self.policy.decide(classification.confidence, label);

        let solution = match &classification.error {
            Some(err) => format!("An error occurred: {}", err),
            None => classification.category.solution().to_string(),
        };

        ImageAnswer {
            category: classification.category,
            label: label.to_string(),
            confidence: classification.confidence,
            decision,
            solution,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        self.retrieval.knowledge()
    }

    pub fn policy(&self) -> &EscalationPolicy {
        &self.policy
    }

    fn gate(&self, matched: MatchResult<'_>) -> TextAnswer {
        let entry = matched.entry;
        let decision = self.policy.decide(matched.confidence, &entry.answer);
        tracing::debug!(
            entry = entry.id,
            confidence = matched.confidence,
            ?decision,
            "Escalation decision"
        );

        let (answer, recommendations) = match decision {
            EscalationDecision::AutoAnswer => {
                (Some(entry.answer.clone()), entry.recommendations.clone())
            }
            EscalationDecision::Escalate => (None, Vec::new()),
        };

        TextAnswer {
            decision,
            confidence: matched.confidence,
            raw_distance: matched.raw_distance,
            matched_id: entry.id,
            matched_question: entry.question.clone(),
            answer,
            recommendations,
        }
    }
}

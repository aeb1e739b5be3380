//! Escalation policy - decides between an automated answer and a human expert
//!
//! Pure and total: retrieval produces a score, the policy consumes it. A
//! different policy (per-category thresholds, calibrated confidence) replaces
//! this type without touching retrieval.

use serde::Serialize;

/// Default confidence threshold, tuned against the `1 - distance` transform
pub const DEFAULT_THRESHOLD: f32 = 0.6;

/// Answers containing this marker are placeholders and always escalate
pub const UNKNOWN_MARKER: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationDecision {
    AutoAnswer,
    Escalate,
}

impl EscalationDecision {
    pub fn is_auto(self) -> bool {
        self == Self::AutoAnswer
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscalationPolicy {
    threshold: f32,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl EscalationPolicy {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// `AutoAnswer` iff `confidence >= threshold` and the answer is not a placeholder
    pub fn decide(&self, confidence: f32, answer_text: &str) -> EscalationDecision {
        if confidence >= self.threshold && !answer_text.contains(UNKNOWN_MARKER) {
            EscalationDecision::AutoAnswer
        } else {
            EscalationDecision::Escalate
        }
    }
}

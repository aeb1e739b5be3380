//! Feature-hashing embedder
//!
//! Maps each lowercase word to a fixed coordinate (FNV-1a hash modulo the
//! dimension) with a hash-derived sign, then L2-normalizes. No model files,
//! fully deterministic across runs and platforms.

use super::similarity::l2_normalize;
use super::EmbeddingEngine;
use anyhow::Result;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, &b| {
        (hash ^ b as u64).wrapping_mul(FNV_PRIME)
    })
}

impl EmbeddingEngine for HashingEmbedder {
    fn embed(&mut self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimension];
        for token in Self::tokens(text) {
            let hash = fnv1a(token.as_bytes());
            let slot = (hash % self.dimension as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[slot] += sign;
        }
        l2_normalize(&mut vector);
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        "hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deterministic() {
        let mut a = HashingEmbedder::new(64);
        let mut b = HashingEmbedder::new(64);
        assert_eq!(
            a.embed("Why are my plants wilting?").unwrap(),
            b.embed("Why are my plants wilting?").unwrap()
        );
    }

    #[test]
    fn test_constant_dimension_and_unit_norm() {
        let mut embedder = HashingEmbedder::new(32);
        for text in ["rice", "How do I care for a rice crop in the monsoon season?"] {
            let v = embedder.embed(text).unwrap();
            assert_eq!(v.len(), 32);
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert_relative_eq!(norm, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let mut embedder = HashingEmbedder::new(64);
        assert_eq!(
            embedder.embed("Neem oil!").unwrap(),
            embedder.embed("neem OIL").unwrap()
        );
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let mut embedder = HashingEmbedder::new(8);
        assert_eq!(embedder.embed("   ").unwrap(), vec![0.0; 8]);
    }
}

//! HNSW index backed by USearch
//!
//! Approximate for large collections. Over-fetches and re-sorts so the
//! ordering and tie rule match the flat backend.

use usearch::{Index, IndexOptions, MetricKind, ScalarKind};

use super::{check_query, common_dimension, sort_neighbors, Neighbor, SimilarityIndex};
use crate::error::{AdvisorError, Result};

/// Extra candidates fetched beyond `k` so ties at the cut-off resolve by id
const TIE_MARGIN: usize = 8;

pub struct HnswIndex {
    /// None when built from zero vectors (USearch rejects zero dimensions)
    index: Option<Index>,
    size: usize,
    dimension: usize,
}

impl HnswIndex {
    pub fn build(vectors: Vec<(u64, Vec<f32>)>) -> Result<Self> {
        let dimension = common_dimension(&vectors)?;
        if vectors.is_empty() {
            return Ok(Self {
                index: None,
                size: 0,
                dimension: 0,
            });
        }

        let options = IndexOptions {
            dimensions: dimension,
            metric: MetricKind::L2sq,
            quantization: ScalarKind::F32,
            ..Default::default()
        };

        let index = Index::new(&options)
            .map_err(|e| AdvisorError::Index(format!("Failed to create USearch index: {}", e)))?;
        index
            .reserve(vectors.len())
            .map_err(|e| AdvisorError::Index(format!("Failed to reserve capacity: {}", e)))?;

        for (id, vector) in &vectors {
            index
                .add(*id, vector)
                .map_err(|e| AdvisorError::Index(format!("Failed to add vector {}: {}", id, e)))?;
        }

        Ok(Self {
            index: Some(index),
            size: vectors.len(),
            dimension,
        })
    }
}

impl SimilarityIndex for HnswIndex {
    fn name(&self) -> &'static str {
        "hnsw"
    }

    fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        check_query(self, query)?;
        let index = self.index.as_ref().ok_or(AdvisorError::EmptyIndex)?;
        if k == 0 {
            return Ok(Vec::new());
        }

        let fetch = (k + TIE_MARGIN).min(self.size);
        let matches = index
            .search(query, fetch)
            .map_err(|e| AdvisorError::Index(format!("Vector search failed: {}", e)))?;

        let mut neighbors: Vec<Neighbor> = matches
            .keys
            .iter()
            .zip(matches.distances.iter())
            .map(|(&id, &distance)| Neighbor { id, distance })
            .collect();

        sort_neighbors(&mut neighbors);
        neighbors.truncate(k);
        Ok(neighbors)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

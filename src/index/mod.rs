//! Similarity index - nearest-neighbor search over knowledge-base embeddings
//!
//! Public interface:
//! - `SimilarityIndex` trait: the seam where a scalable index replaces the
//!   exact scan without touching retrieval
//! - `build_index` for constructing a backend from (id, vector) pairs
//!
//! Distances are squared Euclidean (L2²). Results are ascending by distance,
//! ties broken by lowest entry id.

mod flat;
mod hnsw;

pub use flat::FlatIndex;
pub use hnsw::HnswIndex;

use crate::config::IndexBackend;
use crate::error::{AdvisorError, Result};

/// One nearest-neighbor hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Knowledge entry id
    pub id: u64,
    /// Squared Euclidean distance to the query
    pub distance: f32,
}

/// Read-only nearest-neighbor index
///
/// Built once, then shared across query threads without locking.
pub trait SimilarityIndex: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Up to `k` closest entries, ascending by distance then id
    ///
    /// Fails with `EmptyIndex` when built from zero vectors.
    fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimensionality of indexed vectors (0 when empty)
    fn dimension(&self) -> usize;
}

/// Build an index of the requested backend from `(entry id, vector)` pairs
pub fn build_index(
    backend: IndexBackend,
    vectors: Vec<(u64, Vec<f32>)>,
) -> Result<Box<dyn SimilarityIndex>> {
    let index: Box<dyn SimilarityIndex> = match backend {
        IndexBackend::Flat => Box::new(FlatIndex::build(vectors)?),
        IndexBackend::Hnsw => Box::new(HnswIndex::build(vectors)?),
    };
    tracing::info!(
        backend = index.name(),
        size = index.len(),
        dimension = index.dimension(),
        "Built similarity index"
    );
    Ok(index)
}

/// Shared dimensionality of all vectors, rejecting mixed lengths
fn common_dimension(vectors: &[(u64, Vec<f32>)]) -> Result<usize> {
    let Some((_, first)) = vectors.first() else {
        return Ok(0);
    };
    let expected = first.len();
    match vectors.iter().find(|(_, v)| v.len() != expected) {
        Some((_, v)) => Err(AdvisorError::DimensionMismatch {
            expected,
            actual: v.len(),
        }),
        None => Ok(expected),
    }
}

fn check_query(index: &dyn SimilarityIndex, query: &[f32]) -> Result<()> {
    if index.is_empty() {
        return Err(AdvisorError::EmptyIndex);
    }
    if query.len() != index.dimension() {
        return Err(AdvisorError::DimensionMismatch {
            expected: index.dimension(),
            actual: query.len(),
        });
    }
    Ok(())
}

/// Ascending by distance, ties by lowest id
fn sort_neighbors(neighbors: &mut [Neighbor]) {
    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_dimensions_rejected() {
        let vectors = vec![(1, vec![0.0, 1.0]), (2, vec![0.0, 1.0, 2.0])];
        for backend in [IndexBackend::Flat, IndexBackend::Hnsw] {
            assert!(matches!(
                build_index(backend, vectors.clone()),
                Err(AdvisorError::DimensionMismatch {
                    expected: 2,
                    actual: 3
                })
            ));
        }
    }

    #[test]
    fn test_sort_neighbors_tie_break() {
        let mut neighbors = vec![
            Neighbor { id: 9, distance: 0.5 },
            Neighbor { id: 3, distance: 0.5 },
            Neighbor { id: 7, distance: 0.1 },
        ];
        sort_neighbors(&mut neighbors);
        let ids: Vec<u64> = neighbors.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![7, 3, 9]);
    }
}

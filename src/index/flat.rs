//! Exact nearest-neighbor search by linear scan
//!
//! For knowledge bases of tens of entries a scan is exact and fast enough.

use super::{check_query, common_dimension, sort_neighbors, Neighbor, SimilarityIndex};
use crate::embeddings::squared_euclidean;
use crate::error::Result;

pub struct FlatIndex {
    ids: Vec<u64>,
    /// Row-major, `ids.len() * dimension` values
    data: Vec<f32>,
    dimension: usize,
}

impl FlatIndex {
    pub fn build(vectors: Vec<(u64, Vec<f32>)>) -> Result<Self> {
        let dimension = common_dimension(&vectors)?;
        let mut ids = Vec::with_capacity(vectors.len());
        let mut data = Vec::with_capacity(vectors.len() * dimension);
        for (id, vector) in vectors {
            ids.push(id);
            data.extend_from_slice(&vector);
        }
        Ok(Self {
            ids,
            data,
            dimension,
        })
    }

    fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dimension..(i + 1) * self.dimension]
    }
}

impl SimilarityIndex for FlatIndex {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn nearest(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        check_query(self, query)?;

        let mut neighbors: Vec<Neighbor> = self
            .ids
            .iter()
            .enumerate()
            .map(|(i, &id)| Neighbor {
                id,
                distance: squared_euclidean(query, self.row(i)),
            })
            .collect();

        sort_neighbors(&mut neighbors);
        neighbors.truncate(k);
        Ok(neighbors)
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use approx::assert_relative_eq;

    /// Small deterministic pseudo-random vectors (LCG)
    fn sample_vectors(n: usize, dim: usize, seed: u64) -> Vec<(u64, Vec<f32>)> {
        let mut state = seed;
        let mut next = move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
        };
        (0..n)
            .map(|i| (i as u64 + 1, (0..dim).map(|_| next()).collect()))
            .collect()
    }

    #[test]
    fn test_nearest_matches_brute_force() {
        let vectors = sample_vectors(40, 8, 7);
        let index = FlatIndex::build(vectors.clone()).unwrap();

        for (_, query) in sample_vectors(20, 8, 99) {
            let hits = index.nearest(&query, 1).unwrap();
            assert_eq!(hits.len(), 1);

            let oracle = vectors
                .iter()
                .map(|(_, v)| squared_euclidean(&query, v))
                .fold(f32::INFINITY, f32::min);
            assert_relative_eq!(hits[0].distance, oracle, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_self_query_is_zero_distance() {
        let vectors = sample_vectors(10, 4, 3);
        let index = FlatIndex::build(vectors.clone()).unwrap();
        let (id, v) = &vectors[6];
        let hits = index.nearest(v, 1).unwrap();
        assert_eq!(hits[0].id, *id);
        assert_eq!(hits[0].distance, 0.0);
    }

    #[test]
    fn test_k_results_sorted_and_bounded() {
        let index = FlatIndex::build(sample_vectors(5, 3, 1)).unwrap();
        let hits = index.nearest(&[0.0, 0.0, 0.0], 3).unwrap();
        assert_eq!(hits.len(), 3);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));

        assert_eq!(index.nearest(&[0.0, 0.0, 0.0], 50).unwrap().len(), 5);
        assert!(index.nearest(&[0.0, 0.0, 0.0], 0).unwrap().is_empty());
    }

    #[test]
    fn test_ties_broken_by_lowest_id() {
        let index = FlatIndex::build(vec![
            (12, vec![1.0, 0.0]),
            (4, vec![-1.0, 0.0]),
            (8, vec![0.0, 1.0]),
        ])
        .unwrap();
        let hits = index.nearest(&[0.0, 0.0], 3).unwrap();
        let ids: Vec<u64> = hits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![4, 8, 12]);
    }

    #[test]
    fn test_empty_index() {
        let index = FlatIndex::build(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(matches!(
            index.nearest(&[1.0], 1),
            Err(AdvisorError::EmptyIndex)
        ));
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let index = FlatIndex::build(sample_vectors(3, 4, 5)).unwrap();
        assert!(matches!(
            index.nearest(&[1.0, 2.0], 1),
            Err(AdvisorError::DimensionMismatch {
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let vectors = sample_vectors(25, 6, 11);
        let a = FlatIndex::build(vectors.clone()).unwrap();
        let b = FlatIndex::build(vectors).unwrap();
        for (_, query) in sample_vectors(10, 6, 12) {
            assert_eq!(a.nearest(&query, 5).unwrap(), b.nearest(&query, 5).unwrap());
        }
    }
}

//! Distance metrics and vector helpers for embeddings

/// Compute squared Euclidean (L2²) distance between two embedding vectors
///
/// Returns a value >= 0.0; smaller means more similar.
///
/// # Panics
/// Panics if vectors have different dimensions
pub fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(
        a.len(),
        b.len(),
        "Vectors must have same dimension: {} vs {}",
        a.len(),
        b.len()
    );

    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// L2 normalize a vector in place
///
/// Zero vectors are left untouched.
pub fn l2_normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    vec.iter_mut().for_each(|x| *x /= norm);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_squared_euclidean_identical() {
        let a = vec![1.0, 2.0, 3.0];
        assert_relative_eq!(squared_euclidean(&a, &a), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_squared_euclidean_not_rooted() {
        let a = vec![0.0, 0.0];
        let b = vec![3.0, 4.0];
        assert_relative_eq!(squared_euclidean(&a, &b), 25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_l2_normalize() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert_relative_eq!(v[0], 0.6, epsilon = 1e-6);
        assert_relative_eq!(v[1], 0.8, epsilon = 1e-6);

        let mut zero = vec![0.0, 0.0];
        l2_normalize(&mut zero);
        assert_eq!(zero, vec![0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "Vectors must have same dimension")]
    fn test_squared_euclidean_different_dimensions() {
        squared_euclidean(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
    }
}

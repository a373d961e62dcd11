//! Scoring primitives shared by the ranker and its callers.
//!
//! Scores are raw dot products. Nothing here normalizes implicitly; callers
//! that want cosine similarity run [`normalize`] on every vector first.

use std::cmp::Ordering;

/// Dot product accumulated left to right.
///
/// One multiply and one add per index, in index order, with no fused or
/// reordered reduction, so the result is bit-identical for identical inputs
/// on any platform. Lengths are assumed equal; the ranker checks this up front.
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let mut sum = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        sum += x * y;
    }
    sum
}

/// Scale a vector to unit length. A zero vector is returned unchanged.
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let norm = dot_product(v, v).sqrt();
    if norm == 0.0 {
        return v.to_vec();
    }
    v.iter().map(|x| x / norm).collect()
}

/// Total order on scores: numeric order, NaN below every number.
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

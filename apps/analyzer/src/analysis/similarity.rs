//! Similarity Scorer: cosine of two L2-normalized weight vectors.

use crate::analysis::weighting::WeightVector;

/// Cosine similarity in [0, 1]. Zero when either vector is all-zero.
pub fn cosine(a: &WeightVector, b: &WeightVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    let dot: f64 = a
        .weights()
        .iter()
        .zip(b.weights())
        .map(|(x, y)| x * y)
        .sum();
    dot.clamp(0.0, 1.0)
}

/// Converts a cosine into the reported 0-100 score, rounded to two decimals.
pub fn to_percent(cosine: f64) -> f64 {
    (cosine * 100.0 * 100.0).round() / 100.0
}

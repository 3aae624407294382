//! Keyword Ranker.

use crate::analysis::weighting::{Vocabulary, WeightVector};

/// Returns up to `top_n` terms with strictly positive weight, heaviest first.
/// Equal weights keep vocabulary order, so lower indices win ties.
pub fn top_keywords(vector: &WeightVector, vocabulary: &Vocabulary, top_n: usize) -> Vec<String> {
    let mut ranked: Vec<(usize, f64)> = vector
        .weights()
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, w)| *w > 0.0)
        .collect();

    // stable sort: ties stay in index order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(top_n)
        .filter_map(|(i, _)| vocabulary.term(i).map(str::to_string))
        .collect()
}

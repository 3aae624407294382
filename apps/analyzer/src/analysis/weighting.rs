//! Term Weighter: TF-IDF over a corpus of exactly two documents.
//!
//! Terms are the unigrams and adjacent-pair bigrams left after stop-word and
//! short-token removal. For each term:
//!
//! ```text
//! tf  = count(t, d) / total terms in d
//! idf = ln((1 + 2) / (1 + df(t))) + 1
//! w   = tf * idf
//! ```
//!
//! and each document vector is L2-normalized.

use indexmap::IndexSet;

use crate::analysis::stop_words::is_stop_word;

const CORPUS_SIZE: f64 = 2.0;

/// Unique terms across both documents, indexed in first-seen order
/// (resume terms first, then JD terms).
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(String::as_str)
    }

    #[cfg(test)]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    fn insert(&mut self, term: &str) -> usize {
        match self.terms.get_index_of(term) {
            Some(index) => index,
            None => self.terms.insert_full(term.to_string()).0,
        }
    }
}

/// Non-negative, L2-normalized weights over a Vocabulary's index space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn weights(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0.0)
    }
}

/// Output of weighing one resume/JD pair. Both vectors share `vocabulary`.
#[derive(Debug, Clone)]
pub struct WeightedPair {
    pub vocabulary: Vocabulary,
    pub resume: WeightVector,
    pub jd: WeightVector,
}

/// Splits normalized text into unigram and bigram terms.
///
/// All unigrams come first, then bigrams, so vocabulary order follows
/// reading order within each n-gram size.
pub fn extract_terms(normalized: &str, min_token_length: usize) -> Vec<String> {
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= min_token_length && !is_stop_word(t))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    terms.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

/// Builds the shared vocabulary and both weight vectors.
pub fn weigh(resume: &str, jd: &str, min_token_length: usize) -> WeightedPair {
    let resume_terms = extract_terms(resume, min_token_length);
    let jd_terms = extract_terms(jd, min_token_length);

    let mut vocabulary = Vocabulary::default();
    let resume_indices: Vec<usize> = resume_terms.iter().map(|t| vocabulary.insert(t)).collect();
    let jd_indices: Vec<usize> = jd_terms.iter().map(|t| vocabulary.insert(t)).collect();

    let resume_counts = count(&resume_indices, vocabulary.len());
    let jd_counts = count(&jd_indices, vocabulary.len());

    let idf: Vec<f64> = resume_counts
        .iter()
        .zip(&jd_counts)
        .map(|(&a, &b)| {
            let df = (a > 0) as u8 as f64 + (b > 0) as u8 as f64;
            ((1.0 + CORPUS_SIZE) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    WeightedPair {
        resume: weight_vector(&resume_counts, &idf),
        jd: weight_vector(&jd_counts, &idf),
        vocabulary,
    }
}

fn count(indices: &[usize], len: usize) -> Vec<usize> {
    let mut counts = vec![0; len];
    for &i in indices {
        counts[i] += 1;
    }
    counts
}

fn weight_vector(counts: &[usize], idf: &[f64]) -> WeightVector {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return WeightVector(vec![0.0; counts.len()]);
    }

    let mut weights: Vec<f64> = counts
        .iter()
        .zip(idf)
        .map(|(&c, &idf)| (c as f64 / total as f64) * idf)
        .collect();

    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        weights.iter_mut().for_each(|w| *w /= norm);
    }
    WeightVector(weights)
}

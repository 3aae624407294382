// Resume / JD analysis: normalization, TF-IDF weighting, keyword ranking,
// cosine scoring and gap suggestions. Everything here is request-scoped.

pub mod handlers;
pub mod normalizer;
pub mod ranking;
pub mod scorer;
pub mod similarity;
pub mod stop_words;
pub mod suggestions;
pub mod weighting;

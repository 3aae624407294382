//! Match scoring: pluggable, trait-based scorer for one resume/JD pair.
//!
//! Default: `TfIdfScorer` (pure-Rust, deterministic, request-scoped state).
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup.

use serde::Serialize;

use crate::analysis::normalizer::{normalize, word_count};
use crate::analysis::ranking::top_keywords;
use crate::analysis::similarity::{cosine, to_percent};
use crate::analysis::suggestions::{build_suggestions, missing_keywords, LengthThresholds};
use crate::analysis::weighting::weigh;

/// Immutable scoring knobs, built once from `Config`.
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub default_top_n: usize,
    pub max_top_n: usize,
    pub short_resume_words: usize,
    pub long_resume_words: usize,
    pub min_token_length: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_top_n: 20,
            max_top_n: 100,
            short_resume_words: 150,
            long_resume_words: 900,
            min_token_length: 1,
        }
    }
}

/// Full analysis returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub resume_keywords: Vec<String>,
    pub jd_keywords: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: f64, // 0 – 100, two decimals
    pub suggestions: Vec<String>,
}

/// The match scorer trait. Implement this to swap backends without touching
/// the handler.
pub trait MatchScorer: Send + Sync {
    /// Scores a resume against a JD. `top_n` of `None` uses the scorer's default.
    fn analyze(&self, resume_text: &str, jd_text: &str, top_n: Option<usize>) -> AnalysisResult;
}

/// TF-IDF keyword scorer over the two submitted documents.
pub struct TfIdfScorer {
    settings: AnalysisSettings,
}

impl TfIdfScorer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self { settings }
    }
}

impl MatchScorer for TfIdfScorer {
    fn analyze(&self, resume_text: &str, jd_text: &str, top_n: Option<usize>) -> AnalysisResult {
        let top_n = top_n.unwrap_or(self.settings.default_top_n);

        let resume = normalize(Some(resume_text));
        let jd = normalize(Some(jd_text));

        let pair = weigh(&resume, &jd, self.settings.min_token_length);
        if pair.vocabulary.is_empty() {
            tracing::debug!("No terms left after stop-word removal; scoring as zero");
        }
        let resume_keywords = top_keywords(&pair.resume, &pair.vocabulary, top_n);
        let jd_keywords = top_keywords(&pair.jd, &pair.vocabulary, top_n);
        let score = to_percent(cosine(&pair.resume, &pair.jd));

        let missing_skills = missing_keywords(&resume_keywords, &jd_keywords);
        let suggestions = build_suggestions(
            &missing_skills,
            &resume,
            LengthThresholds {
                short: self.settings.short_resume_words,
                long: self.settings.long_resume_words,
            },
        );

        tracing::info!(
            resume_words = word_count(&resume),
            jd_words = word_count(&jd),
            vocabulary = pair.vocabulary.len(),
            dimensions = pair.resume.len(),
            score,
            "Scored resume against JD"
        );
        tracing::debug!(?resume_keywords, ?jd_keywords, ?missing_skills, "Keyword lists");

        AnalysisResult {
            resume_keywords,
            jd_keywords,
            missing_skills,
            score,
            suggestions,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn scorer() -> TfIdfScorer {
        TfIdfScorer::new(AnalysisSettings::default())
    }

    fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
        let mut it = haystack.iter();
        needle.iter().all(|n| it.any(|h| h == n))
    }

    #[test]
    fn test_python_flask_scenario() {
        let result = scorer().analyze(
            "Experienced Python developer with Flask and SQL",
            "Looking for Python developer with Flask experience",
            None,
        );
        for kw in ["python", "developer", "flask"] {
            assert!(result.resume_keywords.iter().any(|k| k == kw), "{kw} missing from resume");
            assert!(result.jd_keywords.iter().any(|k| k == kw), "{kw} missing from JD");
            assert!(!result.missing_skills.iter().any(|k| k == kw), "{kw} reported missing");
        }
        // 5 shared of 9 terms per side, shared idf 1, unique idf 1 + ln 1.5
        assert_eq!(result.score, 38.76);
        assert!(result.suggestions[1].contains("short"));
    }

    #[test]
    fn test_unrelated_scenario() {
        let result = scorer().analyze("zzz qqq xyz", "completely unrelated terms here", None);
        assert_eq!(result.score, 0.0);
        assert!(!result.jd_keywords.is_empty());
        assert_eq!(result.missing_skills, result.jd_keywords);
    }

    #[test]
    fn test_identical_text_scores_100() {
        let text = "Senior Rust engineer building distributed systems with Tokio and Kafka";
        let result = scorer().analyze(text, text, None);
        assert_eq!(result.score, 100.0);
        assert!(result.missing_skills.is_empty());
        assert!(result.suggestions[0].contains("already contains"));
    }

    #[test]
    fn test_identical_after_normalization_scores_100() {
        let result = scorer().analyze("RUST, Tokio!\nKafka", "rust tokio kafka", None);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_stop_words_only_scores_zero() {
        let result = scorer().analyze("the and of", "with for the", None);
        assert_eq!(result.score, 0.0);
        assert!(result.resume_keywords.is_empty());
        assert!(result.jd_keywords.is_empty());
        assert!(!result.suggestions.is_empty());
    }

    #[test]
    fn test_top_n_override_limits_lists() {
        let resume = "rust tokio axum serde kafka postgres redis docker kubernetes terraform";
        let jd = "go grpc kafka postgres aws lambda dynamodb docker helm terraform";
        let result = scorer().analyze(resume, jd, Some(3));
        assert_eq!(result.resume_keywords.len(), 3);
        assert_eq!(result.jd_keywords.len(), 3);
    }

    #[test]
    fn test_invariants_hold_across_inputs() {
        let cases = [
            ("rust rust rust", "rust"),
            ("python django rest api", "java spring rest api microservices"),
            ("a b c d e f", "g h i j"),
            ("Data engineer: Spark, Airflow, SQL", "Analytics engineer: dbt, SQL, Airflow"),
        ];
        for (resume, jd) in cases {
            let result = scorer().analyze(resume, jd, Some(5));
            assert!((0.0..=100.0).contains(&result.score));
            assert!(result.resume_keywords.len() <= 5);
            assert!(result.jd_keywords.len() <= 5);
            let unique: HashSet<&String> = result.jd_keywords.iter().collect();
            assert_eq!(unique.len(), result.jd_keywords.len());
            assert!(is_subsequence(&result.missing_skills, &result.jd_keywords));
            assert!(result
                .missing_skills
                .iter()
                .all(|m| !result.resume_keywords.contains(m)));
            assert!(!result.suggestions.is_empty());
        }
    }

    #[test]
    fn test_result_serializes_with_wire_names() {
        let result = scorer().analyze("rust", "rust", None);
        let json = serde_json::to_value(&result).unwrap();
        for key in ["resume_keywords", "jd_keywords", "missing_skills", "score", "suggestions"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}

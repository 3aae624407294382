//! Gap & Suggestion Engine: JD keywords the resume lacks, plus length advice.

use crate::analysis::normalizer::word_count;

/// Resume length bounds, in normalized words.
#[derive(Debug, Clone, Copy)]
pub struct LengthThresholds {
    pub short: usize,
    pub long: usize,
}

/// JD keywords absent from the resume keyword list, in JD order.
pub fn missing_keywords(resume_keywords: &[String], jd_keywords: &[String]) -> Vec<String> {
    jd_keywords
        .iter()
        .filter(|k| !resume_keywords.contains(k))
        .cloned()
        .collect()
}

/// Builds human-readable suggestions. Always returns at least one.
pub fn build_suggestions(
    missing: &[String],
    normalized_resume: &str,
    thresholds: LengthThresholds,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if missing.is_empty() {
        suggestions.push("Your resume already contains many top JD keywords.".to_string());
    } else {
        suggestions.push(format!(
            "Consider adding/emphasizing these keywords from the JD: {}",
            missing.join(", ")
        ));
    }

    let words = word_count(normalized_resume);
    if words < thresholds.short {
        suggestions.push(
            "Resume appears short: aim for one strong page with 1-2 achievements per role."
                .to_string(),
        );
    } else if words > thresholds.long {
        suggestions.push(
            "Resume seems very long: try to be concise and focus on relevant experiences."
                .to_string(),
        );
    }

    suggestions
}

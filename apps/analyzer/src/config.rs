use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::analysis::scorer::AnalysisSettings;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub default_top_n: usize,
    pub max_top_n: usize,
    pub short_resume_words: usize,
    pub long_resume_words: usize,
    pub min_token_length: usize,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8000)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            default_top_n: parse_or(&lookup, "DEFAULT_TOP_N", 20)?,
            max_top_n: parse_or(&lookup, "MAX_TOP_N", 100)?,
            short_resume_words: parse_or(&lookup, "SHORT_RESUME_WORDS", 150)?,
            long_resume_words: parse_or(&lookup, "LONG_RESUME_WORDS", 900)?,
            min_token_length: parse_or(&lookup, "MIN_TOKEN_LENGTH", 1)?,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        };

        ensure!(config.default_top_n > 0, "DEFAULT_TOP_N must be at least 1");
        ensure!(
            config.default_top_n <= config.max_top_n,
            "DEFAULT_TOP_N ({}) must not exceed MAX_TOP_N ({})",
            config.default_top_n,
            config.max_top_n
        );
        ensure!(
            config.min_token_length > 0,
            "MIN_TOKEN_LENGTH must be at least 1"
        );
        ensure!(
            config.short_resume_words <= config.long_resume_words,
            "SHORT_RESUME_WORDS ({}) must not exceed LONG_RESUME_WORDS ({})",
            config.short_resume_words,
            config.long_resume_words
        );

        Ok(config)
    }

    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            default_top_n: self.default_top_n,
            max_top_n: self.max_top_n,
            short_resume_words: self.short_resume_words,
            long_resume_words: self.long_resume_words,
            min_token_length: self.min_token_length,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.default_top_n, 20);
        assert_eq!(config.max_top_n, 100);
        assert_eq!(config.short_resume_words, 150);
        assert_eq!(config.long_resume_words, 900);
        assert_eq!(config.min_token_length, 1);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = config_from(&[("PORT", "9090"), ("DEFAULT_TOP_N", " 10 ")]).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.default_top_n, 10);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_top_n_is_rejected() {
        assert!(config_from(&[("DEFAULT_TOP_N", "0")]).is_err());
    }

    #[test]
    fn test_default_top_n_above_max_is_rejected() {
        assert!(config_from(&[("DEFAULT_TOP_N", "50"), ("MAX_TOP_N", "10")]).is_err());
    }

    #[test]
    fn test_inverted_length_thresholds_are_rejected() {
        assert!(config_from(&[("SHORT_RESUME_WORDS", "1000")]).is_err());
    }

    #[test]
    fn test_analysis_settings_mirror_config() {
        let config = config_from(&[("MIN_TOKEN_LENGTH", "2")]).unwrap();
        let settings = config.analysis_settings();
        assert_eq!(settings.default_top_n, 20);
        assert_eq!(settings.min_token_length, 2);
        assert_eq!(settings.long_resume_words, 900);
    }
}

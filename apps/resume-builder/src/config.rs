use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use crate::preview::PreviewFormat;

/// Session configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub preview_format: PreviewFormat,
    /// Print the preview after every edit that commits.
    pub auto_preview: bool,
    /// Pins "today" for date rules. Defaults to the local date.
    pub today: Option<NaiveDate>,
    pub prompt: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let preview_format = match lookup("RESUME_PREVIEW_FORMAT") {
            Some(value) => value
                .parse::<PreviewFormat>()
                .context("RESUME_PREVIEW_FORMAT must be text, html or json")?,
            None => PreviewFormat::default(),
        };
        let auto_preview = match lookup("RESUME_AUTO_PREVIEW") {
            Some(value) => parse_bool(&value).context("RESUME_AUTO_PREVIEW must be true or false")?,
            None => false,
        };
        let today = lookup("RESUME_TODAY")
            .map(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d"))
            .transpose()
            .context("RESUME_TODAY must be a YYYY-MM-DD date")?;

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            preview_format,
            auto_preview,
            today,
            prompt: lookup("RESUME_PROMPT").unwrap_or_else(|| "resume> ".to_string()),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.preview_format, PreviewFormat::Text);
        assert!(!config.auto_preview);
        assert_eq!(config.today, None);
        assert_eq!(config.prompt, "resume> ");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("RESUME_PREVIEW_FORMAT", "html"),
            ("RESUME_AUTO_PREVIEW", "yes"),
            ("RESUME_TODAY", "2025-03-15"),
            ("RESUME_PROMPT", "> "),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.preview_format, PreviewFormat::Html);
        assert!(config.auto_preview);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 3, 15));
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_malformed_values_fail() {
        assert!(config(&[("RESUME_PREVIEW_FORMAT", "pdf")]).is_err());
        assert!(config(&[("RESUME_AUTO_PREVIEW", "sometimes")]).is_err());
        let err = config(&[("RESUME_TODAY", "15/03/2025")]).unwrap_err();
        assert!(err.to_string().contains("RESUME_TODAY"));
    }
}

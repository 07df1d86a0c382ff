// src/config.rs
//! Startup configuration, loaded once and passed by reference into components

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

/// Job-search provider settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    pub host: String,
    pub page: u32,
    pub num_pages: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://jsearch.p.rapidapi.com".to_string(),
            host: "jsearch.p.rapidapi.com".to_string(),
            page: 1,
            num_pages: 1,
        }
    }
}

/// Generative-model provider settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub endpoint: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchConfig,
    pub model: ModelConfig,
    pub resume_path: PathBuf,
    pub output_path: PathBuf,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            model: ModelConfig::default(),
            resume_path: PathBuf::from("master_resume.md"),
            output_path: PathBuf::from("out"),
            timeout_seconds: 60,
        }
    }
}

impl Settings {
    /// Load settings from config.yaml in the current directory, falling back
    /// to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            info!("config.yaml not found, using default settings");
            return Ok(Self::default());
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let settings: Settings =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        info!("Loaded settings from {}", config_path.display());
        Ok(settings)
    }

    /// Job-search API key, validated at the call boundary rather than
    /// discovered mid-request.
    pub fn search_api_key() -> Result<String> {
        std::env::var("JSEARCH_API_KEY")
            .map_err(|_| anyhow::anyhow!("JSEARCH_API_KEY environment variable not set"))
    }

    /// Generative-model API key.
    pub fn model_api_key() -> Result<String> {
        std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable not set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_providers() {
        let settings = Settings::default();
        assert_eq!(settings.search.endpoint, "https://jsearch.p.rapidapi.com");
        assert_eq!(settings.search.host, "jsearch.p.rapidapi.com");
        assert_eq!(settings.model.name, "gemini-2.5-flash");
        assert_eq!(settings.resume_path, PathBuf::from("master_resume.md"));
        assert_eq!(settings.timeout_seconds, 60);
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_missing_fields() {
        let yaml = r#"
model:
  name: gemini-2.0-pro
resume_path: cv/master.md
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.model.name, "gemini-2.0-pro");
        assert_eq!(
            settings.model.endpoint,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(settings.resume_path, PathBuf::from("cv/master.md"));
        assert_eq!(settings.search.page, 1);
        assert_eq!(settings.search.num_pages, 1);
    }
}

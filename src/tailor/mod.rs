// src/tailor/mod.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;

use crate::config::Settings;
use crate::error::TailorError;

/// Everything the tailor needs to know about one posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
}

pub struct ResumeTailor {
    model: GeminiClient,
    resume_path: PathBuf,
}

impl ResumeTailor {
    pub fn new(settings: &Settings, api_key: String) -> Result<Self> {
        let model = GeminiClient::new(
            settings.model.endpoint.clone(),
            settings.model.name.clone(),
            api_key,
            settings.timeout_seconds,
        )?;

        Ok(Self {
            model,
            resume_path: settings.resume_path.clone(),
        })
    }

    pub fn with_resume_path(mut self, path: PathBuf) -> Self {
        self.resume_path = path;
        self
    }

    /// Rewrite the master resume so it emphasizes experience relevant to
    /// one posting. The resume is read fresh on every call; a read failure
    /// aborts before any model traffic.
    pub async fn tailor(&self, request: &TailoringRequest) -> Result<String, TailorError> {
        info!(
            "Tailoring resume for {} at {}",
            request.job_title, request.company_name
        );

        let master_resume = tokio::fs::read_to_string(&self.resume_path)
            .await
            .map_err(|source| TailorError::Resume {
                path: self.resume_path.clone(),
                source,
            })?;

        let prompt = prompt::build_prompt(
            &request.job_title,
            &request.company_name,
            &request.job_description,
            &master_resume,
        );

        let tailored = self.model.generate(&prompt).await?;

        info!("Successfully tailored resume for {}", request.company_name);
        Ok(tailored)
    }
}

// src/jobs/fetcher.rs
//! Job-search provider client

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use super::types::{JobListing, SearchResponse};
use crate::config::SearchConfig;
use crate::error::FetchError;

const SEARCH_ENDPOINT: &str = "/search";

pub struct JobFetcher {
    client: Client,
    endpoint: String,
    host: String,
    api_key: String,
    page: u32,
    num_pages: u32,
}

impl JobFetcher {
    /// Create a new fetcher with the provider settings and API key.
    pub fn new(config: &SearchConfig, api_key: String, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            host: config.host.clone(),
            api_key,
            page: config.page,
            num_pages: config.num_pages,
        })
    }

    /// Fetch one page of postings matching `query` in `location`.
    ///
    /// `Ok` with an empty vec means the provider genuinely found nothing;
    /// transport and provider failures surface as `Err` so callers can
    /// tell the two apart.
    pub async fn fetch(&self, query: &str, location: &str) -> Result<Vec<JobListing>, FetchError> {
        let phrase = format!("{} in {}", query, location);
        let url = format!("{}{}", self.endpoint, SEARCH_ENDPOINT);

        info!("Searching jobs: {}", phrase);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", phrase),
                ("page", self.page.to_string()),
                ("num_pages", self.num_pages.to_string()),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Provider { status, body });
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        let listings: Vec<JobListing> = search.data.into_iter().map(JobListing::from).collect();

        info!("Found {} job openings", listings.len());
        Ok(listings)
    }
}

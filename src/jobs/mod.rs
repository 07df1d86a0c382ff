// src/jobs/mod.rs

pub mod fetcher;
pub mod types;

pub use fetcher::JobFetcher;
pub use types::JobListing;

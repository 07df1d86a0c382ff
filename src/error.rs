// src/error.rs
//! Error taxonomy for the two external-call wrappers.
//!
//! "No results" is an `Ok` value, never an error; these enums only cover
//! the ways a call can actually fail, so callers can tell an empty search
//! from a dead provider.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("job search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("job search provider returned status {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode job search response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum TailorError {
    #[error("failed to read master resume {}: {source}", path.display())]
    Resume {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model provider returned status {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode model response: {0}")]
    Decode(String),

    #[error("model returned no completion text")]
    EmptyCompletion,
}

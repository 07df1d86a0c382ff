pub mod cli;
pub mod config;
pub mod error;
pub mod jobs;
pub mod tailor;
pub mod utils;

pub use config::Settings;
pub use error::{FetchError, TailorError};
pub use jobs::{JobFetcher, JobListing};
pub use tailor::{ResumeTailor, TailoringRequest};

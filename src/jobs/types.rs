// src/jobs/types.rs
use serde::{Deserialize, Serialize};

/// One normalized job posting from the search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub apply_link: String,
    pub description: String,
    pub is_remote: bool,
}

// Wire format of the search provider's response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawJob>,
}

// Raw provider record. The provider omits fields freely, so a sparse
// record must not fail the whole page.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawJob {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_description: Option<String>,
    pub job_is_remote: Option<bool>,
}

impl From<RawJob> for JobListing {
    fn from(raw: RawJob) -> Self {
        Self {
            id: raw.job_id.unwrap_or_default(),
            title: raw.job_title.unwrap_or_default(),
            company: raw.employer_name.unwrap_or_default(),
            apply_link: raw.job_apply_link.unwrap_or_default(),
            description: raw.job_description.unwrap_or_default(),
            is_remote: raw.job_is_remote.unwrap_or(false),
        }
    }
}

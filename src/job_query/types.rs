// src/job_query/types.rs
use thiserror::Error;

/// Label used for any licensed or certified posting type
pub const LICENSED_LABEL: &str = "Licensed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub job_type: String,
    pub job_name: String,
}

impl JobRecord {
    pub fn new(job_type: String, job_name: String, normalize_type: bool) -> Self {
        let job_type = if normalize_type {
            normalize_job_type(&job_type)
        } else {
            job_type
        };
        Self { job_type, job_name }
    }
}

/// Collapse "Certified ..." and "Licensed ..." types into one label
pub fn normalize_job_type(job_type: &str) -> String {
    if job_type.contains("Certified") || job_type.contains(LICENSED_LABEL) {
        LICENSED_LABEL.to_string()
    } else {
        job_type.to_string()
    }
}

/// Raw page body for one applicant type code
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub applicant_type_code: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("fetch task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

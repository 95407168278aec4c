// src/config.rs
use clap::ValueEnum;

/// Applicant type code for licensed/certified postings
pub const LICENSED_APP_TYPE: &str = "00000001";
/// Applicant type code for support postings
pub const SUPPORT_APP_TYPE: &str = "00000002";
/// Company identifier the postings site expects
pub const COMPANY_ID: &str = "00009961";

pub const APPLICATION_TYPE_KEY: &str = "APPLICATION_TYPE_ID";
pub const COMPANY_ID_KEY: &str = "COMPANY_ID";

/// Which applicant categories to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ApplicantCategory {
    #[default]
    All,
    Licensed,
    Support,
}

impl ApplicantCategory {
    pub fn codes(self) -> Vec<String> {
        let codes: &[&str] = match self {
            ApplicantCategory::All => &[LICENSED_APP_TYPE, SUPPORT_APP_TYPE],
            ApplicantCategory::Licensed => &[LICENSED_APP_TYPE],
            ApplicantCategory::Support => &[SUPPORT_APP_TYPE],
        };
        codes.iter().map(|c| c.to_string()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub url: String,
    pub company_id: String,
    pub applicant_type_codes: Vec<String>,
    pub location: String,
    pub job_title: Option<String>,
    pub normalize_types: bool,
}

impl QueryParameters {
    pub fn new(url: &str, location: &str) -> Self {
        Self {
            url: url.to_string(),
            company_id: COMPANY_ID.to_string(),
            applicant_type_codes: ApplicantCategory::All.codes(),
            location: location.to_string(),
            job_title: None,
            normalize_types: true,
        }
    }

    /// An empty title is the same as no title filter
    pub fn with_job_title(mut self, job_title: Option<String>) -> Self {
        self.job_title = job_title.filter(|t| !t.is_empty());
        self
    }

    pub fn with_category(mut self, category: ApplicantCategory) -> Self {
        self.applicant_type_codes = category.codes();
        self
    }

    pub fn with_normalized_types(mut self, normalize: bool) -> Self {
        self.normalize_types = normalize;
        self
    }

    /// Query pairs for one applicant type code, in the order they are sent
    pub fn query_pairs<'a>(&'a self, code: &'a str) -> [(&'static str, &'a str); 2] {
        [
            (APPLICATION_TYPE_KEY, code),
            (COMPANY_ID_KEY, self.company_id.as_str()),
        ]
    }
}

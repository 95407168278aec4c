// src/job_query/mod.rs
//! Fetch postings pages and reduce them to job records

use anyhow::Result;
use tracing::info;

pub mod extractor;
pub mod fetcher;
pub mod table_parser;
pub mod types;

pub use extractor::{CellExtractor, RsButtonsLayout};
pub use fetcher::Fetcher;
pub use table_parser::TableParser;
pub use types::{FetchError, FetchResult, JobRecord};

use crate::config::QueryParameters;

pub struct JobQuery {
    params: QueryParameters,
    fetcher: Fetcher,
    parser: TableParser,
}

impl JobQuery {
    pub fn new(params: QueryParameters) -> Result<Self> {
        Ok(Self {
            params,
            fetcher: Fetcher::new()?,
            parser: TableParser::new()?,
        })
    }

    /// Swap in a different table layout
    pub fn with_parser(mut self, parser: TableParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    /// Fetch every page, then parse. Nothing is parsed if any fetch fails.
    pub async fn run(&self) -> Result<Vec<JobRecord>, FetchError> {
        info!(
            "Querying {} for '{}' ({} applicant type(s))",
            self.params.url,
            self.params.location,
            self.params.applicant_type_codes.len()
        );

        let pages = self.fetcher.fetch_all(&self.params).await?;
        let records = self.parse_pages(&pages);

        info!("Found {} matching posting(s)", records.len());
        Ok(records)
    }

    pub fn parse_pages(&self, pages: &[FetchResult]) -> Vec<JobRecord> {
        pages
            .iter()
            .flat_map(|page| {
                self.parser.parse(
                    &page.body,
                    &self.params.location,
                    self.params.job_title.as_deref(),
                    self.params.normalize_types,
                )
            })
            .collect()
    }
}

// src/job_query/table_parser.rs
use anyhow::Result;
use scraper::{Html, Selector};
use tracing::debug;

use super::extractor::{parse_selector, CellExtractor, RsButtonsLayout};
use super::types::JobRecord;
use crate::utils::{clean_text, contains_ignore_case};

pub struct TableParser {
    extractor: Box<dyn CellExtractor>,
    row: Selector,
}

impl TableParser {
    /// Parser for the default postings table layout
    pub fn new() -> Result<Self> {
        Self::with_extractor(Box::new(RsButtonsLayout::new()?))
    }

    pub fn with_extractor(extractor: Box<dyn CellExtractor>) -> Result<Self> {
        Ok(Self {
            extractor,
            row: parse_selector("tr")?,
        })
    }

    /// Records for every row mentioning `location`, in document order.
    ///
    /// Rows missing either cell, or with an empty cell, are dropped.
    pub fn parse(
        &self,
        html: &str,
        location: &str,
        job_title: Option<&str>,
        normalize_types: bool,
    ) -> Vec<JobRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for row in document.select(&self.row) {
            // text nodes are joined as-is so inline markup inside a word still matches
            let row_text = row.text().collect::<String>();
            if !contains_ignore_case(&row_text, location) {
                continue;
            }

            let job_type = self.extractor.job_type_cell(row).filter(|t| !t.is_empty());
            let job_name = self
                .extractor
                .job_name_cell(row, job_title)
                .filter(|n| !n.is_empty());

            match (job_type, job_name) {
                (Some(job_type), Some(job_name)) => {
                    records.push(JobRecord::new(job_type, job_name, normalize_types));
                }
                _ => debug!("Skipping incomplete row: {}", clean_text(&row_text)),
            }
        }

        records
    }
}

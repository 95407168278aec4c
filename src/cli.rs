// src/cli.rs
use clap::Parser;

use crate::config::{ApplicantCategory, QueryParameters};
use crate::output::OutputMode;

#[derive(Parser, Debug)]
#[command(name = "bay-scraper", version)]
#[command(about = "Search Bay District job postings by location and title")]
pub struct Cli {
    /// Sets URL to query for data
    pub url: String,

    /// Sets phrase used to filter search by location/facility
    pub location: String,

    /// Sets phrase used to search for specific positions
    #[arg(short = 'j', long = "job_title", visible_alias = "job-title")]
    pub job_title: Option<String>,

    /// Format output for a log file instead of the console
    #[arg(short, long)]
    pub log: bool,

    /// Applicant categories to query
    #[arg(short, long, value_enum, default_value_t = ApplicantCategory::All)]
    pub category: ApplicantCategory,

    /// Print job types as listed instead of folding them into "Licensed"
    #[arg(long)]
    pub raw_types: bool,
}

impl Cli {
    pub fn query_parameters(&self) -> QueryParameters {
        QueryParameters::new(&self.url, &self.location)
            .with_job_title(self.job_title.clone())
            .with_category(self.category)
            .with_normalized_types(!self.raw_types)
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_log_flag(self.log)
    }
}

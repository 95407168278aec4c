// src/output.rs
//! Text rendering for the job report and fetch diagnostics

use crate::job_query::JobRecord;
use crate::utils::utc_timestamp;

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Boxed table for a terminal
    Console,
    /// `> type: name` lines for appending to a log file
    Log,
}

impl OutputMode {
    pub fn from_log_flag(log: bool) -> Self {
        if log {
            OutputMode::Log
        } else {
            OutputMode::Console
        }
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn render_report(location: &str, records: &[JobRecord], mode: OutputMode) -> String {
    if records.is_empty() {
        return format!("There are no postings for {}\n", location);
    }

    let mut out = format!("{}\n|{:^78}|\n{}\n\n", rule(), location, rule());

    for record in records {
        let line = match mode {
            OutputMode::Console => format!("|{:<10}| {:<66}|\n\n", record.job_type, record.job_name),
            OutputMode::Log => format!("> {:<10}: {:<66}\n\n", record.job_type, record.job_name),
        };
        out.push_str(&line);
    }

    if mode == OutputMode::Console {
        out.push_str(&rule());
        out.push('\n');
    }

    out
}

pub fn render_fetch_error(error: &dyn std::fmt::Display) -> String {
    render_fetch_error_at(error, &utc_timestamp())
}

fn render_fetch_error_at(error: &dyn std::fmt::Display, timestamp: &str) -> String {
    format!(
        "{}\nAn error occurred when connecting to the given URL:\nError Time: {}\n\n{}\n\n",
        rule(),
        timestamp,
        error
    )
}

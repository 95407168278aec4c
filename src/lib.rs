pub mod cli;
pub mod config;
pub mod job_query;
pub mod logging;
pub mod output;
pub mod utils;

pub use cli::Cli;
pub use config::{ApplicantCategory, QueryParameters};
pub use job_query::{JobQuery, JobRecord};
pub use output::OutputMode;

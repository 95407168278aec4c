// src/job_query/fetcher.rs
use anyhow::{Context, Result};
use reqwest::Client;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::types::{FetchError, FetchResult};
use crate::config::QueryParameters;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch one page per applicant type code.
    ///
    /// All requests run together; the first failure cancels the rest and
    /// nothing is returned. Results come back in code order.
    pub async fn fetch_all(&self, params: &QueryParameters) -> Result<Vec<FetchResult>, FetchError> {
        let mut tasks = JoinSet::new();

        for (index, code) in params.applicant_type_codes.iter().enumerate() {
            let url = build_url(&params.url, &params.query_pairs(code));
            let client = self.client.clone();
            let code = code.clone();

            tasks.spawn(async move {
                let body = fetch_page(&client, &url).await?;
                Ok::<_, FetchError>((
                    index,
                    FetchResult {
                        applicant_type_code: code,
                        body,
                    },
                ))
            });
        }

        let mut pages = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            // returning early drops `tasks`, which aborts whatever is still running
            pages.push(joined??);
        }

        pages.sort_by_key(|(index, _)| *index);
        info!("Fetched {} page(s)", pages.len());
        Ok(pages.into_iter().map(|(_, page)| page).collect())
    }
}

async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    // an error page is still a page; only transport failures abort the run
    if !response.status().is_success() {
        warn!("{} returned HTTP {}", url, response.status());
    }

    response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}

/// Append `key=value` pairs to `base` verbatim. Values are not
/// percent-encoded; the site's ids are plain digits.
pub fn build_url(base: &str, pairs: &[(&str, &str)]) -> String {
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}

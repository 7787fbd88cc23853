//! Remote Markdown fetching

use thiserror::Error;

/// Error produced when a page's Markdown cannot be retrieved.
///
/// Transport failures and non-success statuses are the same failure
/// kind from the build's point of view: the page cannot be rendered.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch markdown from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch markdown from {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Fetches remote Markdown documents
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher with client defaults
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch a Markdown document as text.
    ///
    /// Issues a single GET. Any transport error or non-2xx status fails
    /// the fetch; no retries and no partial content.
    pub async fn fetch_markdown(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

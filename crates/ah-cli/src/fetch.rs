use std::time::Duration;

use reqwest::Client;

use ah_core::{SourceFetchError, SourceLocation};

const USER_AGENT: &str = concat!("adhosts/", env!("CARGO_PKG_VERSION"));

/// Retrieves blocklist text from local files and remote URLs.
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self { client, timeout })
    }

    pub async fn fetch(&self, location: &SourceLocation) -> Result<Vec<String>, SourceFetchError> {
        let text = match location {
            SourceLocation::File(path) => {
                let bytes = tokio::fs::read(path).await.map_err(|source| SourceFetchError::File {
                    path: path.clone(),
                    source,
                })?;
                // Same lossy decoding reqwest applies to response bodies.
                String::from_utf8_lossy(&bytes).into_owned()
            }
            SourceLocation::Remote(url) => self.fetch_remote(url).await?,
        };
        Ok(text.lines().map(str::to_string).collect())
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, SourceFetchError> {
        let request_error = |e: reqwest::Error| {
            if e.is_timeout() {
                SourceFetchError::Timeout { url: url.to_string() }
            } else {
                SourceFetchError::Request {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        };

        log::debug!("GET {} (timeout {:?})", url, self.timeout);
        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceFetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(request_error)
    }
}

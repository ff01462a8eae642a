use std::time::Duration;

use reqwest::Client;

use crate::error::IngestError;

/// HTTP client for fetching the source workbook.
///
/// Thin wrapper over `reqwest` carrying the configured timeout and
/// `User-Agent`. No retry: a failed fetch fails the whole ingestion run and
/// retrying is the caller's responsibility.
pub struct SourceClient {
    client: Client,
}

impl SourceClient {
    /// Creates a `SourceClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw workbook bytes.
    ///
    /// # Errors
    ///
    /// - [`IngestError::Http`] — network or TLS failure.
    /// - [`IngestError::UnexpectedStatus`] — any non-2xx response.
    pub async fn fetch_source(&self, url: &str) -> Result<Vec<u8>, IngestError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        let bytes = response.bytes().await?;
        tracing::debug!(url, len = bytes.len(), "fetched source workbook");
        Ok(bytes.to_vec())
    }
}

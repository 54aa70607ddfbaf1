//! arXiv API client.
//!
//! One request per operation: no retries, caching, pagination or rate
//! limiting. Requests are bounded by the configured timeouts.

mod query;

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tokio::io::AsyncWriteExt;

pub use query::{build_search_query, id_query, search_url, split_categories};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{DownloadedPdf, PaperRecord, file_stem, normalize_id};
use crate::parser::parse_feed;

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Atom query endpoint.
    api_url: String,

    /// Base URL for PDF downloads.
    pdf_base_url: String,

    /// Timeout for search and details requests.
    request_timeout: Duration,

    /// Timeout for PDF downloads.
    download_timeout: Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url,
            pdf_base_url: config.pdf_base_url,
            request_timeout: config.request_timeout,
            download_timeout: config.download_timeout,
        })
    }

    /// Search for papers.
    ///
    /// Non-empty `categories` restrict the query with
    /// `(query) AND (cat:A OR cat:B ...)`. No matches is an empty vector.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a malformed feed.
    pub async fn search<S: AsRef<str>>(
        &self,
        query: &str,
        max_results: u32,
        categories: &[S],
    ) -> ClientResult<Vec<PaperRecord>> {
        let search_query = build_search_query(query, categories);
        let url = search_url(&self.api_url, &search_query, max_results)?;

        tracing::debug!(%url, "Querying arXiv");

        let response = self
            .client
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.request_timeout))?;

        let response = Self::handle_response(response).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(e, self.request_timeout))?;

        Ok(parse_feed(&body)?)
    }

    /// Get a single paper by identifier.
    ///
    /// Returns `None` when the API has no matching entry.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ArxivClient::search`].
    pub async fn details(&self, arxiv_id: &str) -> ClientResult<Option<PaperRecord>> {
        let no_categories: [&str; 0] = [];
        let papers = self.search(&id_query(&normalize_id(arxiv_id)), 1, &no_categories).await?;
        Ok(papers.into_iter().next())
    }

    /// PDF URL for an identifier, without contacting the API.
    #[must_use]
    pub fn resolve_pdf_url(arxiv_id: &str) -> String {
        crate::models::resolve_pdf_url(arxiv_id)
    }

    /// Download a paper's PDF into `output_dir`.
    ///
    /// The directory is created if missing. The body is streamed to
    /// `{output_dir}/{id}.pdf`; a partially written file is removed on failure.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or filesystem failure.
    pub async fn download_pdf(&self, arxiv_id: &str, output_dir: &Path) -> ClientResult<DownloadedPdf> {
        let id = normalize_id(arxiv_id);
        let url = format!("{}/{}.pdf", self.pdf_base_url, id);
        let path = output_dir.join(format!("{}.pdf", file_stem(&id)));

        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|e| ClientError::io(output_dir, e))?;

        tracing::debug!(%url, path = %path.display(), "Downloading PDF");

        let response = self
            .client
            .get(&url)
            .timeout(self.download_timeout)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.download_timeout))?;
        let response = Self::handle_response(response).await?;

        let mut file = tokio::fs::File::create(&path).await.map_err(|e| ClientError::io(&path, e))?;

        match self.stream_to_file(response, &mut file, &path).await {
            Ok(bytes) => {
                tracing::info!(path = %path.display(), bytes, "Downloaded PDF");
                Ok(DownloadedPdf { path, bytes })
            }
            Err(e) => {
                drop(file);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(path = %path.display(), error = %remove_err, "Failed to remove partial download");
                }
                Err(e)
            }
        }
    }

    async fn stream_to_file(
        &self,
        mut response: reqwest::Response,
        file: &mut tokio::fs::File,
        path: &Path,
    ) -> ClientResult<u64> {
        let mut written: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ClientError::from_transport(e, self.download_timeout))?
        {
            file.write_all(&chunk).await.map_err(|e| ClientError::io(path, e))?;
            written += chunk.len() as u64;
        }

        file.flush().await.map_err(|e| ClientError::io(path, e))?;
        Ok(written)
    }

    /// Reject non-success statuses, keeping the body as the message.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::status(status.as_u16(), text))
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("pdf_base_url", &self.pdf_base_url)
            .finish_non_exhaustive()
    }
}

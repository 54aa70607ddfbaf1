//! Configuration for the arXiv client.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom query endpoint.
    pub const API_URL: &str = "http://export.arxiv.org/api/query";

    /// Base URL for PDF downloads.
    pub const PDF_BASE_URL: &str = "https://arxiv.org/pdf";

    /// User-Agent sent with every request.
    pub const USER_AGENT: &str = concat!("arxiv-search/", env!("CARGO_PKG_VERSION"));

    /// Timeout for search and details requests.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Timeout for PDF downloads.
    pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default number of search results.
    pub const DEFAULT_MAX_RESULTS: u32 = 10;

    /// Default directory for downloaded PDFs.
    pub const DEFAULT_OUTPUT_DIR: &str = "papers";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Atom query endpoint (for testing with mock servers).
    pub api_url: String,

    /// Base URL PDFs are fetched from (for testing with mock servers).
    pub pdf_base_url: String,

    /// User-Agent header value.
    pub user_agent: String,

    /// Timeout for search and details requests.
    pub request_timeout: Duration,

    /// Timeout for PDF downloads.
    pub download_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create the default configuration pointing at the public arXiv API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::API_URL.to_string(),
            pdf_base_url: api::PDF_BASE_URL.to_string(),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            download_timeout: api::DOWNLOAD_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url),
            pdf_base_url: format!("{}/pdf", base_url),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(5),
            download_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognized: `ARXIV_API_URL`, `ARXIV_PDF_BASE_URL`, `ARXIV_USER_AGENT`
    /// and `ARXIV_TIMEOUT_SECS` (applies to search and details requests).
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.api_url = url;
        }
        if let Ok(url) = std::env::var("ARXIV_PDF_BASE_URL") {
            config.pdf_base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(agent) = std::env::var("ARXIV_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Ok(secs) = std::env::var("ARXIV_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("ARXIV_TIMEOUT_SECS must be an integer, got {secs:?}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

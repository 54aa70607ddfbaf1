//! Error types for the arXiv client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::path::PathBuf;
use std::time::Duration;

/// Document-level failures while decoding an Atom feed.
///
/// Problems confined to a single `entry` never surface here; the parser skips
/// that entry instead.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// Syntax error reported by the XML reader.
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document contains no root element.
    #[error("document has no root element")]
    NoRoot,

    /// The document ended while an element was still open.
    #[error("document ended inside <{element}>")]
    Unclosed {
        /// Local name of the innermost open element
        element: String,
    },

    /// A second top-level element follows the root.
    #[error("document has more than one root element")]
    MultipleRoots,

    /// Character data appears outside the root element.
    #[error("text outside the root element")]
    TextOutsideRoot,

    /// An element name uses a prefix with no namespace declaration.
    #[error("undeclared namespace prefix '{prefix}'")]
    UnboundPrefix {
        /// The undeclared prefix
        prefix: String,
    },
}

/// Errors from the arXiv client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, body read, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-success HTTP status
    #[error("Unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The configured endpoint does not form a valid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response body is not a well-formed feed
    #[error("Failed to parse response: {0}")]
    Parse(#[from] FeedError),

    /// Lookup of a single paper matched nothing
    #[error("Paper not found: {resource}")]
    NotFound {
        /// The identifier that was looked up
        resource: String,
    },

    /// Filesystem error while saving a download
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create an I/O error bound to a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Convert a reqwest error, folding timeouts into [`ClientError::Timeout`].
    #[must_use]
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() { Self::Timeout(timeout) } else { Self::Transport(err) }
    }

    /// Returns true for connection-level failures, timeouts included.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }

    /// HTTP status code, if the server answered with a non-success status.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for feed decoding.
pub type FeedResult<T> = Result<T, FeedError>;

//! Error types for tf-summarizer.
//!
//! Every variant describes an input source that could not be read. The
//! summarization core itself never fails: empty or degenerate input yields
//! an empty summary instead.

/// Error type for input acquisition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a local file failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The URL is malformed or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The bytes could not be decoded as text.
    #[error("Decoding failed: {0}")]
    Decode(String),

    /// The input exceeded the configured byte limit.
    #[error("Input exceeds {limit} bytes")]
    TooLarge {
        /// Configured maximum, in bytes.
        limit: usize,
    },

    /// PDF text extraction failed.
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for input acquisition.
pub type Result<T> = std::result::Result<T, Error>;

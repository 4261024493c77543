//! Error type shared by every catalog operation.

use thiserror::Error;

/// Errors that abort a catalog call.
///
/// Resolution misses, undecodable AJAX bodies and unresolved labels are not
/// errors: they surface as `None` or as omitted entries.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid request: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed markup: {0}")]
    Parse(String),

    #[error("Pagination exceeded {max_pages} pages")]
    PageLimit { max_pages: usize },
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

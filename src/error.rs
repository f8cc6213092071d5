use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("invalid asset file name: {0}")]
    InvalidFileName(String),

    #[error("duplicate asset file name: {0}")]
    DuplicateFileName(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Http(String),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("failed to read confirmation: {0}")]
    Prompt(String),
}

impl FetchError {
    /// Per-asset failures that are reported and skipped instead of ending the run.
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Http(_) | FetchError::Status { .. })
    }
}

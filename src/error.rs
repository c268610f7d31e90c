use thiserror::Error;

/// Generic message shown to callers when analysis fails for a reason
/// that is not theirs to fix
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred during analysis. Please try again later.";

/// Errors that can occur while analyzing a page
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The supplied address is not a well-formed absolute http(s) URL
    #[error("invalid address format: {0}")]
    InvalidAddress(String),

    /// The page responded with a non-success HTTP status
    #[error("failed to fetch page (HTTP {status})")]
    FetchFailure { status: u16 },

    /// The request could not be completed (DNS, TLS, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Unexpected failure during parse/compute/score
    #[error("internal analysis error: {0}")]
    Internal(String),
}

impl AnalyzeError {
    /// Message surfaced to the caller. Address and fetch problems are
    /// user-correctable and shown as-is; everything else collapses to
    /// a generic retry-later message (details go to the log only).
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::InvalidAddress(_) | AnalyzeError::FetchFailure { .. } => self.to_string(),
            AnalyzeError::Transport(_) | AnalyzeError::Internal(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

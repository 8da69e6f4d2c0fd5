use thiserror::Error;

pub type WebResult<T> = Result<T, WebError>;

/// Errors from the front-end's own plumbing. API failures never surface
/// structured detail to the browser; pages catch these and re-render with a
/// generic message.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    ApiStatus(reqwest::StatusCode),

    #[error("Session unavailable")]
    SessionUnavailable,

    #[error("Session write failed: {0}")]
    SessionWrite(String),

    #[error("Core error: {0}")]
    CoreError(#[from] parkside_core::error::CoreError),
}

//! Error type for the Instagram Graph client.

use postflow_core::HttpResponse;
use thiserror::Error;

/// Alias for `Result<T, InstagramError>`.
pub type InstagramResult<T> = Result<T, InstagramError>;

#[derive(Debug, Error)]
pub enum InstagramError {
    /// `error.message` from a Graph error body, or `HTTP <status>` when the
    /// body carried none.
    #[error("{0}")]
    Api(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
    /// The container never reached `FINISHED` within the poll budget.
    #[error("media processing timed out after {0} status checks")]
    ProcessingTimeout(u32),
    /// The container reported `ERROR` while processing.
    #[error("media processing failed: {0}")]
    ProcessingFailed(String),
}

impl InstagramError {
    /// Build from a non-2xx Graph response.
    pub(crate) fn from_response(resp: &HttpResponse) -> Self {
        let message = resp
            .json_value()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str().map(str::to_string))
            })
            .unwrap_or_else(|| format!("HTTP {}", resp.status));
        InstagramError::Api(message)
    }
}

//! Error type for the Evolution API client.

use thiserror::Error;

/// Alias for `Result<T, EvolutionError>`.
pub type EvolutionResult<T> = Result<T, EvolutionError>;

#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Message extracted from an Evolution error body, or `HTTP <status>`
    /// when the body carried none.
    #[error("{0}")]
    Api(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

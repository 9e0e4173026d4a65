//! Error type for the Telegram client.

use thiserror::Error;

/// Alias for `Result<T, TelegramError>`.
pub type TelegramResult<T> = Result<T, TelegramError>;

#[derive(Debug, Error)]
pub enum TelegramError {
    /// Error reported by the Bot API (`ok=false` description), or a bare
    /// `HTTP <status>` when the body was not a Bot API envelope.
    #[error("{0}")]
    Api(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

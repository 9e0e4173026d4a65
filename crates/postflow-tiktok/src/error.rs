//! Error type shared by both TikTok clients.

use thiserror::Error;

/// Alias for `Result<T, TikTokError>`.
pub type TikTokResult<T> = Result<T, TikTokError>;

#[derive(Debug, Error)]
pub enum TikTokError {
    /// `error.message` (Open API) or `message` (Shop API) from an error
    /// envelope, or `HTTP <status>` when the body carried none.
    #[error("{0}")]
    Api(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
    /// The publish never reached `PUBLISH_COMPLETE` within the poll budget.
    #[error("video publish timed out after {0} status checks")]
    PublishTimeout(u32),
    /// The publish reported `FAILED`.
    #[error("video publish failed: {0}")]
    PublishFailed(String),
}

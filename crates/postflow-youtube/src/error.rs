//! Error type for the YouTube client.

use postflow_core::HttpResponse;
use thiserror::Error;

/// Alias for `Result<T, YouTubeError>`.
pub type YouTubeResult<T> = Result<T, YouTubeError>;

#[derive(Debug, Error)]
pub enum YouTubeError {
    /// `error.message` from a Google error body, or `HTTP <status>` when
    /// the body carried none.
    #[error("{0}")]
    Api(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

impl YouTubeError {
    /// Build from a non-2xx Google API response.
    pub(crate) fn from_response(resp: &HttpResponse) -> Self {
        let message = resp
            .json_value()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str().map(str::to_string))
            })
            .unwrap_or_else(|| format!("HTTP {}", resp.status));
        YouTubeError::Api(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_google_error_envelope() {
        let resp = HttpResponse {
            status: 403,
            body: r#"{"error":{"code":403,"message":"The request cannot access user rating information.","errors":[{"reason":"forbidden"}]}}"#
                .to_string(),
        };
        assert_eq!(
            YouTubeError::from_response(&resp).to_string(),
            "The request cannot access user rating information."
        );
    }

    #[test]
    fn unparseable_body_yields_status() {
        let resp = HttpResponse {
            status: 500,
            body: "backendError".to_string(),
        };
        assert_eq!(YouTubeError::from_response(&resp).to_string(), "HTTP 500");
    }
}

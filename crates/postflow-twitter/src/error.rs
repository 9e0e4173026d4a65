//! Error type for the Twitter client.

use postflow_core::HttpResponse;
use thiserror::Error;

/// Alias for `Result<T, TwitterError>`.
pub type TwitterResult<T> = Result<T, TwitterError>;

#[derive(Debug, Error)]
pub enum TwitterError {
    /// `detail` / `errors[0].message` / `title` from a v2 error body, or
    /// `HTTP <status>` when the body carried none.
    #[error("{0}")]
    Api(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

impl TwitterError {
    /// Build from a non-2xx v2 response.
    pub(crate) fn from_response(resp: &HttpResponse) -> Self {
        let message = resp.json_value().and_then(|v| {
            [
                v.get("detail"),
                v.pointer("/errors/0/message"),
                v.get("title"),
                v.get("error_description"),
            ]
            .into_iter()
            .flatten()
            .find_map(|m| m.as_str().map(str::to_string))
        });
        TwitterError::Api(message.unwrap_or_else(|| format!("HTTP {}", resp.status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_detail_field() {
        let resp = HttpResponse {
            status: 401,
            body: r#"{"title":"Unauthorized","detail":"Unauthorized","type":"about:blank","status":401}"#
                .to_string(),
        };
        assert_eq!(TwitterError::from_response(&resp).to_string(), "Unauthorized");
    }

    #[test]
    fn falls_back_to_errors_array() {
        let resp = HttpResponse {
            status: 400,
            body: r#"{"errors":[{"message":"Invalid Request: one or more parameters"}]}"#.to_string(),
        };
        assert_eq!(
            TwitterError::from_response(&resp).to_string(),
            "Invalid Request: one or more parameters"
        );
    }

    #[test]
    fn unparseable_body_yields_status() {
        let resp = HttpResponse {
            status: 503,
            body: "over capacity".to_string(),
        };
        assert_eq!(TwitterError::from_response(&resp).to_string(), "HTTP 503");
    }
}

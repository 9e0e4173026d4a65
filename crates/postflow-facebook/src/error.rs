//! Error type for the Facebook Graph client.

use postflow_core::HttpResponse;
use thiserror::Error;

/// Alias for `Result<T, GraphError>`.
pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
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
}

impl GraphError {
    /// Build from a non-2xx Graph response.
    ///
    /// Graph wraps errors as `{"error": {"message", "type", "code", ...}}`.
    pub(crate) fn from_response(resp: &HttpResponse) -> Self {
        let message = resp
            .json_value()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str().map(str::to_string))
            })
            .unwrap_or_else(|| format!("HTTP {}", resp.status));
        GraphError::Api(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_graph_error_envelope() {
        let resp = HttpResponse {
            status: 400,
            body: r#"{"error":{"message":"Invalid OAuth access token","type":"OAuthException","code":190}}"#
                .to_string(),
        };
        assert_eq!(
            GraphError::from_response(&resp).to_string(),
            "Invalid OAuth access token"
        );
    }

    #[test]
    fn unparseable_body_yields_status() {
        let resp = HttpResponse {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(GraphError::from_response(&resp).to_string(), "HTTP 500");
    }
}

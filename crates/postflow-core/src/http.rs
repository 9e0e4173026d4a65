//! HTTP client construction and the single-round-trip send helper.

use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default connect timeout applied to every client.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw result of one round trip: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Parse the body as a loose JSON value, if it is JSON at all.
    pub fn json_value(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Build the `reqwest::Client` shared by a platform client instance.
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
}

/// Perform exactly one round trip and collect status + body.
///
/// No retry happens here and none may be added — a failed call surfaces
/// immediately to the caller.
pub async fn send(request: RequestBuilder) -> Result<HttpResponse, reqwest::Error> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    debug!("HTTP {} ({} byte body)", status, body.len());
    Ok(HttpResponse { status, body })
}

/// Mask a token or secret for log output, keeping only the edges.
pub fn mask_secret(secret: &str) -> String {
    if secret.len() > 10 {
        format!("{}...{}", &secret[..5], &secret[secret.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn send_collects_status_and_body() {
        let app = Router::new().route("/ping", get(|| async { "pong" }));
        let base = spawn(app).await;

        let client = build_http_client(5).unwrap();
        let resp = send(client.get(format!("{base}/ping"))).await.unwrap();
        assert_eq!(resp.status, 200);
        assert!(resp.is_success());
        assert_eq!(resp.body, "pong");
    }

    #[tokio::test]
    async fn send_does_not_treat_errors_as_transport_failures() {
        let app = Router::new().route(
            "/missing",
            get(|| async { (axum::http::StatusCode::NOT_FOUND, "gone") }),
        );
        let base = spawn(app).await;

        let client = build_http_client(5).unwrap();
        let resp = send(client.get(format!("{base}/missing"))).await.unwrap();
        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());
        assert_eq!(resp.body, "gone");
    }

    #[test]
    fn json_value_on_non_json_body() {
        let resp = HttpResponse {
            status: 500,
            body: "<html>nope</html>".to_string(),
        };
        assert!(resp.json_value().is_none());
    }

    #[test]
    fn mask_long_secret() {
        let masked = mask_secret("123456789:ABC-DEF1234ghIkl-zyx57W2v1u123ew11");
        assert!(masked.starts_with("12345"));
        assert!(masked.ends_with("ew11"));
        assert!(masked.contains("..."));
    }

    #[test]
    fn mask_short_secret() {
        assert_eq!(mask_secret("short"), "***");
    }
}

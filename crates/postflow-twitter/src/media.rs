//! Legacy v1.1 media upload.

use crate::client::TwitterClient;
use crate::error::{TwitterError, TwitterResult};
use crate::types::UploadedMedia;
use log::debug;
use postflow_core::send;

impl TwitterClient {
    /// Upload base64-encoded media via the v1.1 endpoint and return the
    /// `media_id` for use in [`create_tweet`](Self::create_tweet).
    ///
    /// KNOWN LIMITATION: this endpoint requires OAuth 1.0a user-context
    /// signing, which is not implemented. A placeholder
    /// `OAuth oauth_token=…` header is sent instead, so the call only
    /// works against deployments that accept bearer-style tokens here.
    pub async fn upload_media(&self, media_base64: &str) -> TwitterResult<UploadedMedia> {
        let url = format!(
            "{}/1.1/media/upload.json",
            self.config.upload_base_url.trim_end_matches('/')
        );
        debug!("POST {url}");

        let request = self
            .http
            .post(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("OAuth oauth_token=\"{}\"", self.config.bearer_token),
            )
            .form(&[("media_data", media_base64)]);

        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(TwitterError::from_response(&resp));
        }
        Ok(resp.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TwitterConfig;
    use axum::http::HeaderMap;
    use axum::{routing::post, Json, Router};
    use serde_json::json;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn upload_sends_placeholder_oauth_header() {
        let app = Router::new().route(
            "/1.1/media/upload.json",
            post(|headers: HeaderMap, body: String| async move {
                let auth = headers["authorization"].to_str().unwrap().to_string();
                assert!(auth.starts_with("OAuth oauth_token="));
                assert!(body.starts_with("media_data="));
                Json(json!({"media_id": 710511363345354753u64, "media_id_string": "710511363345354753"}))
            }),
        );
        let base = spawn(app).await;
        let client = TwitterClient::new(&TwitterConfig {
            bearer_token: "AAAAbearer".into(),
            upload_base_url: base,
            ..Default::default()
        })
        .unwrap();

        let media = client.upload_media("aGVsbG8=").await.unwrap();
        assert_eq!(media.media_id_string, "710511363345354753");
    }
}

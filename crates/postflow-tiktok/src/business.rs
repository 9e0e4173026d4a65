//! Open API for Business client — user info, videos, comments, creator info.
//!
//! Auth is a bearer token. Responses arrive in the Open API envelope
//! (`data` / `error`); an `error.code` other than `"ok"` is an API error
//! even when the HTTP status is 200.

use crate::error::{TikTokError, TikTokResult};
use crate::types::{
    CommentList, CreatorInfo, OpenApiEnvelope, TikTokConfig, UserInfo, VideoList,
};
use log::debug;
use postflow_core::{build_http_client, mask_secret, send};
use serde::de::DeserializeOwned;
use serde_json::json;

const USER_FIELDS: &str = "open_id,union_id,display_name,avatar_url,follower_count,following_count,likes_count,video_count";
const VIDEO_FIELDS: &str = "id,title,video_description,duration,cover_image_url,share_url,create_time,view_count,like_count,comment_count,share_count";

/// Open API for Business client.
#[derive(Debug, Clone)]
pub struct TikTokClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) config: TikTokConfig,
    pub(crate) publish_poll_interval: std::time::Duration,
    pub(crate) max_publish_polls: u32,
}

impl TikTokClient {
    /// Create a new client from a [`TikTokConfig`].
    pub fn new(config: &TikTokConfig) -> TikTokResult<Self> {
        if config.client_key.is_empty() {
            return Err(TikTokError::Config("client_key must not be empty".into()));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config: config.clone(),
            publish_poll_interval: crate::publish::PUBLISH_POLL_INTERVAL,
            max_publish_polls: crate::publish::MAX_PUBLISH_POLLS,
        })
    }

    /// Override the publish status poll cadence. Intended for tests;
    /// production code keeps the 5 s / 60 attempt defaults.
    pub fn with_publish_poll(mut self, interval: std::time::Duration, max_polls: u32) -> Self {
        self.publish_poll_interval = interval;
        self.max_publish_polls = max_polls;
        self
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET an Open API endpoint and unwrap the envelope.
    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> TikTokResult<R> {
        let url = self.url(path);
        debug!(
            "GET {} (token {})",
            url,
            mask_secret(&self.config.access_token)
        );
        let request = self
            .http
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .query(params);
        let resp = send(request).await?;
        unwrap_envelope(resp)
    }

    /// POST an Open API endpoint and unwrap the envelope.
    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: serde_json::Value,
    ) -> TikTokResult<R> {
        let url = self.url(path);
        debug!(
            "POST {} (token {})",
            url,
            mask_secret(&self.config.access_token)
        );
        let request = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .query(params)
            .json(&body);
        let resp = send(request).await?;
        unwrap_envelope(resp)
    }

    /// Profile of the authorized user.
    pub async fn get_user_info(&self) -> TikTokResult<UserData> {
        self.get("/v2/user/info/", &[("fields", USER_FIELDS)]).await
    }

    /// List the user's videos.
    pub async fn list_videos(
        &self,
        cursor: Option<i64>,
        max_count: Option<u32>,
    ) -> TikTokResult<VideoList> {
        let mut body = json!({"max_count": max_count.unwrap_or(20)});
        if let Some(cursor) = cursor {
            body["cursor"] = json!(cursor);
        }
        self.post("/v2/video/list/", &[("fields", VIDEO_FIELDS)], body)
            .await
    }

    /// Query counters for specific videos — the per-video insight call.
    pub async fn get_video_insights(&self, video_ids: &[&str]) -> TikTokResult<VideoList> {
        let body = json!({"filters": {"video_ids": video_ids}});
        self.post("/v2/video/query/", &[("fields", VIDEO_FIELDS)], body)
            .await
    }

    /// List comments on a video.
    pub async fn list_comments(
        &self,
        video_id: &str,
        cursor: Option<i64>,
    ) -> TikTokResult<CommentList> {
        let mut body = json!({"video_id": video_id, "max_count": 50});
        if let Some(cursor) = cursor {
            body["cursor"] = json!(cursor);
        }
        self.post("/v2/video/comment/list/", &[], body).await
    }

    /// Creator publishing capabilities; required before a direct post.
    pub async fn get_creator_info(&self) -> TikTokResult<CreatorInfo> {
        self.post("/v2/post/publish/creator_info/query/", &[], json!({}))
            .await
    }
}

/// `user/info` nests the profile under a `user` key.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserData {
    pub user: UserInfo,
}

/// Decode an Open API response and unwrap its envelope.
pub(crate) fn unwrap_envelope<R: DeserializeOwned>(
    resp: postflow_core::HttpResponse,
) -> TikTokResult<R> {
    let envelope: OpenApiEnvelope<R> = match resp.json() {
        Ok(envelope) => envelope,
        Err(_) if !resp.is_success() => {
            return Err(TikTokError::Api(format!("HTTP {}", resp.status)));
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(error) = &envelope.error {
        if !error.code.is_empty() && error.code != "ok" {
            let message = if error.message.is_empty() {
                error.code.clone()
            } else {
                error.message.clone()
            };
            return Err(TikTokError::Api(message));
        }
    }
    if !resp.is_success() {
        return Err(TikTokError::Api(format!("HTTP {}", resp.status)));
    }
    envelope
        .data
        .ok_or_else(|| TikTokError::Api("response carried no data".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base: &str) -> TikTokClient {
        TikTokClient::new(&TikTokConfig {
            client_key: "awkey".into(),
            client_secret: "secret".into(),
            access_token: "act.token".into(),
            base_url: base.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn user_info_unwraps_data() {
        let app = Router::new().route(
            "/v2/user/info/",
            get(|| async {
                Json(json!({
                    "data": {"user": {"open_id": "o-1", "display_name": "acme", "follower_count": 9}},
                    "error": {"code": "ok", "message": "", "log_id": "x"}
                }))
            }),
        );
        let base = spawn(app).await;

        let data = client_for(&base).get_user_info().await.unwrap();
        assert_eq!(data.user.display_name.as_deref(), Some("acme"));
        assert_eq!(data.user.follower_count, Some(9));
    }

    #[tokio::test]
    async fn envelope_error_code_surfaces_message_even_on_200() {
        let app = Router::new().route(
            "/v2/user/info/",
            get(|| async {
                Json(json!({
                    "data": null,
                    "error": {"code": "access_token_invalid", "message": "The access token is invalid."}
                }))
            }),
        );
        let base = spawn(app).await;

        let err = client_for(&base).get_user_info().await.unwrap_err();
        assert_eq!(err.to_string(), "The access token is invalid.");
    }

    #[tokio::test]
    async fn unparseable_error_body_yields_status() {
        let app = Router::new().route(
            "/v2/user/info/",
            get(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let base = spawn(app).await;

        let err = client_for(&base).get_user_info().await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 429");
    }
}

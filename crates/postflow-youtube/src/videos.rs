//! Video listing, detail, update, delete, and resumable upload initiation.

use crate::client::YouTubeClient;
use crate::error::{YouTubeError, YouTubeResult};
use crate::types::{ListResponse, UploadParams, Video};
use log::debug;
use serde_json::json;

const VIDEO_PARTS: &str = "snippet,statistics,status";

impl YouTubeClient {
    /// Videos by id (comma-joined batch lookup).
    pub async fn list_videos(&self, video_ids: &[&str]) -> YouTubeResult<ListResponse<Video>> {
        let ids = video_ids.join(",");
        self.get("/youtube/v3/videos", &[("part", VIDEO_PARTS), ("id", &ids)])
            .await
    }

    /// One video's detail.
    pub async fn get_video(&self, video_id: &str) -> YouTubeResult<Video> {
        let list = self.list_videos(&[video_id]).await?;
        list.items
            .into_iter()
            .next()
            .ok_or_else(|| YouTubeError::Api(format!("video {video_id} not found")))
    }

    /// Update a video's snippet (title/description/category).
    pub async fn update_video(
        &self,
        video_id: &str,
        title: &str,
        description: &str,
        category_id: &str,
    ) -> YouTubeResult<Video> {
        let body = json!({
            "id": video_id,
            "snippet": {
                "title": title,
                "description": description,
                "categoryId": category_id,
            },
        });
        self.put("/youtube/v3/videos", &[("part", "snippet")], &body)
            .await
    }

    /// Delete a video.
    pub async fn delete_video(&self, video_id: &str) -> YouTubeResult<()> {
        self.delete("/youtube/v3/videos", &[("id", video_id)]).await
    }

    /// Initiate a resumable upload session and return the session URL from
    /// the `Location` header. The chunked byte transfer against that URL
    /// is the caller's job.
    pub async fn start_resumable_upload(&self, params: &UploadParams) -> YouTubeResult<String> {
        self.require_token()?;
        let url = format!(
            "{}/upload/youtube/v3/videos",
            self.config.upload_base_url.trim_end_matches('/')
        );
        debug!("POST {url} (resumable init)");

        let metadata = json!({
            "snippet": {
                "title": params.title,
                "description": params.description,
                "tags": params.tags,
                "categoryId": params.category_id.as_deref().unwrap_or("22"),
            },
            "status": {"privacyStatus": params.privacy_status},
        });

        let request = self
            .apply_auth(self.http.post(&url))
            .query(&[("uploadType", "resumable"), ("part", "snippet,status")])
            .header(
                "X-Upload-Content-Type",
                params.content_type.as_deref().unwrap_or("video/*"),
            )
            .json(&metadata);

        // The session URL arrives in a response header, so this bypasses
        // the body-only send helper.
        let response = request.send().await?;
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(YouTubeError::from_response(&postflow_core::HttpResponse {
                status,
                body,
            }));
        }
        location.ok_or_else(|| YouTubeError::Api("upload init returned no Location header".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::YouTubeConfig;
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
    async fn resumable_init_returns_location() {
        let app = Router::new().route(
            "/upload/youtube/v3/videos",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["snippet"]["title"], "How we ship");
                assert_eq!(body["status"]["privacyStatus"], "unlisted");
                (
                    [(
                        axum::http::header::LOCATION,
                        "https://uploads.example.com/session/abc123",
                    )],
                    Json(json!({})),
                )
            }),
        );
        let base = spawn(app).await;
        let client = YouTubeClient::new(&YouTubeConfig {
            access_token: Some("ya29.token".into()),
            upload_base_url: base,
            ..Default::default()
        })
        .unwrap();

        let session = client
            .start_resumable_upload(&UploadParams {
                title: "How we ship".into(),
                description: "behind the scenes".into(),
                privacy_status: "unlisted".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(session, "https://uploads.example.com/session/abc123");
    }
}

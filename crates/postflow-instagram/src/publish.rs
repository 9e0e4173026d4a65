//! Two-phase media publishing.
//!
//! Phase one creates a media container; phase two publishes it. Image
//! containers are ready immediately. Video and reel containers process
//! asynchronously: the client polls `status_code` until `FINISHED`, fails
//! immediately on `ERROR`, and fails closed once the poll budget is spent.

use crate::client::InstagramClient;
use crate::error::{InstagramError, InstagramResult};
use crate::types::{ContainerStatus, MediaId, MediaSpec};
use log::debug;
use serde_json::json;

impl InstagramClient {
    /// Create an image container. `is_carousel_item` marks it as a carousel
    /// child, which cannot be published on its own.
    pub async fn create_image_container(
        &self,
        image_url: &str,
        caption: Option<&str>,
        is_carousel_item: bool,
    ) -> InstagramResult<MediaId> {
        let mut body = json!({"image_url": image_url});
        if let Some(caption) = caption {
            body["caption"] = json!(caption);
        }
        if is_carousel_item {
            body["is_carousel_item"] = json!(true);
        }
        self.post(&format!("{}/media", self.ig_user_id()), body)
            .await
    }

    /// Create a video container. `media_type` is `REELS` for reels or
    /// `VIDEO` for in-feed video; `None` lets the platform default apply.
    pub async fn create_video_container(
        &self,
        video_url: &str,
        caption: Option<&str>,
        media_type: Option<&str>,
    ) -> InstagramResult<MediaId> {
        let mut body = json!({"video_url": video_url});
        if let Some(caption) = caption {
            body["caption"] = json!(caption);
        }
        if let Some(media_type) = media_type {
            body["media_type"] = json!(media_type);
        }
        self.post(&format!("{}/media", self.ig_user_id()), body)
            .await
    }

    /// Create an image story container.
    pub async fn create_story_container(&self, image_url: &str) -> InstagramResult<MediaId> {
        let body = json!({"image_url": image_url, "media_type": "STORIES"});
        self.post(&format!("{}/media", self.ig_user_id()), body)
            .await
    }

    /// Create a carousel container from already-created child containers.
    pub async fn create_carousel_container(
        &self,
        children: &[&str],
        caption: Option<&str>,
    ) -> InstagramResult<MediaId> {
        let mut body = json!({
            "media_type": "CAROUSEL",
            "children": children.join(","),
        });
        if let Some(caption) = caption {
            body["caption"] = json!(caption);
        }
        self.post(&format!("{}/media", self.ig_user_id()), body)
            .await
    }

    /// Publish a finished container.
    pub async fn publish_container(&self, container_id: &str) -> InstagramResult<MediaId> {
        let body = json!({"creation_id": container_id});
        self.post(&format!("{}/media_publish", self.ig_user_id()), body)
            .await
    }

    /// Read a container's processing status.
    pub async fn container_status(&self, container_id: &str) -> InstagramResult<ContainerStatus> {
        self.get(container_id, &[("fields", "id,status_code,status")])
            .await
    }

    /// Poll a container until it reaches `FINISHED`.
    ///
    /// Fails immediately on `ERROR` (with the platform's status text) and
    /// fails closed with [`InstagramError::ProcessingTimeout`] once the
    /// attempt budget is spent.
    pub async fn wait_for_container(&self, container_id: &str) -> InstagramResult<()> {
        for attempt in 1..=self.max_status_polls {
            let status = self.container_status(container_id).await?;
            let code = status.status_code.as_deref().unwrap_or("IN_PROGRESS");
            debug!(
                "container {} status {} (check {}/{})",
                container_id, code, attempt, self.max_status_polls
            );
            match code {
                "FINISHED" => return Ok(()),
                "ERROR" | "EXPIRED" => {
                    return Err(InstagramError::ProcessingFailed(
                        status.status.unwrap_or_else(|| code.to_string()),
                    ));
                }
                _ => {
                    if attempt < self.max_status_polls {
                        tokio::time::sleep(self.status_poll_interval).await;
                    }
                }
            }
        }
        Err(InstagramError::ProcessingTimeout(self.max_status_polls))
    }

    /// Create a container for `spec` and publish it, waiting out processing
    /// for asynchronous media types.
    pub async fn create_and_publish(&self, spec: &MediaSpec) -> InstagramResult<MediaId> {
        let (container, needs_wait) = match spec {
            MediaSpec::Image { url, caption } => (
                self.create_image_container(url, caption.as_deref(), false)
                    .await?,
                false,
            ),
            MediaSpec::Video { url, caption } => (
                self.create_video_container(url, caption.as_deref(), Some("VIDEO"))
                    .await?,
                true,
            ),
            MediaSpec::Reel {
                url,
                caption,
                share_to_feed,
            } => {
                let mut body = json!({
                    "video_url": url,
                    "media_type": "REELS",
                    "share_to_feed": share_to_feed,
                });
                if let Some(caption) = caption {
                    body["caption"] = json!(caption);
                }
                let id = self
                    .post(&format!("{}/media", self.ig_user_id()), body)
                    .await?;
                (id, true)
            }
            MediaSpec::Story { image_url } => {
                (self.create_story_container(image_url).await?, false)
            }
        };

        if needs_wait {
            self.wait_for_container(&container.id).await?;
        }
        self.publish_container(&container.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InstagramConfig;
    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base: &str) -> InstagramClient {
        InstagramClient::new(&InstagramConfig {
            access_token: "IGQVtoken".into(),
            ig_user_id: "178414".into(),
            base_url: base.to_string(),
            ..Default::default()
        })
        .unwrap()
        .with_status_poll(Duration::from_millis(5), 30)
    }

    /// Router mimicking the container lifecycle: creation, status polls
    /// with a scripted status sequence, publish.
    fn publish_router(hits: Arc<AtomicU32>, finish_on: u32, error_on: Option<u32>) -> Router {
        Router::new()
            .route(
                "/v18.0/178414/media",
                post(|| async { Json(serde_json::json!({"id": "container-1"})) }),
            )
            .route(
                "/v18.0/container-1",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        let n = hits.fetch_add(1, Ordering::SeqCst) + 1;
                        let code = if error_on == Some(n) {
                            "ERROR"
                        } else if n >= finish_on {
                            "FINISHED"
                        } else {
                            "IN_PROGRESS"
                        };
                        Json(serde_json::json!({
                            "id": "container-1",
                            "status_code": code,
                            "status": if code == "ERROR" { "Video too long" } else { code },
                        }))
                    }
                }),
            )
            .route(
                "/v18.0/178414/media_publish",
                post(|| async { Json(serde_json::json!({"id": "media-9"})) }),
            )
    }

    #[tokio::test]
    async fn video_publish_succeeds_after_n_polls() {
        let hits = Arc::new(AtomicU32::new(0));
        let base = spawn(publish_router(hits.clone(), 3, None)).await;

        let media = client_for(&base)
            .create_and_publish(&MediaSpec::Video {
                url: "https://cdn.example.com/clip.mp4".into(),
                caption: Some("spring sale".into()),
            })
            .await
            .unwrap();

        assert_eq!(media.id, "media-9");
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn error_status_fails_immediately() {
        let hits = Arc::new(AtomicU32::new(0));
        let base = spawn(publish_router(hits.clone(), 30, Some(1))).await;

        let err = client_for(&base)
            .create_and_publish(&MediaSpec::Reel {
                url: "https://cdn.example.com/reel.mp4".into(),
                caption: None,
                share_to_feed: true,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, InstagramError::ProcessingFailed(_)));
        assert_eq!(err.to_string(), "media processing failed: Video too long");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausted_polls_fail_closed() {
        let hits = Arc::new(AtomicU32::new(0));
        // Never finishes; cap the budget at 5 to keep the test quick.
        let base = spawn(publish_router(hits.clone(), u32::MAX, None)).await;
        let client = client_for(&base).with_status_poll(Duration::from_millis(2), 5);

        let err = client
            .create_and_publish(&MediaSpec::Video {
                url: "https://cdn.example.com/clip.mp4".into(),
                caption: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, InstagramError::ProcessingTimeout(5)));
        assert_eq!(hits.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn image_publish_skips_polling() {
        let hits = Arc::new(AtomicU32::new(0));
        let base = spawn(publish_router(hits.clone(), 1, None)).await;

        let media = client_for(&base)
            .create_and_publish(&MediaSpec::Image {
                url: "https://cdn.example.com/photo.jpg".into(),
                caption: None,
            })
            .await
            .unwrap();

        assert_eq!(media.id, "media-9");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}

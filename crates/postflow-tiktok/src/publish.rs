//! Direct-post video publishing with status polling.
//!
//! `init_video_upload` hands the platform a URL to pull from; the upload
//! then processes asynchronously. [`TikTokClient::publish_video`] polls
//! the publish status every 5 seconds for at most 60 attempts (a 5 minute
//! budget) and fails closed. The cadence is intentionally independent of
//! the Instagram container poll — the two platforms process on very
//! different timescales.

use crate::business::TikTokClient;
use crate::error::{TikTokError, TikTokResult};
use crate::types::{PublishInit, PublishStatus, VideoPublishParams};
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Interval between publish status polls.
pub const PUBLISH_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// Maximum number of publish status polls before failing closed.
pub const MAX_PUBLISH_POLLS: u32 = 60;

impl TikTokClient {
    /// Start a direct post; the platform pulls the video from
    /// `params.video_url`.
    pub async fn init_video_upload(
        &self,
        params: &VideoPublishParams,
    ) -> TikTokResult<PublishInit> {
        let body = json!({
            "post_info": {
                "title": params.title,
                "privacy_level": params.privacy_level,
                "disable_comment": params.disable_comment,
                "disable_duet": params.disable_duet,
                "disable_stitch": params.disable_stitch,
            },
            "source_info": {
                "source": "PULL_FROM_URL",
                "video_url": params.video_url,
            },
        });
        self.post("/v2/post/publish/video/init/", &[], body).await
    }

    /// Fetch the current status of a publish.
    pub async fn publish_status(&self, publish_id: &str) -> TikTokResult<PublishStatus> {
        self.post(
            "/v2/post/publish/status/fetch/",
            &[],
            json!({"publish_id": publish_id}),
        )
        .await
    }

    /// Poll a publish until `PUBLISH_COMPLETE`.
    ///
    /// Fails immediately on `FAILED` (with the platform's `fail_reason`)
    /// and fails closed with [`TikTokError::PublishTimeout`] once the
    /// attempt budget is spent.
    pub async fn wait_for_publish(&self, publish_id: &str) -> TikTokResult<PublishStatus> {
        for attempt in 1..=self.max_publish_polls {
            let status = self.publish_status(publish_id).await?;
            debug!(
                "publish {} status {} (check {}/{})",
                publish_id, status.status, attempt, self.max_publish_polls
            );
            match status.status.as_str() {
                "PUBLISH_COMPLETE" => return Ok(status),
                "FAILED" => {
                    return Err(TikTokError::PublishFailed(
                        status.fail_reason.unwrap_or_else(|| "FAILED".to_string()),
                    ));
                }
                _ => {
                    if attempt < self.max_publish_polls {
                        tokio::time::sleep(self.publish_poll_interval).await;
                    }
                }
            }
        }
        Err(TikTokError::PublishTimeout(self.max_publish_polls))
    }

    /// Init a video upload and wait for the publish to complete.
    pub async fn publish_video(&self, params: &VideoPublishParams) -> TikTokResult<PublishStatus> {
        let init = self.init_video_upload(params).await?;
        self.wait_for_publish(&init.publish_id).await
    }
}

//! Live broadcasts.

use crate::client::YouTubeClient;
use crate::error::YouTubeResult;
use crate::types::{LiveBroadcast, ListResponse};
use chrono::{DateTime, Utc};
use serde_json::json;

impl YouTubeClient {
    /// The authenticated user's broadcasts.
    pub async fn list_live_broadcasts(
        &self,
        status: &str,
    ) -> YouTubeResult<ListResponse<LiveBroadcast>> {
        self.require_token()?;
        self.get(
            "/youtube/v3/liveBroadcasts",
            &[("part", "snippet,status"), ("broadcastStatus", status)],
        )
        .await
    }

    /// Schedule a broadcast.
    pub async fn create_live_broadcast(
        &self,
        title: &str,
        scheduled_start: DateTime<Utc>,
        privacy_status: &str,
    ) -> YouTubeResult<LiveBroadcast> {
        let body = json!({
            "snippet": {
                "title": title,
                "scheduledStartTime": scheduled_start.to_rfc3339(),
            },
            "status": {"privacyStatus": privacy_status},
        });
        self.post(
            "/youtube/v3/liveBroadcasts",
            &[("part", "snippet,status")],
            &body,
        )
        .await
    }
}

//! Comment threads — read, post, reply, delete.

use crate::client::YouTubeClient;
use crate::error::YouTubeResult;
use crate::types::{CommentThread, ListResponse};
use serde_json::json;

impl YouTubeClient {
    /// Top-level comment threads on a video.
    pub async fn list_comment_threads(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> YouTubeResult<ListResponse<CommentThread>> {
        let max = max_results.to_string();
        self.get(
            "/youtube/v3/commentThreads",
            &[
                ("part", "snippet,replies"),
                ("videoId", video_id),
                ("maxResults", &max),
            ],
        )
        .await
    }

    /// Post a new top-level comment on a video.
    pub async fn post_comment_thread(
        &self,
        video_id: &str,
        text: &str,
    ) -> YouTubeResult<CommentThread> {
        let body = json!({
            "snippet": {
                "videoId": video_id,
                "topLevelComment": {"snippet": {"textOriginal": text}},
            },
        });
        self.post("/youtube/v3/commentThreads", &[("part", "snippet")], &body)
            .await
    }

    /// Reply to an existing comment.
    pub async fn reply_to_comment(
        &self,
        parent_comment_id: &str,
        text: &str,
    ) -> YouTubeResult<serde_json::Value> {
        let body = json!({
            "snippet": {"parentId": parent_comment_id, "textOriginal": text},
        });
        self.post("/youtube/v3/comments", &[("part", "snippet")], &body)
            .await
    }

    /// Delete a comment.
    pub async fn delete_comment(&self, comment_id: &str) -> YouTubeResult<()> {
        self.delete("/youtube/v3/comments", &[("id", comment_id)])
            .await
    }
}

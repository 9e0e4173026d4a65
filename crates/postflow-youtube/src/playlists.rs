//! Playlist CRUD and item insertion.

use crate::client::YouTubeClient;
use crate::error::YouTubeResult;
use crate::types::{ListResponse, Playlist};
use serde_json::json;

impl YouTubeClient {
    /// Create a playlist.
    pub async fn create_playlist(
        &self,
        title: &str,
        description: &str,
        privacy_status: &str,
    ) -> YouTubeResult<Playlist> {
        let body = json!({
            "snippet": {"title": title, "description": description},
            "status": {"privacyStatus": privacy_status},
        });
        self.post(
            "/youtube/v3/playlists",
            &[("part", "snippet,status")],
            &body,
        )
        .await
    }

    /// The authenticated user's playlists.
    pub async fn list_playlists(&self, max_results: u32) -> YouTubeResult<ListResponse<Playlist>> {
        self.require_token()?;
        let max = max_results.to_string();
        self.get(
            "/youtube/v3/playlists",
            &[
                ("part", "snippet,status"),
                ("mine", "true"),
                ("maxResults", &max),
            ],
        )
        .await
    }

    /// Delete a playlist.
    pub async fn delete_playlist(&self, playlist_id: &str) -> YouTubeResult<()> {
        self.delete("/youtube/v3/playlists", &[("id", playlist_id)])
            .await
    }

    /// Append a video to a playlist.
    pub async fn add_playlist_item(
        &self,
        playlist_id: &str,
        video_id: &str,
    ) -> YouTubeResult<serde_json::Value> {
        let body = json!({
            "snippet": {
                "playlistId": playlist_id,
                "resourceId": {"kind": "youtube#video", "videoId": video_id},
            },
        });
        self.post("/youtube/v3/playlistItems", &[("part", "snippet")], &body)
            .await
    }
}

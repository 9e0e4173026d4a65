//! Search.

use crate::client::YouTubeClient;
use crate::error::YouTubeResult;
use crate::types::{ListResponse, SearchResult};

impl YouTubeClient {
    /// Search videos/channels/playlists.
    ///
    /// `resource_type` is `video`, `channel`, or `playlist`; `order` is
    /// `date`, `relevance`, `viewCount`, or `rating`.
    pub async fn search(
        &self,
        query: &str,
        resource_type: &str,
        order: &str,
        max_results: u32,
    ) -> YouTubeResult<ListResponse<SearchResult>> {
        let max = max_results.to_string();
        self.get(
            "/youtube/v3/search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", resource_type),
                ("order", order),
                ("maxResults", &max),
            ],
        )
        .await
    }
}

//! Hashtag id search and recent media.

use crate::client::InstagramClient;
use crate::error::InstagramResult;
use crate::types::{Hashtag, Media, Paged};

impl InstagramClient {
    /// Resolve a hashtag name to its id.
    pub async fn search_hashtag(&self, query: &str) -> InstagramResult<Paged<Hashtag>> {
        self.get(
            "ig_hashtag_search",
            &[("user_id", self.ig_user_id()), ("q", query)],
        )
        .await
    }

    /// Recent media published under a hashtag.
    pub async fn get_hashtag_media(&self, hashtag_id: &str) -> InstagramResult<Paged<Media>> {
        self.get(
            &format!("{hashtag_id}/recent_media"),
            &[
                ("user_id", self.ig_user_id()),
                ("fields", "id,caption,media_type,permalink"),
            ],
        )
        .await
    }
}

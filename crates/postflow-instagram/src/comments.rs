//! Comment reading and replies.

use crate::client::InstagramClient;
use crate::error::InstagramResult;
use crate::types::{Comment, MediaId, Paged};
use serde_json::json;

impl InstagramClient {
    /// Comments on a media object.
    pub async fn get_comments(&self, media_id: &str) -> InstagramResult<Paged<Comment>> {
        self.get(
            &format!("{media_id}/comments"),
            &[("fields", "id,text,username,timestamp")],
        )
        .await
    }

    /// Reply to a comment.
    pub async fn reply_to_comment(
        &self,
        comment_id: &str,
        message: &str,
    ) -> InstagramResult<MediaId> {
        self.post(&format!("{comment_id}/replies"), json!({"message": message}))
            .await
    }
}

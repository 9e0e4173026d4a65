//! Comment reading and replies.

use crate::client::FacebookClient;
use crate::error::GraphResult;
use crate::types::{Comment, CreatedObject, Paged};
use serde_json::json;

impl FacebookClient {
    /// Comments on a post.
    pub async fn get_comments(&self, post_id: &str) -> GraphResult<Paged<Comment>> {
        self.get(
            &format!("{post_id}/comments"),
            &[("fields", "id,message,from,created_time")],
        )
        .await
    }

    /// Reply to a comment (creates a nested comment).
    pub async fn reply_to_comment(
        &self,
        comment_id: &str,
        message: &str,
    ) -> GraphResult<CreatedObject> {
        self.post(
            &format!("{comment_id}/comments"),
            json!({"message": message}),
        )
        .await
    }
}

//! List management.

use crate::client::TwitterClient;
use crate::error::TwitterResult;
use crate::types::{List, Page, Single};
use serde_json::json;

impl TwitterClient {
    /// Create a list.
    pub async fn create_list(
        &self,
        name: &str,
        description: Option<&str>,
        private: bool,
    ) -> TwitterResult<List> {
        let mut body = json!({"name": name, "private": private});
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        let created: Single<List> = self.post("/2/lists", &body).await?;
        Ok(created.data)
    }

    /// Add a member to a list.
    pub async fn add_list_member(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> TwitterResult<serde_json::Value> {
        self.post(
            &format!("/2/lists/{list_id}/members"),
            &json!({"user_id": user_id}),
        )
        .await
    }

    /// Lists owned by the authenticated user.
    pub async fn get_owned_lists(&self) -> TwitterResult<Page<List>> {
        let me = self.me().await?;
        self.get(
            &format!("/2/users/{}/owned_lists", me.id),
            &[("list.fields", "id,name,private")],
        )
        .await
    }
}

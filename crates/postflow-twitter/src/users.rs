//! User lookup and follow management.

use crate::client::TwitterClient;
use crate::error::TwitterResult;
use crate::types::{Page, Single, User};
use serde_json::json;

const USER_FIELDS: &str = "id,name,username,description,public_metrics";

impl TwitterClient {
    /// The authenticated user.
    pub async fn me(&self) -> TwitterResult<User> {
        let me: Single<User> = self
            .get("/2/users/me", &[("user.fields", USER_FIELDS)])
            .await?;
        Ok(me.data)
    }

    /// Look up a user by id.
    pub async fn get_user(&self, user_id: &str) -> TwitterResult<User> {
        let user: Single<User> = self
            .get(
                &format!("/2/users/{user_id}"),
                &[("user.fields", USER_FIELDS)],
            )
            .await?;
        Ok(user.data)
    }

    /// Look up a user by @username (without the `@`).
    pub async fn get_user_by_username(&self, username: &str) -> TwitterResult<User> {
        let user: Single<User> = self
            .get(
                &format!("/2/users/by/username/{username}"),
                &[("user.fields", USER_FIELDS)],
            )
            .await?;
        Ok(user.data)
    }

    /// Followers of a user.
    pub async fn get_followers(&self, user_id: &str, max_results: u32) -> TwitterResult<Page<User>> {
        let max = max_results.to_string();
        self.get(
            &format!("/2/users/{user_id}/followers"),
            &[("max_results", max.as_str()), ("user.fields", USER_FIELDS)],
        )
        .await
    }

    /// Accounts a user follows.
    pub async fn get_following(&self, user_id: &str, max_results: u32) -> TwitterResult<Page<User>> {
        let max = max_results.to_string();
        self.get(
            &format!("/2/users/{user_id}/following"),
            &[("max_results", max.as_str()), ("user.fields", USER_FIELDS)],
        )
        .await
    }

    /// Follow a user (as the authenticated user).
    pub async fn follow(&self, target_user_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.post(
            &format!("/2/users/{}/following", me.id),
            &json!({"target_user_id": target_user_id}),
        )
        .await
    }

    /// Unfollow a user.
    pub async fn unfollow(&self, target_user_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.delete(&format!("/2/users/{}/following/{}", me.id, target_user_id))
            .await
    }
}

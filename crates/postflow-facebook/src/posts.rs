//! Page identity and feed post CRUD, including scheduled publishing.

use crate::client::FacebookClient;
use crate::error::GraphResult;
use crate::types::{CreatedObject, PageInfo, Paged, Post, PostParams};
use chrono::{DateTime, Utc};
use serde_json::json;

const POST_FIELDS: &str = "id,message,created_time,permalink_url,is_published";

impl FacebookClient {
    /// Identity of the token's subject (`/me`).
    pub async fn get_me(&self) -> GraphResult<PageInfo> {
        self.get("me", &[("fields", "id,name,category")]).await
    }

    /// Page fields for the configured page.
    pub async fn get_page(&self) -> GraphResult<PageInfo> {
        self.get(
            self.page_id(),
            &[("fields", "id,name,category,fan_count,about")],
        )
        .await
    }

    /// Publish a feed post immediately.
    pub async fn create_post(&self, params: &PostParams) -> GraphResult<CreatedObject> {
        let mut body = json!({"message": params.message});
        if let Some(ref link) = params.link {
            body["link"] = json!(link);
        }
        self.post(&format!("{}/feed", self.page_id()), body).await
    }

    /// Schedule a feed post for future publication.
    ///
    /// Thin composition over [`create_post`](Self::create_post):
    /// `published=false` plus the Unix `scheduled_publish_time`. Facebook
    /// only accepts times between 10 minutes and 75 days out; that window
    /// is not validated here — the API rejects out-of-range times itself.
    pub async fn schedule_post(
        &self,
        params: &PostParams,
        publish_at: DateTime<Utc>,
    ) -> GraphResult<CreatedObject> {
        let mut body = json!({
            "message": params.message,
            "published": false,
            "scheduled_publish_time": publish_at.timestamp(),
        });
        if let Some(ref link) = params.link {
            body["link"] = json!(link);
        }
        self.post(&format!("{}/feed", self.page_id()), body).await
    }

    /// List recent posts on the page feed.
    pub async fn get_posts(&self, limit: Option<u32>) -> GraphResult<Paged<Post>> {
        let limit = limit.unwrap_or(25).to_string();
        self.get(
            &format!("{}/posts", self.page_id()),
            &[("fields", POST_FIELDS), ("limit", &limit)],
        )
        .await
    }

    /// Read one post.
    pub async fn get_post(&self, post_id: &str) -> GraphResult<Post> {
        self.get(post_id, &[("fields", POST_FIELDS)]).await
    }

    /// Update a post's message.
    pub async fn update_post(&self, post_id: &str, message: &str) -> GraphResult<serde_json::Value> {
        self.post(post_id, json!({"message": message})).await
    }

    /// Delete a post.
    pub async fn delete_post(&self, post_id: &str) -> GraphResult<serde_json::Value> {
        self.delete(post_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FacebookConfig;
    use axum::{routing::post, Json, Router};
    use chrono::TimeZone;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn schedule_post_sends_epoch_and_published_false() {
        let app = Router::new().route(
            "/v18.0/99/feed",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["published"], false);
                assert_eq!(body["scheduled_publish_time"], 1735732800);
                assert_eq!(body["access_token"], "EAAGtoken");
                Json(json!({"id": "99_1"}))
            }),
        );
        let base = spawn(app).await;
        let client = FacebookClient::new(&FacebookConfig {
            access_token: "EAAGtoken".into(),
            page_id: "99".into(),
            base_url: base,
            ..Default::default()
        })
        .unwrap();

        let publish_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let created = client
            .schedule_post(
                &PostParams {
                    message: "new year promo".into(),
                    link: None,
                },
                publish_at,
            )
            .await
            .unwrap();
        assert_eq!(created.id, "99_1");
    }

    #[tokio::test]
    async fn create_post_returns_ids() {
        let app = Router::new().route(
            "/v18.0/99/feed",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["message"], "hello");
                assert!(body.get("published").is_none());
                Json(json!({"id": "99_2", "post_id": "2"}))
            }),
        );
        let base = spawn(app).await;
        let client = FacebookClient::new(&FacebookConfig {
            access_token: "EAAGtoken".into(),
            page_id: "99".into(),
            base_url: base,
            ..Default::default()
        })
        .unwrap();

        let created = client
            .create_post(&PostParams {
                message: "hello".into(),
                link: None,
            })
            .await
            .unwrap();
        assert_eq!(created.post_id.as_deref(), Some("2"));
    }
}

//! Likes, retweets, bookmarks.
//!
//! All of these endpoints are scoped by the acting user's id, so every
//! call performs a `users/me` lookup first.

use crate::client::TwitterClient;
use crate::error::TwitterResult;
use serde_json::json;

impl TwitterClient {
    /// Like a tweet.
    pub async fn like(&self, tweet_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.post(
            &format!("/2/users/{}/likes", me.id),
            &json!({"tweet_id": tweet_id}),
        )
        .await
    }

    /// Remove a like.
    pub async fn unlike(&self, tweet_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.delete(&format!("/2/users/{}/likes/{}", me.id, tweet_id))
            .await
    }

    /// Retweet a tweet.
    pub async fn retweet(&self, tweet_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.post(
            &format!("/2/users/{}/retweets", me.id),
            &json!({"tweet_id": tweet_id}),
        )
        .await
    }

    /// Undo a retweet.
    pub async fn unretweet(&self, tweet_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.delete(&format!("/2/users/{}/retweets/{}", me.id, tweet_id))
            .await
    }

    /// Bookmark a tweet.
    pub async fn bookmark(&self, tweet_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.post(
            &format!("/2/users/{}/bookmarks", me.id),
            &json!({"tweet_id": tweet_id}),
        )
        .await
    }

    /// Remove a bookmark.
    pub async fn remove_bookmark(&self, tweet_id: &str) -> TwitterResult<serde_json::Value> {
        let me = self.me().await?;
        self.delete(&format!("/2/users/{}/bookmarks/{}", me.id, tweet_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::TwitterClient;
    use crate::types::TwitterConfig;
    use axum::{
        routing::{get, post},
        Json, Router,
    };
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn like_resolves_me_first() {
        let me_hits = Arc::new(AtomicU32::new(0));
        let hits = me_hits.clone();
        let app = Router::new()
            .route(
                "/2/users/me",
                get(move || {
                    hits.fetch_add(1, Ordering::SeqCst);
                    async { Json(json!({"data": {"id": "77", "name": "A", "username": "a"}})) }
                }),
            )
            .route(
                "/2/users/77/likes",
                post(|Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(body["tweet_id"], "900");
                    Json(json!({"data": {"liked": true}}))
                }),
            );
        let base = spawn(app).await;
        let client = TwitterClient::new(&TwitterConfig {
            bearer_token: "AAAAbearer".into(),
            base_url: base,
            ..Default::default()
        })
        .unwrap();

        let resp = client.like("900").await.unwrap();
        assert_eq!(resp["data"]["liked"], true);
        assert_eq!(me_hits.load(Ordering::SeqCst), 1);
    }
}

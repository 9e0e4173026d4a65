//! Tweet CRUD and recent search.

use crate::client::TwitterClient;
use crate::error::TwitterResult;
use crate::types::{Page, Single, Tweet, TweetParams};
use serde_json::json;

const TWEET_FIELDS: &str = "id,text,author_id,created_at,public_metrics";

impl TwitterClient {
    /// Post a tweet.
    pub async fn create_tweet(&self, params: &TweetParams) -> TwitterResult<Tweet> {
        let mut body = json!({"text": params.text});
        if let Some(ref reply_to) = params.in_reply_to {
            body["reply"] = json!({"in_reply_to_tweet_id": reply_to});
        }
        if let Some(ref quote) = params.quote_tweet_id {
            body["quote_tweet_id"] = json!(quote);
        }
        if !params.media_ids.is_empty() {
            body["media"] = json!({"media_ids": params.media_ids});
        }
        let created: Single<Tweet> = self.post("/2/tweets", &body).await?;
        Ok(created.data)
    }

    /// Delete a tweet.
    pub async fn delete_tweet(&self, tweet_id: &str) -> TwitterResult<serde_json::Value> {
        self.delete(&format!("/2/tweets/{tweet_id}")).await
    }

    /// Read one tweet.
    pub async fn get_tweet(&self, tweet_id: &str) -> TwitterResult<Tweet> {
        let tweet: Single<Tweet> = self
            .get(
                &format!("/2/tweets/{tweet_id}"),
                &[("tweet.fields", TWEET_FIELDS)],
            )
            .await?;
        Ok(tweet.data)
    }

    /// Search tweets from the last seven days.
    pub async fn search_recent(&self, query: &str, max_results: u32) -> TwitterResult<Page<Tweet>> {
        let max = max_results.to_string();
        self.get(
            "/2/tweets/search/recent",
            &[
                ("query", query),
                ("max_results", max.as_str()),
                ("tweet.fields", TWEET_FIELDS),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TwitterConfig;
    use axum::{routing::post, Json, Router};
    use serde_json::json;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn create_tweet_with_reply_and_media() {
        let app = Router::new().route(
            "/2/tweets",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["text"], "launch day");
                assert_eq!(body["reply"]["in_reply_to_tweet_id"], "100");
                assert_eq!(body["media"]["media_ids"][0], "m1");
                Json(json!({"data": {"id": "201", "text": "launch day"}}))
            }),
        );
        let base = spawn(app).await;
        let client = TwitterClient::new(&TwitterConfig {
            bearer_token: "AAAAbearer".into(),
            base_url: base,
            ..Default::default()
        })
        .unwrap();

        let tweet = client
            .create_tweet(&TweetParams {
                text: "launch day".into(),
                in_reply_to: Some("100".into()),
                media_ids: vec!["m1".into()],
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(tweet.id, "201");
    }
}

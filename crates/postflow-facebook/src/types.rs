//! Shared types for the Facebook Graph client.

use serde::{Deserialize, Serialize};

/// Configuration for a Facebook Graph client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookConfig {
    /// Page access token.
    pub access_token: String,
    /// Page id the client publishes as.
    pub page_id: String,
    /// Graph API version segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Base URL override (tests / proxies).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_version() -> String {
    "v18.0".to_string()
}

fn default_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for FacebookConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            page_id: String::new(),
            api_version: default_api_version(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Page (or user) identity fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub fan_count: Option<u64>,
    #[serde(default)]
    pub about: Option<String>,
}

/// Parameters for creating a feed post.
#[derive(Debug, Clone, Default)]
pub struct PostParams {
    pub message: String,
    /// Optional link to attach.
    pub link: Option<String>,
}

/// Id payload returned by create/upload calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedObject {
    pub id: String,
    /// Feed posts also return a `post_id` (`{page_id}_{post_id}`).
    #[serde(default)]
    pub post_id: Option<String>,
}

/// A feed post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub permalink_url: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub from: Option<serde_json::Value>,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// A Page Inbox conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub updated_time: Option<String>,
    #[serde(default)]
    pub participants: Option<serde_json::Value>,
    #[serde(default)]
    pub unread_count: Option<u32>,
}

/// A message inside a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub from: Option<serde_json::Value>,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// One metric entry of an insights response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightMetric {
    pub name: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub values: Vec<InsightValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightValue {
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Graph list envelope: `{"data": [...], "paging": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub paging: Option<serde_json::Value>,
}

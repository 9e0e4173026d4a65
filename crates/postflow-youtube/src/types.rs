//! Shared types for the YouTube client.

use serde::{Deserialize, Serialize};

/// Configuration for a YouTube client.
///
/// At least one of `access_token` / `api_key` is required. Key-only
/// clients get read-only access; mutations and Analytics need the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeConfig {
    /// OAuth access token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// API key for quota-based read access.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Data API base URL override (tests / proxies).
    #[serde(default = "default_api_base")]
    pub base_url: String,
    /// Upload host override.
    #[serde(default = "default_upload_base")]
    pub upload_base_url: String,
    /// Analytics host override.
    #[serde(default = "default_analytics_base")]
    pub analytics_base_url: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_base() -> String {
    "https://www.googleapis.com".to_string()
}

fn default_upload_base() -> String {
    "https://www.googleapis.com".to_string()
}

fn default_analytics_base() -> String {
    "https://youtubeanalytics.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_key: None,
            base_url: default_api_base(),
            upload_base_url: default_upload_base(),
            analytics_base_url: default_analytics_base(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Data API list envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub page_info: Option<serde_json::Value>,
}

/// A channel resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<serde_json::Value>,
    #[serde(default)]
    pub statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub subscriber_count: Option<String>,
    #[serde(default)]
    pub video_count: Option<String>,
}

/// A video resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<serde_json::Value>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

/// Metadata for a resumable upload session.
#[derive(Debug, Clone, Default)]
pub struct UploadParams {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: Option<String>,
    /// `private`, `unlisted`, or `public`.
    pub privacy_status: String,
    /// MIME type of the bytes that will be sent to the session URL.
    pub content_type: Option<String>,
}

/// A comment thread resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThread {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<serde_json::Value>,
    #[serde(default)]
    pub replies: Option<serde_json::Value>,
}

/// A playlist resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

/// A search result; the id is an object keyed by resource kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: SearchResultId,
    #[serde(default)]
    pub snippet: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub playlist_id: Option<String>,
}

/// A live broadcast resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveBroadcast {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<serde_json::Value>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

/// Analytics v2 report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    #[serde(default)]
    pub column_headers: Vec<serde_json::Value>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

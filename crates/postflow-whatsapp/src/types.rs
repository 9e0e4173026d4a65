//! Shared types for the Evolution API client.

use serde::{Deserialize, Serialize};

/// Configuration for an Evolution API client.
///
/// One client is bound to one instance name; the same server can host many
/// instances, each with its own client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionConfig {
    /// Base URL of the Evolution API server, e.g. `https://evo.example.com`.
    pub base_url: String,
    /// Static API key sent in the `apikey` header.
    pub api_key: String,
    /// Instance name the client operates on.
    pub instance: String,
    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            instance: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Connection state of an instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionState {
    pub instance: ConnectionStateInstance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStateInstance {
    pub instance_name: String,
    /// `open`, `connecting`, or `close`.
    pub state: String,
}

/// QR pairing payload from `GET /instance/connect/{instance}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    /// Pairing code for phone-number linking, when offered.
    #[serde(default)]
    pub pairing_code: Option<String>,
    /// Raw QR payload.
    #[serde(default)]
    pub code: Option<String>,
    /// QR image as a base64 data URL, ready to render.
    #[serde(default)]
    pub base64: Option<String>,
}

/// Parameters for `send_text`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTextParams {
    /// Recipient number in international format, digits only.
    pub number: String,
    pub text: String,
    /// Per-message delay in milliseconds, applied server-side before the
    /// send. Spacing between bulk sends is the caller's responsibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub link_preview: bool,
}

/// Media kind accepted by `send_media`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
}

/// Parameters for `send_media`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMediaParams {
    pub number: String,
    #[serde(rename = "mediatype")]
    pub media_kind: MediaKind,
    /// Media source: public URL or base64 payload.
    pub media: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "mimetype")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Per-message delay in milliseconds (see [`SendTextParams::delay`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

/// Key/message pair returned by send operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessage {
    pub key: MessageKey,
    #[serde(default)]
    pub status: Option<String>,
    /// Raw message payload as stored by the server.
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    pub remote_jid: String,
    pub from_me: bool,
    pub id: String,
}

/// A WhatsApp contact known to the instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub push_name: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

/// A group the instance participates in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub participants: Option<Vec<serde_json::Value>>,
}

/// Registration check result from `chat/whatsappNumbers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberCheck {
    pub number: String,
    pub exists: bool,
    #[serde(default)]
    pub jid: Option<String>,
}

/// Webhook registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSettings {
    pub enabled: bool,
    pub url: String,
    pub events: Vec<String>,
    #[serde(default)]
    pub webhook_by_events: bool,
}

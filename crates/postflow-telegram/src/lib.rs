//! # postflow-telegram
//!
//! Telegram Bot API client.
//!
//! The bot token travels in the URL path (`{base}/bot{token}/{method}`);
//! every call is a POST with a JSON body. Responses arrive in the Bot API
//! envelope (`ok` / `result` / `description`) and are unwrapped to the
//! `result` payload or surfaced as an error carrying the `description`.
//!
//! - **Messaging** — text, photo, video, document, media groups; forward,
//!   edit, delete
//! - **Chat management** — chat info, member counts and lookups, ban/unban,
//!   invite links
//! - **Webhooks & updates** — set/get/delete webhook, `getUpdates` polling
//! - **Commands** — `setMyCommands`
//! - **Files** — metadata lookup and download-URL resolution
//! - **Keyboards** — static inline / reply keyboard builders

pub mod chat;
pub mod client;
pub mod error;
pub mod files;
pub mod keyboards;
pub mod messaging;
pub mod types;
pub mod updates;
pub mod webhooks;

pub use client::TelegramClient;
pub use error::{TelegramError, TelegramResult};
pub use types::TelegramConfig;

/// Build a [`TelegramClient`] from a config.
pub fn create_telegram_client(config: &TelegramConfig) -> TelegramResult<TelegramClient> {
    TelegramClient::new(config)
}

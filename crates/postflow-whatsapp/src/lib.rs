//! # postflow-whatsapp
//!
//! Client for a self-hosted [Evolution API](https://doc.evolution-api.com/)
//! server, which bridges WhatsApp sessions ("instances").
//!
//! Authentication is a static API key sent in an `apikey` header.
//!
//! - **Instances** — create, connection state, QR pairing, restart, logout,
//!   delete, list
//! - **Messaging** — text and media sends; both accept a `delay` that the
//!   API applies per message. Spacing out bulk sends is the caller's job —
//!   the client never throttles.
//! - **Chats** — contacts, groups, message history, number registration
//!   checks
//! - **Webhooks** — register and inspect the event webhook

pub mod chats;
pub mod client;
pub mod error;
pub mod instances;
pub mod messaging;
pub mod types;
pub mod webhooks;

pub use client::EvolutionClient;
pub use error::{EvolutionError, EvolutionResult};
pub use types::EvolutionConfig;

/// Build an [`EvolutionClient`] from a config.
pub fn create_whatsapp_client(config: &EvolutionConfig) -> EvolutionResult<EvolutionClient> {
    EvolutionClient::new(config)
}

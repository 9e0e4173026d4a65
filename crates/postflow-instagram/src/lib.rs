//! # postflow-instagram
//!
//! Instagram Graph API client.
//!
//! Publishing is two-phase: create a media container, then publish it.
//! Video and reel containers process asynchronously — the client polls the
//! container's `status_code` every 2 seconds for at most 30 attempts and
//! fails closed on timeout or an `ERROR` status.
//!
//! - **Account** — profile info, media and story listings
//! - **Publishing** — image/video/reel/story containers, carousels,
//!   `create_and_publish`
//! - **Comments** — read and reply
//! - **Insights** — media and account metrics (see [`metrics`])
//! - **Hashtags** — id search and recent media

pub mod account;
pub mod client;
pub mod comments;
pub mod error;
pub mod hashtags;
pub mod insights;
pub mod publish;
pub mod types;

pub use client::InstagramClient;
pub use error::{InstagramError, InstagramResult};
pub use insights::metrics;
pub use types::InstagramConfig;

/// Build an [`InstagramClient`] from a config.
pub fn create_instagram_client(config: &InstagramConfig) -> InstagramResult<InstagramClient> {
    InstagramClient::new(config)
}

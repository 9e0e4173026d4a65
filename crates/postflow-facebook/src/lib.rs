//! # postflow-facebook
//!
//! Facebook Graph API client for Page publishing and inbox management.
//!
//! Graph auth conventions apply: the access token rides as a query
//! parameter on GET/DELETE and inside the JSON body on POST.
//!
//! - **Identity** — `/me` and Page fields
//! - **Posts** — create, list, read, update, delete; scheduled publishing
//!   via `published=false` + `scheduled_publish_time`
//! - **Media** — photo/video upload by URL
//! - **Insights** — page and post metrics (see [`metrics`])
//! - **Comments** — read and reply
//! - **Page Inbox** — conversation listing and message send

pub mod client;
pub mod comments;
pub mod error;
pub mod inbox;
pub mod insights;
pub mod media;
pub mod posts;
pub mod types;

pub use client::FacebookClient;
pub use error::{GraphError, GraphResult};
pub use insights::metrics;
pub use types::FacebookConfig;

/// Build a [`FacebookClient`] from a config.
pub fn create_facebook_client(config: &FacebookConfig) -> GraphResult<FacebookClient> {
    FacebookClient::new(config)
}

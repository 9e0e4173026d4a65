//! # postflow-core
//!
//! Shared HTTP plumbing for the platform client crates.
//!
//! Every platform client builds its `reqwest::Client` through
//! [`build_http_client`] and performs its round trips through [`send`],
//! which collects the status code and body text without interpreting
//! them — error-envelope parsing is platform-specific and lives in each
//! client crate.

pub mod http;
pub mod query;

pub use http::{build_http_client, mask_secret, send, HttpResponse};
pub use query::{encode_param, sorted_query};

//! Low-level HTTP client for the Instagram Graph API.
//!
//! Same Graph conventions as the Facebook client: token as query parameter
//! on GET, inside the JSON body on POST. The container status poll cadence
//! lives here so tests can shrink it; production uses the 2 s / 30 attempt
//! defaults.

use crate::error::{InstagramError, InstagramResult};
use crate::types::InstagramConfig;
use log::debug;
use postflow_core::{build_http_client, mask_secret, send};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Interval between container status polls.
pub const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Maximum number of container status polls before failing closed.
pub const MAX_STATUS_POLLS: u32 = 30;

/// Instagram Graph API client.
#[derive(Debug, Clone)]
pub struct InstagramClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    access_token: String,
    ig_user_id: String,
    pub(crate) status_poll_interval: Duration,
    pub(crate) max_status_polls: u32,
}

impl InstagramClient {
    /// Create a new client from an [`InstagramConfig`].
    pub fn new(config: &InstagramConfig) -> InstagramResult<Self> {
        if config.access_token.is_empty() {
            return Err(InstagramError::Config(
                "access_token must not be empty".into(),
            ));
        }
        if config.ig_user_id.is_empty() {
            return Err(InstagramError::Config("ig_user_id must not be empty".into()));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            access_token: config.access_token.clone(),
            ig_user_id: config.ig_user_id.clone(),
            status_poll_interval: STATUS_POLL_INTERVAL,
            max_status_polls: MAX_STATUS_POLLS,
        })
    }

    /// Override the container status poll cadence. Intended for tests;
    /// production code keeps the defaults.
    pub fn with_status_poll(mut self, interval: Duration, max_polls: u32) -> Self {
        self.status_poll_interval = interval;
        self.max_status_polls = max_polls;
        self
    }

    /// Instagram account id the client publishes as.
    pub fn ig_user_id(&self) -> &str {
        &self.ig_user_id
    }

    /// Build a Graph URL: `{base}/{version}/{path}`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_version, path)
    }

    /// GET with the token appended as a query parameter.
    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> InstagramResult<R> {
        let url = self.url(path);
        debug!("GET {} (token {})", url, mask_secret(&self.access_token));

        let request = self
            .http
            .get(&url)
            .query(params)
            .query(&[("access_token", self.access_token.as_str())]);

        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(InstagramError::from_response(&resp));
        }
        Ok(resp.json()?)
    }

    /// POST with the token injected into the JSON body.
    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        mut body: serde_json::Value,
    ) -> InstagramResult<R> {
        let url = self.url(path);
        debug!("POST {} (token {})", url, mask_secret(&self.access_token));
        body["access_token"] = json!(self.access_token);

        let resp = send(self.http.post(&url).json(&body)).await?;
        if !resp.is_success() {
            return Err(InstagramError::from_response(&resp));
        }
        Ok(resp.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_poll_cadence_is_two_seconds_thirty_attempts() {
        assert_eq!(STATUS_POLL_INTERVAL, Duration::from_secs(2));
        assert_eq!(MAX_STATUS_POLLS, 30);

        let client = InstagramClient::new(&InstagramConfig {
            access_token: "IGQVtoken".into(),
            ig_user_id: "178414".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.status_poll_interval, STATUS_POLL_INTERVAL);
        assert_eq!(client.max_status_polls, MAX_STATUS_POLLS);
    }

    #[test]
    fn missing_user_id_rejected() {
        let err = InstagramClient::new(&InstagramConfig {
            access_token: "IGQVtoken".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("ig_user_id"));
    }
}

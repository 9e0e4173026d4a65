//! Low-level HTTP client for the Graph API.
//!
//! The access token travels as a query parameter on GET/DELETE and inside
//! the JSON body on POST, per Graph convention.

use crate::error::{GraphError, GraphResult};
use crate::types::FacebookConfig;
use log::debug;
use postflow_core::{build_http_client, mask_secret, send};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Facebook Graph API client.
#[derive(Debug, Clone)]
pub struct FacebookClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    access_token: String,
    page_id: String,
}

impl FacebookClient {
    /// Create a new client from a [`FacebookConfig`].
    pub fn new(config: &FacebookConfig) -> GraphResult<Self> {
        if config.access_token.is_empty() {
            return Err(GraphError::Config("access_token must not be empty".into()));
        }

        Ok(Self {
            http: build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            access_token: config.access_token.clone(),
            page_id: config.page_id.clone(),
        })
    }

    /// Page id the client publishes as.
    pub fn page_id(&self) -> &str {
        &self.page_id
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
    ) -> GraphResult<R> {
        let url = self.url(path);
        debug!("GET {} (token {})", url, mask_secret(&self.access_token));

        let request = self
            .http
            .get(&url)
            .query(params)
            .query(&[("access_token", self.access_token.as_str())]);

        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(GraphError::from_response(&resp));
        }
        Ok(resp.json()?)
    }

    /// POST with the token injected into the JSON body.
    pub(crate) async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        mut body: serde_json::Value,
    ) -> GraphResult<R> {
        let url = self.url(path);
        debug!("POST {} (token {})", url, mask_secret(&self.access_token));
        body["access_token"] = json!(self.access_token);

        let resp = send(self.http.post(&url).json(&body)).await?;
        if !resp.is_success() {
            return Err(GraphError::from_response(&resp));
        }
        Ok(resp.json()?)
    }

    /// DELETE with the token as a query parameter.
    pub(crate) async fn delete<R: DeserializeOwned>(&self, path: &str) -> GraphResult<R> {
        let url = self.url(path);
        debug!("DELETE {} (token {})", url, mask_secret(&self.access_token));

        let request = self
            .http
            .delete(&url)
            .query(&[("access_token", self.access_token.as_str())]);

        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(GraphError::from_response(&resp));
        }
        Ok(resp.json()?)
    }
}

//! Analytics v2 report fetches.

use crate::client::YouTubeClient;
use crate::error::{YouTubeError, YouTubeResult};
use crate::types::AnalyticsReport;
use chrono::NaiveDate;
use log::debug;
use postflow_core::send;

impl YouTubeClient {
    /// Fetch an Analytics report for the authenticated user's channel.
    ///
    /// `metrics` is comma-joined (e.g. `views,estimatedMinutesWatched`);
    /// `dimensions` is optional (e.g. `day`).
    pub async fn get_analytics_report(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        metrics: &[&str],
        dimensions: Option<&str>,
    ) -> YouTubeResult<AnalyticsReport> {
        self.require_token()?;
        let url = format!(
            "{}/v2/reports",
            self.config.analytics_base_url.trim_end_matches('/')
        );
        debug!("GET {url}");

        let start = start_date.format("%Y-%m-%d").to_string();
        let end = end_date.format("%Y-%m-%d").to_string();
        let metrics = metrics.join(",");
        let mut params = vec![
            ("ids", "channel==MINE"),
            ("startDate", start.as_str()),
            ("endDate", end.as_str()),
            ("metrics", metrics.as_str()),
        ];
        if let Some(dimensions) = dimensions {
            params.push(("dimensions", dimensions));
        }

        let request = self.apply_auth(self.http.get(&url)).query(&params);
        let resp = send(request).await?;
        if !resp.is_success() {
            return Err(YouTubeError::from_response(&resp));
        }
        Ok(resp.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::YouTubeConfig;
    use axum::extract::Query;
    use axum::{routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn report_query_and_parse() {
        let app = Router::new().route(
            "/v2/reports",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params["ids"], "channel==MINE");
                assert_eq!(params["startDate"], "2025-01-01");
                assert_eq!(params["metrics"], "views,likes");
                Json(json!({
                    "columnHeaders": [{"name": "day"}, {"name": "views"}, {"name": "likes"}],
                    "rows": [["2025-01-01", 120, 14]]
                }))
            }),
        );
        let base = spawn(app).await;
        let client = YouTubeClient::new(&YouTubeConfig {
            access_token: Some("ya29.token".into()),
            analytics_base_url: base,
            ..Default::default()
        })
        .unwrap();

        let report = client
            .get_analytics_report(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
                &["views", "likes"],
                Some("day"),
            )
            .await
            .unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.column_headers.len(), 3);
    }

    #[tokio::test]
    async fn analytics_requires_token() {
        let client = YouTubeClient::new(&YouTubeConfig {
            api_key: Some("AIzaKey".into()),
            ..Default::default()
        })
        .unwrap();
        let err = client
            .get_analytics_report(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                &["views"],
                None,
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("access token"));
    }
}

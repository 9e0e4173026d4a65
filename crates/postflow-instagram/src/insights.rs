//! Media and account insights.

use crate::client::InstagramClient;
use crate::error::InstagramResult;
use crate::types::{InsightMetric, Paged};

/// Metric names accepted by the insights endpoints.
pub mod metrics {
    /// Media-level metrics.
    pub const MEDIA: &[&str] = &["impressions", "reach", "saved", "likes", "comments", "shares"];

    /// Account-level metrics (period-scoped).
    pub const ACCOUNT: &[&str] = &[
        "impressions",
        "reach",
        "profile_views",
        "follower_count",
        "website_clicks",
    ];
}

impl InstagramClient {
    /// Insights for one media object.
    pub async fn media_insights(
        &self,
        media_id: &str,
        metric_names: &[&str],
    ) -> InstagramResult<Paged<InsightMetric>> {
        let metric = metric_names.join(",");
        self.get(&format!("{media_id}/insights"), &[("metric", &metric)])
            .await
    }

    /// Account insights for the given metrics and period (`day`, `week`,
    /// `days_28`).
    pub async fn account_insights(
        &self,
        metric_names: &[&str],
        period: &str,
    ) -> InstagramResult<Paged<InsightMetric>> {
        let metric = metric_names.join(",");
        self.get(
            &format!("{}/insights", self.ig_user_id()),
            &[("metric", &metric), ("period", period)],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_tables_are_non_empty() {
        assert!(!metrics::MEDIA.is_empty());
        assert!(!metrics::ACCOUNT.is_empty());
    }
}

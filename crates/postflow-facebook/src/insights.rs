//! Page and post insights.

use crate::client::FacebookClient;
use crate::error::GraphResult;
use crate::types::{InsightMetric, Paged};

/// Metric names accepted by the insights endpoints.
pub mod metrics {
    /// Page-level metrics.
    pub const PAGE: &[&str] = &[
        "page_impressions",
        "page_impressions_unique",
        "page_post_engagements",
        "page_fans",
        "page_views_total",
    ];

    /// Post-level metrics.
    pub const POST: &[&str] = &[
        "post_impressions",
        "post_impressions_unique",
        "post_clicks",
        "post_reactions_by_type_total",
    ];
}

impl FacebookClient {
    /// Page insights for the given metrics and period (`day`, `week`,
    /// `days_28`).
    pub async fn page_insights(
        &self,
        metric_names: &[&str],
        period: &str,
    ) -> GraphResult<Paged<InsightMetric>> {
        let metric = metric_names.join(",");
        self.get(
            &format!("{}/insights", self.page_id()),
            &[("metric", &metric), ("period", period)],
        )
        .await
    }

    /// Lifetime insights for one post.
    pub async fn post_insights(
        &self,
        post_id: &str,
        metric_names: &[&str],
    ) -> GraphResult<Paged<InsightMetric>> {
        let metric = metric_names.join(",");
        self.get(&format!("{post_id}/insights"), &[("metric", &metric)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_tables_are_non_empty_and_prefixed() {
        assert!(metrics::PAGE.iter().all(|m| m.starts_with("page_")));
        assert!(metrics::POST.iter().all(|m| m.starts_with("post_")));
    }
}

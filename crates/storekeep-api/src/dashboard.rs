// Dashboard endpoints: aggregate metrics, sales targets, activity feed.

use crate::client::{ApiClient, push_param, push_str_param};
use crate::error::Error;
use crate::types::{ActivityResponse, DashboardOverviewResponse, SalesTargetResponse};

impl ApiClient {
    /// `GET /api/dashboard`
    pub async fn dashboard_overview(&self) -> Result<DashboardOverviewResponse, Error> {
        self.get("dashboard").await
    }

    /// `GET /api/dashboard/sales-targets?period`
    ///
    /// `period` is a server-defined window name (`week`, `month`, `year`).
    pub async fn sales_targets(&self, period: &str) -> Result<Vec<SalesTargetResponse>, Error> {
        self.get_with_params("dashboard/sales-targets", &[("period", period.to_owned())])
            .await
    }

    /// `GET /api/dashboard/recent-activity?limit&activityType`
    pub async fn recent_activity(
        &self,
        limit: Option<u32>,
        activity_type: Option<&str>,
    ) -> Result<Vec<ActivityResponse>, Error> {
        let mut params = Vec::new();
        push_param(&mut params, "limit", limit);
        push_str_param(&mut params, "activityType", activity_type);
        self.get_with_params("dashboard/recent-activity", &params)
            .await
    }
}

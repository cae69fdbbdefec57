//! FinOps cost reporting.

use plx_core::entities::{CostForecast, FinopsStats, MonthlyCost, ServiceCost};

use crate::{ApiClient, ApiError, Query};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn finops_stats(&self) -> Result<FinopsStats, ApiError> {
        self.get_json("finops/stats").await
    }

    /// AWS spend grouped by service, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn aws_cost_by_service(&self) -> Result<Vec<ServiceCost>, ApiError> {
        let mut costs: Vec<ServiceCost> = self.get_list("finops/aws/by-service", "services").await?;
        costs.sort_by(|a, b| b.cost.total_cmp(&a.cost));
        Ok(costs)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn aws_monthly_costs(&self, months: Option<u32>) -> Result<Vec<MonthlyCost>, ApiError> {
        let path = Query::new()
            .push_opt("months", months)
            .apply("finops/aws/monthly");
        self.get_list(&path, "months").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn aws_cost_forecast(&self) -> Result<Vec<CostForecast>, ApiError> {
        let payload: serde_json::Value = self.get_json("finops/aws/forecast").await?;
        if payload.is_object() && payload.get("amount").is_some() {
            let single = serde_json::from_value(payload).map_err(|e| ApiError::Parse(e.to_string()))?;
            return Ok(vec![single]);
        }
        crate::envelope::extract_list(payload, "forecast")
    }
}

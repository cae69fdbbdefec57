use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "USD".to_string()
}

/// Headline cost figures for the FinOps dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FinopsStats {
    pub month_to_date: f64,
    pub forecast_month_end: f64,
    #[serde(default)]
    pub previous_month: f64,
    /// Month-over-month change, in percent.
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ServiceCost {
    pub service: String,
    pub cost: f64,
    /// Share of the total, in percent.
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MonthlyCost {
    /// `YYYY-MM`.
    pub month: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CostForecast {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub amount: f64,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

use serde::{Deserialize, Serialize};

use crate::models::development::DevelopmentPlan;
use crate::models::employee::{Employee, Role};
use crate::models::insight::Insight;
use crate::models::performance::{Feedback, PerformanceRecord};

/// A dashboard card value with its previous-period counterpart.
/// `change_percent` is 0 when the previous value is 0.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    pub current: f64,
    pub previous: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummaryView {
    pub average_rating: MetricDelta,
    pub high_performers: MetricDelta,
    pub improving: MetricDelta,
    pub on_time_delivery: MetricDelta,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformerEntry {
    pub employee: Employee,
    pub average_rating: f64,
}

/// Metric selector for the trends chart. Mirrors the dashboard dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendMetric {
    #[default]
    Rating,
    OnTimeDelivery,
    CodeQuality,
    StakeholderSatisfaction,
    ModelAccuracy,
    DataQuality,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    /// Display label, "M/YY".
    pub month: String,
    #[serde(rename = "SDE", skip_serializing_if = "Option::is_none")]
    pub sde: Option<f64>,
    #[serde(rename = "Product Manager", skip_serializing_if = "Option::is_none")]
    pub product_manager: Option<f64>,
    #[serde(rename = "ML Engineer", skip_serializing_if = "Option::is_none")]
    pub ml_engineer: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    pub role: Role,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAverage {
    pub role: Role,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummaryView {
    pub role_distribution: Vec<RoleCount>,
    pub average_by_role: Vec<RoleAverage>,
}

/// One spoke of the role profile radar chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub metric: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCell {
    pub key: String,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub employee_id: String,
    pub name: String,
    pub avatar: String,
    pub rating: u8,
    pub metrics: Vec<MetricCell>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListItem {
    #[serde(flatten)]
    pub employee: Employee,
    /// Latest-month rating, 0 when no records exist.
    pub rating: u8,
    pub month: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingPoint {
    /// Display label, "M/YY".
    pub month: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfileView {
    pub employee: Employee,
    pub performance: Vec<PerformanceRecord>,
    pub chart: Vec<RatingPoint>,
    pub insights: Vec<Insight>,
    pub development_plan: Option<DevelopmentPlan>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    #[serde(flatten)]
    pub feedback: Feedback,
    pub employee_id: String,
    pub employee_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDigest {
    pub month: String,
    pub peer: Vec<FeedbackEntry>,
    pub manager: Vec<FeedbackEntry>,
    #[serde(rename = "self")]
    pub self_assessment: Vec<FeedbackEntry>,
    pub system: Vec<FeedbackEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmitInput {
    pub employee_id: String,
    pub category: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    #[serde(flatten)]
    pub plan: DevelopmentPlan,
    pub employee_name: String,
    pub employee_role: Role,
    pub employee_avatar: String,
    pub department: String,
    /// Completed goals as a percentage, 0 for empty plans.
    pub progress: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCreateInput {
    pub name: String,
    pub description: Option<String>,
}

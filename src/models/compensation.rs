use serde::{Deserialize, Serialize};

/// One fiscal year of compensation for an employee. The rating recorded
/// here is the one that justified the bonus tier for that year; it is
/// sampled independently of the monthly performance history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationRecord {
    pub id: String,
    pub employee_id: String,
    pub year: i32,
    pub base_salary: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_options: Option<i64>,
    pub total_compensation: i64,
    pub performance_rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

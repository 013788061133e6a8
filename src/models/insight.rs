use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Strength,
    Improvement,
    Trend,
    Recommendation,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Strength => "strength",
            InsightCategory::Improvement => "improvement",
            InsightCategory::Trend => "trend",
            InsightCategory::Recommendation => "recommendation",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "strength" => Ok(InsightCategory::Strength),
            "improvement" => Ok(InsightCategory::Improvement),
            "trend" => Ok(InsightCategory::Trend),
            "recommendation" => Ok(InsightCategory::Recommendation),
            _ => Err(format!("Invalid insight category: {}", s)),
        }
    }
}

/// A rule-derived, templated observation about an employee. Confidence is a
/// random value within a fixed band per category, not a statistical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub employee_id: String,
    /// RFC 3339 timestamp of when the insight was derived.
    pub date: String,
    pub title: String,
    pub description: String,
    pub category: InsightCategory,
    /// 0-100
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_metrics: Option<Vec<String>>,
}

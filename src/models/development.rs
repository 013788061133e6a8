use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Technical,
    Soft,
    Leadership,
    Domain,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Technical => "technical",
            GoalCategory::Soft => "soft",
            GoalCategory::Leadership => "leadership",
            GoalCategory::Domain => "domain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "not-started")]
    NotStarted,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not-started",
            GoalStatus::InProgress => "in-progress",
            GoalStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentGoal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub status: GoalStatus,
    /// YYYY-MM-DD
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentPlan {
    pub id: String,
    pub employee_id: String,
    /// YYYY-MM-DD
    pub created: String,
    pub goals: Vec<DevelopmentGoal>,
}

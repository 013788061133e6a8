use serde::{Deserialize, Serialize};

use crate::models::employee::Role;

/// One monthly appraisal record for an employee. Exactly one record exists
/// per (employee, month) pair within a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub id: String,
    pub employee_id: String,
    /// YYYY-MM
    pub month: String,
    /// Overall rating on the 1-5 scale.
    pub rating: u8,
    pub metrics: RoleMetrics,
    pub feedback: Vec<Feedback>,
}

/// Role-shaped metrics bag. Each role carries its own fixed metric record,
/// so cross-role metric leakage is impossible by construction. The untagged
/// serialization keeps the persisted JSON flat, matching the layout views
/// and the store slot expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleMetrics {
    Engineer(EngineerMetrics),
    ProductManager(ProductManagerMetrics),
    MlEngineer(MlEngineerMetrics),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerMetrics {
    pub code_quality: i64,
    pub velocity: i64,
    pub commit_frequency: i64,
    pub pull_requests_reviewed: i64,
    pub bugs_introduced: i64,
    pub on_time_delivery: i64,
    pub complexity_score: i64,
    pub test_coverage: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductManagerMetrics {
    pub product_impact: i64,
    pub stakeholder_satisfaction: i64,
    pub requirement_quality: i64,
    pub decisions_timeliness: i64,
    pub on_time_delivery: i64,
    pub feature_delivery_rate: i64,
    pub roadmap_adherence: i64,
    pub market_analysis_score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlEngineerMetrics {
    pub model_accuracy: i64,
    pub experiment_velocity: i64,
    pub paper_contributions: i64,
    pub data_quality: i64,
    pub model_deployments: i64,
    pub pipeline_uptime: i64,
    pub algorithm_complexity: i64,
}

pub const ENGINEER_METRIC_KEYS: [&str; 8] = [
    "codeQuality",
    "velocity",
    "commitFrequency",
    "pullRequestsReviewed",
    "bugsIntroduced",
    "onTimeDelivery",
    "complexityScore",
    "testCoverage",
];

pub const PRODUCT_MANAGER_METRIC_KEYS: [&str; 8] = [
    "productImpact",
    "stakeholderSatisfaction",
    "requirementQuality",
    "decisionsTimeliness",
    "onTimeDelivery",
    "featureDeliveryRate",
    "roadmapAdherence",
    "marketAnalysisScore",
];

pub const ML_ENGINEER_METRIC_KEYS: [&str; 7] = [
    "modelAccuracy",
    "experimentVelocity",
    "paperContributions",
    "dataQuality",
    "modelDeployments",
    "pipelineUptime",
    "algorithmComplexity",
];

impl RoleMetrics {
    pub fn role(&self) -> Role {
        match self {
            RoleMetrics::Engineer(_) => Role::Sde,
            RoleMetrics::ProductManager(_) => Role::ProductManager,
            RoleMetrics::MlEngineer(_) => Role::MlEngineer,
        }
    }

    /// Metric keys in generation order, camelCase as persisted.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            RoleMetrics::Engineer(_) => &ENGINEER_METRIC_KEYS,
            RoleMetrics::ProductManager(_) => &PRODUCT_MANAGER_METRIC_KEYS,
            RoleMetrics::MlEngineer(_) => &ML_ENGINEER_METRIC_KEYS,
        }
    }

    /// Look up a metric by its persisted key. Views key role membership off
    /// metric presence, so absence (None) is meaningful here.
    pub fn get(&self, key: &str) -> Option<f64> {
        match self {
            RoleMetrics::Engineer(m) => match key {
                "codeQuality" => Some(m.code_quality as f64),
                "velocity" => Some(m.velocity as f64),
                "commitFrequency" => Some(m.commit_frequency as f64),
                "pullRequestsReviewed" => Some(m.pull_requests_reviewed as f64),
                "bugsIntroduced" => Some(m.bugs_introduced as f64),
                "onTimeDelivery" => Some(m.on_time_delivery as f64),
                "complexityScore" => Some(m.complexity_score as f64),
                "testCoverage" => Some(m.test_coverage as f64),
                _ => None,
            },
            RoleMetrics::ProductManager(m) => match key {
                "productImpact" => Some(m.product_impact as f64),
                "stakeholderSatisfaction" => Some(m.stakeholder_satisfaction as f64),
                "requirementQuality" => Some(m.requirement_quality as f64),
                "decisionsTimeliness" => Some(m.decisions_timeliness as f64),
                "onTimeDelivery" => Some(m.on_time_delivery as f64),
                "featureDeliveryRate" => Some(m.feature_delivery_rate as f64),
                "roadmapAdherence" => Some(m.roadmap_adherence as f64),
                "marketAnalysisScore" => Some(m.market_analysis_score as f64),
                _ => None,
            },
            RoleMetrics::MlEngineer(m) => match key {
                "modelAccuracy" => Some(m.model_accuracy as f64),
                "experimentVelocity" => Some(m.experiment_velocity as f64),
                "paperContributions" => Some(m.paper_contributions as f64),
                "dataQuality" => Some(m.data_quality as f64),
                "modelDeployments" => Some(m.model_deployments as f64),
                "pipelineUptime" => Some(m.pipeline_uptime as f64),
                "algorithmComplexity" => Some(m.algorithm_complexity as f64),
                _ => None,
            },
        }
    }

    /// (key, value) pairs in generation order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        self.keys()
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Peer,
    Manager,
    #[serde(rename = "self")]
    SelfAssessment,
    System,
}

impl FeedbackCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::Peer => "peer",
            FeedbackCategory::Manager => "manager",
            FeedbackCategory::SelfAssessment => "self",
            FeedbackCategory::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "peer" => Ok(FeedbackCategory::Peer),
            "manager" => Ok(FeedbackCategory::Manager),
            "self" => Ok(FeedbackCategory::SelfAssessment),
            "system" => Ok(FeedbackCategory::System),
            _ => Err(format!("Invalid feedback category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub from: String,
    pub date: String,
    pub text: String,
    pub category: FeedbackCategory,
    pub sentiment: Sentiment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

use serde::{Deserialize, Serialize};

use crate::models::compensation::CompensationRecord;
use crate::models::development::DevelopmentPlan;
use crate::models::employee::Employee;
use crate::models::insight::Insight;
use crate::models::performance::PerformanceRecord;
use crate::models::user::User;

/// The whole generated snapshot. This is both the in-memory shape held by
/// the application state and the persisted store slot layout; there is no
/// version field and no migration path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub performance_data: Vec<PerformanceRecord>,
    pub insights: Vec<Insight>,
    pub development_plans: Vec<DevelopmentPlan>,
    pub users: Vec<User>,
    pub compensation_data: Vec<CompensationRecord>,
    pub current_user: Option<User>,
}

impl Dataset {
    /// Distinct months present in the performance data, newest first.
    pub fn months_desc(&self) -> Vec<String> {
        let mut months: Vec<String> = self
            .performance_data
            .iter()
            .map(|record| record.month.clone())
            .collect();
        months.sort();
        months.dedup();
        months.reverse();
        months
    }
}

use serde::{Deserialize, Serialize};

/// What-if scenario managed from the admin screen. Scenarios live in
/// memory next to the dataset snapshot; they never modify generated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationScenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub affected_employees: Vec<String>,
    /// -100 to 100 percent.
    pub performance_shift: i32,
    /// Months.
    pub duration: u32,
    pub active: bool,
}

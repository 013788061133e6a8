use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::admin::SimulationScenario;
use crate::models::views::ScenarioCreateInput;

/// What-if scenarios shown on the admin screen. They are a display toy:
/// toggling one never feeds back into the generated data.
pub struct AdminService;

impl AdminService {
    pub fn default_scenarios() -> Vec<SimulationScenario> {
        vec![
            SimulationScenario {
                id: "scenario-1".to_string(),
                name: "Productivity Boost".to_string(),
                description: "Simulates the impact of new tooling on engineering output."
                    .to_string(),
                affected_employees: vec!["All SDEs".to_string()],
                performance_shift: 20,
                duration: 3,
                active: false,
            },
            SimulationScenario {
                id: "scenario-2".to_string(),
                name: "Market Downturn".to_string(),
                description: "Simulates increased pressure on product delivery timelines."
                    .to_string(),
                affected_employees: vec!["All Product Managers".to_string()],
                performance_shift: -15,
                duration: 2,
                active: false,
            },
        ]
    }

    pub fn create(input: &ScenarioCreateInput) -> AppResult<SimulationScenario> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Scenario name must not be empty"));
        }

        Ok(SimulationScenario {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: input.description.clone().unwrap_or_default(),
            affected_employees: Vec::new(),
            performance_shift: 0,
            duration: 1,
            active: false,
        })
    }

    pub fn toggle(scenarios: &mut [SimulationScenario], id: &str) -> AppResult<SimulationScenario> {
        let scenario = scenarios
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("Scenario", id))?;
        scenario.active = !scenario.active;
        Ok(scenario.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_inactive() {
        let scenarios = AdminService::default_scenarios();
        assert_eq!(scenarios.len(), 2);
        assert!(scenarios.iter().all(|s| !s.active));
    }

    #[test]
    fn toggle_flips_and_returns_the_scenario() {
        let mut scenarios = AdminService::default_scenarios();
        let toggled = AdminService::toggle(&mut scenarios, "scenario-1").expect("toggle");
        assert!(toggled.active);
        assert!(scenarios[0].active);

        let again = AdminService::toggle(&mut scenarios, "scenario-1").expect("toggle");
        assert!(!again.active);
    }

    #[test]
    fn toggle_rejects_unknown_ids() {
        let mut scenarios = AdminService::default_scenarios();
        assert!(matches!(
            AdminService::toggle(&mut scenarios, "missing"),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn create_requires_a_name() {
        let input = ScenarioCreateInput {
            name: "  ".to_string(),
            description: None,
        };
        assert!(matches!(
            AdminService::create(&input),
            Err(AppError::Validation { .. })
        ));
    }
}

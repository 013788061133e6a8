use tauri::State;

use crate::models::admin::SimulationScenario;
use crate::models::dataset::Dataset;
use crate::models::user::User;
use crate::models::views::ScenarioCreateInput;
use crate::services::admin_service::AdminService;

use super::{run_blocking, AppState, CommandResult};

/// Regenerates the store slot and swaps the in-memory snapshot. The
/// selection pointer is cleared because its target no longer exists.
#[tauri::command]
pub async fn admin_data_reset(state: State<'_, AppState>) -> CommandResult<Dataset> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.store().reset()?;
        app_state.replace_dataset(dataset.clone())?;
        app_state.set_selected_employee(None)?;
        Ok(dataset)
    })
    .await
}

#[tauri::command]
pub async fn admin_scenarios_list(
    state: State<'_, AppState>,
) -> CommandResult<Vec<SimulationScenario>> {
    let app_state = state.inner().clone();
    run_blocking(move || app_state.scenarios()).await
}

#[tauri::command]
pub async fn admin_scenario_add(
    state: State<'_, AppState>,
    input: ScenarioCreateInput,
) -> CommandResult<SimulationScenario> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let scenario = AdminService::create(&input)?;
        app_state.with_scenarios(|scenarios| {
            scenarios.push(scenario.clone());
            Ok(())
        })?;
        Ok(scenario)
    })
    .await
}

#[tauri::command]
pub async fn admin_scenario_toggle(
    state: State<'_, AppState>,
    id: String,
) -> CommandResult<SimulationScenario> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        app_state.with_scenarios(|scenarios| AdminService::toggle(scenarios, &id))
    })
    .await
}

#[tauri::command]
pub async fn users_current_fetch(state: State<'_, AppState>) -> CommandResult<Option<User>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        Ok(dataset.current_user.clone())
    })
    .await
}

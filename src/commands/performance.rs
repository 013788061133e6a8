use tauri::State;

use crate::error::AppError;
use crate::models::employee::Role;
use crate::models::views::{PerformanceRow, RadarPoint};
use crate::services::performance_service::PerformanceService;

use super::{run_blocking, AppState, CommandResult};

#[tauri::command]
pub async fn performance_months_list(state: State<'_, AppState>) -> CommandResult<Vec<String>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        Ok(PerformanceService::months(&dataset))
    })
    .await
}

#[tauri::command]
pub async fn performance_role_profile(
    state: State<'_, AppState>,
    role: String,
    month: String,
) -> CommandResult<Vec<RadarPoint>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let role = Role::from_str(&role).map_err(AppError::validation)?;
        let dataset = app_state.dataset()?;
        Ok(PerformanceService::role_profile(&dataset, role, &month))
    })
    .await
}

#[tauri::command]
pub async fn performance_table_fetch(
    state: State<'_, AppState>,
    role: String,
    month: String,
) -> CommandResult<Vec<PerformanceRow>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let role = Role::from_str(&role).map_err(AppError::validation)?;
        let dataset = app_state.dataset()?;
        Ok(PerformanceService::table(&dataset, role, &month))
    })
    .await
}

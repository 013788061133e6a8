use tauri::State;

use crate::error::AppError;
use crate::models::employee::Role;
use crate::models::views::PlanSummary;
use crate::services::development_service::DevelopmentService;

use super::{run_blocking, AppState, CommandResult};

#[tauri::command]
pub async fn development_plans_list(
    state: State<'_, AppState>,
    search: Option<String>,
    role: Option<String>,
) -> CommandResult<Vec<PlanSummary>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let role = role
            .map(|r| Role::from_str(&r).map_err(AppError::validation))
            .transpose()?;
        let dataset = app_state.dataset()?;
        Ok(DevelopmentService::plans(&dataset, search.as_deref(), role))
    })
    .await
}

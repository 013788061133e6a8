use tauri::State;

use crate::error::AppError;
use crate::models::employee::{Employee, Role};
use crate::models::views::{EmployeeListItem, EmployeeProfileView};
use crate::services::directory_service::DirectoryService;

use super::{run_blocking, AppState, CommandResult};

#[tauri::command]
pub async fn employees_list(
    state: State<'_, AppState>,
    search: Option<String>,
    role: Option<String>,
) -> CommandResult<Vec<EmployeeListItem>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let role = role
            .map(|r| Role::from_str(&r).map_err(AppError::validation))
            .transpose()?;
        let dataset = app_state.dataset()?;
        Ok(DirectoryService::list(&dataset, search.as_deref(), role))
    })
    .await
}

#[tauri::command]
pub async fn employee_profile_fetch(
    state: State<'_, AppState>,
    id: String,
) -> CommandResult<EmployeeProfileView> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        DirectoryService::profile(&dataset, &id)
    })
    .await
}

/// Moves the selection pointer, or clears it when no id is given. Returns
/// the newly selected employee so the caller can render without a refetch.
#[tauri::command]
pub async fn employee_select(
    state: State<'_, AppState>,
    id: Option<String>,
) -> CommandResult<Option<Employee>> {
    let app_state = state.inner().clone();
    run_blocking(move || match id {
        Some(id) => {
            let dataset = app_state.dataset()?;
            let employee = DirectoryService::find(&dataset, &id)?.clone();
            app_state.set_selected_employee(Some(id))?;
            Ok(Some(employee))
        }
        None => {
            app_state.set_selected_employee(None)?;
            Ok(None)
        }
    })
    .await
}

pub mod admin;
pub mod dashboard;
pub mod development;
pub mod employees;
pub mod feedback;
pub mod performance;

use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::Value as JsonValue;
use tauri::async_runtime;
use tracing::{error, info};

use crate::error::{AppError, AppResult};
use crate::models::admin::SimulationScenario;
use crate::models::dataset::Dataset;
use crate::services::admin_service::AdminService;
use crate::store::DataStore;

/// Shared application state. The dataset is held as a replace-only
/// snapshot: readers clone an `Arc` handle and a reset swaps the whole
/// snapshot in one write.
#[derive(Clone)]
pub struct AppState {
    store: Arc<DataStore>,
    dataset: Arc<RwLock<Arc<Dataset>>>,
    selected_employee: Arc<RwLock<Option<String>>>,
    scenarios: Arc<RwLock<Vec<SimulationScenario>>>,
}

impl AppState {
    pub fn new(store: DataStore) -> AppResult<Self> {
        let dataset = store.load()?;
        Ok(Self {
            store: Arc::new(store),
            dataset: Arc::new(RwLock::new(Arc::new(dataset))),
            selected_employee: Arc::new(RwLock::new(None)),
            scenarios: Arc::new(RwLock::new(AdminService::default_scenarios())),
        })
    }

    pub fn dataset(&self) -> AppResult<Arc<Dataset>> {
        self.dataset
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| AppError::other("dataset lock poisoned"))
    }

    pub fn replace_dataset(&self, dataset: Dataset) -> AppResult<()> {
        let mut guard = self
            .dataset
            .write()
            .map_err(|_| AppError::other("dataset lock poisoned"))?;
        *guard = Arc::new(dataset);
        info!(target: "app::state", "Dataset snapshot replaced");
        Ok(())
    }

    pub fn store(&self) -> Arc<DataStore> {
        Arc::clone(&self.store)
    }

    pub fn selected_employee(&self) -> AppResult<Option<String>> {
        self.selected_employee
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| AppError::other("selection lock poisoned"))
    }

    pub fn set_selected_employee(&self, id: Option<String>) -> AppResult<()> {
        let mut guard = self
            .selected_employee
            .write()
            .map_err(|_| AppError::other("selection lock poisoned"))?;
        *guard = id;
        Ok(())
    }

    pub fn scenarios(&self) -> AppResult<Vec<SimulationScenario>> {
        self.scenarios
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| AppError::other("scenario lock poisoned"))
    }

    pub fn with_scenarios<T>(
        &self,
        f: impl FnOnce(&mut Vec<SimulationScenario>) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut guard = self
            .scenarios
            .write()
            .map_err(|_| AppError::other("scenario lock poisoned"))?;
        f(&mut guard)
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// The error shape the frontend sees. Codes are stable, messages are for
/// display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Validation { message } => {
                CommandError::new("VALIDATION_ERROR", message, None)
            }
            AppError::NotFound { entity } => {
                CommandError::new("NOT_FOUND", format!("{} not found", entity), None)
            }
            AppError::Storage { message } => {
                error!(target: "app::command", %message, "storage error in command");
                CommandError::new("UNKNOWN", message, None)
            }
            AppError::Serialization(error) => {
                error!(target: "app::command", error = %error, "serialization error in command");
                CommandError::new("UNKNOWN", "Failed to read stored data", None)
            }
            AppError::Io(error) => {
                error!(target: "app::command", error = %error, "io error in command");
                CommandError::new("UNKNOWN", "Filesystem access failed", None)
            }
            AppError::Other(message) => {
                error!(target: "app::command", %message, "unexpected error in command");
                CommandError::new("UNKNOWN", message, None)
            }
        }
    }
}

pub(crate) async fn run_blocking<T: Send + 'static>(
    task: impl FnOnce() -> Result<T, AppError> + Send + 'static,
) -> CommandResult<T> {
    async_runtime::spawn_blocking(task)
        .await
        .map_err(|err| CommandError::new("UNKNOWN", format!("Background task failed: {err}"), None))?
        .map_err(CommandError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DATA_FILE_NAME;
    use tempfile::TempDir;

    fn state() -> (TempDir, AppState) {
        let dir = TempDir::new().expect("tempdir");
        let store = DataStore::new(dir.path().join(DATA_FILE_NAME)).expect("store");
        let state = AppState::new(store).expect("state");
        (dir, state)
    }

    #[test]
    fn new_state_loads_the_dataset_and_default_scenarios() {
        let (_dir, state) = state();
        let dataset = state.dataset().expect("dataset");
        assert!(!dataset.employees.is_empty());
        assert_eq!(state.scenarios().expect("scenarios").len(), 2);
        assert_eq!(state.selected_employee().expect("selection"), None);
    }

    #[test]
    fn replace_swaps_the_snapshot_for_all_handles() {
        let (_dir, state) = state();
        let before = state.dataset().expect("dataset");

        let fresh = state.store().reset().expect("reset");
        state.replace_dataset(fresh).expect("replace");

        let after = state.dataset().expect("dataset");
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn validation_errors_map_to_a_stable_code() {
        let error = CommandError::from(AppError::validation("bad input"));
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.message, "bad input");

        let error = CommandError::from(AppError::not_found("Employee", "e-1"));
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "Employee not found");
    }
}

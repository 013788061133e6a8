use tauri::State;

use crate::models::views::{FeedbackDigest, FeedbackEntry, FeedbackSubmitInput};
use crate::services::feedback_service::FeedbackService;

use super::{run_blocking, AppState, CommandResult};

#[tauri::command]
pub async fn feedback_recent_fetch(state: State<'_, AppState>) -> CommandResult<FeedbackDigest> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        Ok(FeedbackService::recent(&dataset))
    })
    .await
}

#[tauri::command]
pub async fn feedback_submit(
    state: State<'_, AppState>,
    input: FeedbackSubmitInput,
) -> CommandResult<FeedbackEntry> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        FeedbackService::submit(&dataset, &input)
    })
    .await
}

use tauri::State;

use crate::error::AppError;
use crate::models::insight::{Insight, InsightCategory};
use crate::models::views::{
    MetricsSummaryView, RoleSummaryView, TopPerformerEntry, TrendMetric, TrendPoint,
};
use crate::services::dashboard_service::DashboardService;

use super::{run_blocking, AppState, CommandResult};

#[tauri::command]
pub async fn dashboard_metrics_summary(
    state: State<'_, AppState>,
) -> CommandResult<MetricsSummaryView> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        Ok(DashboardService::metrics_summary(&dataset))
    })
    .await
}

#[tauri::command]
pub async fn dashboard_top_performers(
    state: State<'_, AppState>,
) -> CommandResult<Vec<TopPerformerEntry>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        Ok(DashboardService::top_performers(&dataset))
    })
    .await
}

#[tauri::command]
pub async fn dashboard_performance_trends(
    state: State<'_, AppState>,
    metric: Option<TrendMetric>,
) -> CommandResult<Vec<TrendPoint>> {
    let app_state = state.inner().clone();
    let metric = metric.unwrap_or_default();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        Ok(DashboardService::performance_trends(&dataset, metric))
    })
    .await
}

#[tauri::command]
pub async fn dashboard_role_summary(
    state: State<'_, AppState>,
) -> CommandResult<RoleSummaryView> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let dataset = app_state.dataset()?;
        Ok(DashboardService::role_summary(&dataset))
    })
    .await
}

#[tauri::command]
pub async fn dashboard_recent_insights(
    state: State<'_, AppState>,
    category: Option<String>,
) -> CommandResult<Vec<Insight>> {
    let app_state = state.inner().clone();
    run_blocking(move || {
        let category = category
            .map(|c| InsightCategory::from_str(&c).map_err(AppError::validation))
            .transpose()?;
        let dataset = app_state.dataset()?;
        Ok(DashboardService::recent_insights(&dataset, category))
    })
    .await
}

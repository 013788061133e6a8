pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(error) = try_run() {
        eprintln!("failed to launch application: {error}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let handle = app.handle();

            crate::utils::logger::init_logging(&handle)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            let mut data_path = handle
                .path()
                .app_data_dir()
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            std::fs::create_dir_all(&data_path)?;
            data_path.push(crate::store::DATA_FILE_NAME);

            let store = crate::store::DataStore::new(data_path)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;

            let state = crate::commands::AppState::new(store)
                .map_err(|err| Box::new(err) as Box<dyn std::error::Error>)?;
            app.manage(state);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            crate::commands::dashboard::dashboard_metrics_summary,
            crate::commands::dashboard::dashboard_top_performers,
            crate::commands::dashboard::dashboard_performance_trends,
            crate::commands::dashboard::dashboard_role_summary,
            crate::commands::dashboard::dashboard_recent_insights,
            crate::commands::performance::performance_months_list,
            crate::commands::performance::performance_role_profile,
            crate::commands::performance::performance_table_fetch,
            crate::commands::employees::employees_list,
            crate::commands::employees::employee_profile_fetch,
            crate::commands::employees::employee_select,
            crate::commands::feedback::feedback_recent_fetch,
            crate::commands::feedback::feedback_submit,
            crate::commands::development::development_plans_list,
            crate::commands::admin::admin_data_reset,
            crate::commands::admin::admin_scenarios_list,
            crate::commands::admin::admin_scenario_add,
            crate::commands::admin::admin_scenario_toggle,
            crate::commands::admin::users_current_fetch,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}

pub mod admin_service;
pub mod compensation_generator;
pub mod context;
pub mod dashboard_service;
pub mod dataset_service;
pub mod development_generator;
pub mod development_service;
pub mod directory_service;
pub mod employee_generator;
pub mod feedback_service;
pub mod format;
pub mod insight_generator;
pub mod performance_generator;
pub mod performance_service;
pub mod templates;
pub mod user_generator;

use tracing::info;

use crate::models::dataset::Dataset;
use crate::models::user::UserRole;
use crate::services::compensation_generator::CompensationGenerator;
use crate::services::context::{GeneratorContext, DEFAULT_SEED};
use crate::services::development_generator::DevelopmentGenerator;
use crate::services::employee_generator::EmployeeGenerator;
use crate::services::insight_generator::InsightGenerator;
use crate::services::performance_generator::PerformanceGenerator;
use crate::services::user_generator::UserGenerator;

pub const DEFAULT_EMPLOYEE_COUNT: usize = 20;

/// Runs the full generation pipeline. Stage order is fixed because later
/// stages consume earlier output; with a fixed seed and reference time the
/// resulting dataset is identical across runs.
pub struct DatasetService;

impl DatasetService {
    pub fn generate(ctx: &mut GeneratorContext, employee_count: usize) -> Dataset {
        let employees = EmployeeGenerator::generate(ctx, employee_count);
        let performance_data = PerformanceGenerator::generate(ctx, &employees);
        let insights = InsightGenerator::generate(ctx, &employees, &performance_data);
        let development_plans = DevelopmentGenerator::generate(ctx, &employees, &insights);
        let users = UserGenerator::generate(ctx, &employees);
        let compensation_data = CompensationGenerator::generate(ctx, &employees);

        // The demo signs in as the first HR account when one exists.
        let current_user = users
            .iter()
            .find(|user| user.role == UserRole::Hr)
            .or_else(|| users.first())
            .cloned();

        info!(
            target: "app::generator",
            employees = employees.len(),
            performance_records = performance_data.len(),
            insights = insights.len(),
            plans = development_plans.len(),
            users = users.len(),
            compensation_records = compensation_data.len(),
            "Generated dataset"
        );

        Dataset {
            employees,
            performance_data,
            insights,
            development_plans,
            users,
            compensation_data,
            current_user,
        }
    }

    pub fn generate_default() -> Dataset {
        let mut ctx = GeneratorContext::seeded(DEFAULT_SEED);
        Self::generate(&mut ctx, DEFAULT_EMPLOYEE_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn pipeline_produces_a_fully_linked_dataset() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut ctx = GeneratorContext::new(99, now);
        let dataset = DatasetService::generate(&mut ctx, 10);

        assert_eq!(dataset.employees.len(), 10);
        assert_eq!(dataset.performance_data.len(), 60);
        assert_eq!(dataset.development_plans.len(), 10);
        assert!(dataset.users.len() >= 15);
        assert_eq!(dataset.compensation_data.len(), 30);

        for record in &dataset.performance_data {
            assert!(dataset.employees.iter().any(|e| e.id == record.employee_id));
        }
        for insight in &dataset.insights {
            assert!(dataset.employees.iter().any(|e| e.id == insight.employee_id));
        }
    }

    #[test]
    fn current_user_prefers_the_first_hr_account() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut ctx = GeneratorContext::new(5, now);
        let dataset = DatasetService::generate(&mut ctx, 5);

        let current = dataset.current_user.expect("current user");
        assert_eq!(current.role, UserRole::Hr);
    }

    #[test]
    fn same_seed_and_time_reproduce_the_dataset() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let a = DatasetService::generate(&mut GeneratorContext::new(123, now), 8);
        let b = DatasetService::generate(&mut GeneratorContext::new(123, now), 8);

        let a_json = serde_json::to_string(&a).expect("serialize");
        let b_json = serde_json::to_string(&b).expect("serialize");
        assert_eq!(a_json, b_json);
    }
}

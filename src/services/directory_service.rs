use crate::error::{AppError, AppResult};
use crate::models::dataset::Dataset;
use crate::models::employee::{Employee, Role};
use crate::models::performance::PerformanceRecord;
use crate::models::views::{EmployeeListItem, EmployeeProfileView, RatingPoint};
use crate::services::format::month_label;

/// Read models for the employee directory and the per-employee profile.
pub struct DirectoryService;

impl DirectoryService {
    /// The directory list: every employee with their latest-month rating.
    /// Search matches name, role and department case-insensitively.
    pub fn list(
        dataset: &Dataset,
        search: Option<&str>,
        role: Option<Role>,
    ) -> Vec<EmployeeListItem> {
        let needle = search.map(str::to_lowercase).unwrap_or_default();

        dataset
            .employees
            .iter()
            .filter(|employee| role.map_or(true, |r| employee.role == r))
            .filter(|employee| {
                needle.is_empty()
                    || employee.name.to_lowercase().contains(&needle)
                    || employee.role.as_str().to_lowercase().contains(&needle)
                    || employee.department.to_lowercase().contains(&needle)
            })
            .map(|employee| {
                let latest = Self::employee_records(dataset, &employee.id)
                    .into_iter()
                    .max_by(|a, b| a.month.cmp(&b.month));
                EmployeeListItem {
                    employee: employee.clone(),
                    rating: latest.map_or(0, |r| r.rating),
                    month: latest.map_or_else(String::new, |r| r.month.clone()),
                }
            })
            .collect()
    }

    /// Everything the profile screen shows for one employee. Unknown ids
    /// are an error, not an empty view.
    pub fn profile(dataset: &Dataset, employee_id: &str) -> AppResult<EmployeeProfileView> {
        let employee = Self::find(dataset, employee_id)?;

        let mut performance: Vec<PerformanceRecord> = Self::employee_records(dataset, employee_id)
            .into_iter()
            .cloned()
            .collect();
        performance.sort_by(|a, b| a.month.cmp(&b.month));

        let chart = performance
            .iter()
            .map(|record| RatingPoint {
                month: month_label(&record.month),
                rating: record.rating,
            })
            .collect();

        let mut insights: Vec<_> = dataset
            .insights
            .iter()
            .filter(|insight| insight.employee_id == employee_id)
            .cloned()
            .collect();
        insights.sort_by(|a, b| b.date.cmp(&a.date));

        let development_plan = dataset
            .development_plans
            .iter()
            .find(|plan| plan.employee_id == employee_id)
            .cloned();

        Ok(EmployeeProfileView {
            employee: employee.clone(),
            performance,
            chart,
            insights,
            development_plan,
        })
    }

    pub fn find<'a>(dataset: &'a Dataset, employee_id: &str) -> AppResult<&'a Employee> {
        dataset
            .employees
            .iter()
            .find(|e| e.id == employee_id)
            .ok_or_else(|| AppError::not_found("Employee", employee_id))
    }

    fn employee_records<'a>(dataset: &'a Dataset, employee_id: &str) -> Vec<&'a PerformanceRecord> {
        dataset
            .performance_data
            .iter()
            .filter(|record| record.employee_id == employee_id)
            .collect()
    }
}

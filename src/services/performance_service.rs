use crate::models::dataset::Dataset;
use crate::models::employee::Role;
use crate::models::performance::PerformanceRecord;
use crate::models::views::{MetricCell, PerformanceRow, RadarPoint};
use crate::services::format::format_metric_name;

/// Read models for the performance explorer: the month picker, the radar
/// profile of a role and the per-employee metric table.
pub struct PerformanceService;

impl PerformanceService {
    /// Months with data, newest first, for the month picker.
    pub fn months(dataset: &Dataset) -> Vec<String> {
        dataset.months_desc()
    }

    /// Average of every metric in the role's schema across the given month,
    /// one radar spoke per metric. Empty when the role has no data that
    /// month.
    pub fn role_profile(dataset: &Dataset, role: Role, month: &str) -> Vec<RadarPoint> {
        let records = Self::role_month_records(dataset, role, month);
        let Some(first) = records.first() else {
            return Vec::new();
        };

        first
            .metrics
            .keys()
            .iter()
            .map(|key| {
                let values: Vec<f64> = records
                    .iter()
                    .filter_map(|record| record.metrics.get(key))
                    .collect();
                let value = if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                };
                RadarPoint {
                    metric: format_metric_name(key),
                    value,
                }
            })
            .collect()
    }

    /// One table row per employee of the role with a record in the month,
    /// metric cells in schema order.
    pub fn table(dataset: &Dataset, role: Role, month: &str) -> Vec<PerformanceRow> {
        Self::role_month_records(dataset, role, month)
            .iter()
            .filter_map(|record| {
                let employee = dataset
                    .employees
                    .iter()
                    .find(|e| e.id == record.employee_id)?;
                let metrics = record
                    .metrics
                    .entries()
                    .into_iter()
                    .map(|(key, value)| MetricCell {
                        key: key.to_string(),
                        label: format_metric_name(key),
                        value,
                    })
                    .collect();
                Some(PerformanceRow {
                    employee_id: employee.id.clone(),
                    name: employee.name.clone(),
                    avatar: employee.avatar.clone(),
                    rating: record.rating,
                    metrics,
                })
            })
            .collect()
    }

    fn role_month_records<'a>(
        dataset: &'a Dataset,
        role: Role,
        month: &str,
    ) -> Vec<&'a PerformanceRecord> {
        dataset
            .performance_data
            .iter()
            .filter(|record| record.month == month)
            .filter(|record| {
                dataset
                    .employees
                    .iter()
                    .any(|e| e.id == record.employee_id && e.role == role)
            })
            .collect()
    }
}

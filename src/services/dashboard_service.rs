use std::cmp::Ordering;

use crate::models::dataset::Dataset;
use crate::models::employee::Role;
use crate::models::insight::{Insight, InsightCategory};
use crate::models::performance::PerformanceRecord;
use crate::models::views::{
    MetricDelta, MetricsSummaryView, RoleAverage, RoleCount, RoleSummaryView, TopPerformerEntry,
    TrendMetric, TrendPoint,
};
use crate::services::format::month_label;

/// Read models backing the dashboard screen. All computations run over the
/// in-memory snapshot; nothing here touches the store.
pub struct DashboardService;

impl DashboardService {
    /// Employees ranked by the average of their three most recent monthly
    /// ratings, top five only. Employees without history rank at zero.
    pub fn top_performers(dataset: &Dataset) -> Vec<TopPerformerEntry> {
        let mut entries: Vec<TopPerformerEntry> = dataset
            .employees
            .iter()
            .map(|employee| {
                let mut history: Vec<&PerformanceRecord> = dataset
                    .performance_data
                    .iter()
                    .filter(|record| record.employee_id == employee.id)
                    .collect();
                history.sort_by(|a, b| b.month.cmp(&a.month));
                let recent = &history[..history.len().min(3)];

                let average_rating = if recent.is_empty() {
                    0.0
                } else {
                    recent.iter().map(|r| f64::from(r.rating)).sum::<f64>()
                        / recent.len() as f64
                };

                TopPerformerEntry {
                    employee: employee.clone(),
                    average_rating,
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
        });
        entries.truncate(5);
        entries
    }

    /// The four dashboard cards, each comparing the latest month against the
    /// one before it.
    pub fn metrics_summary(dataset: &Dataset) -> MetricsSummaryView {
        let months = dataset.months_desc();
        let current = Self::month_records(dataset, months.first());
        let previous = Self::month_records(dataset, months.get(1));
        let before_previous = Self::month_records(dataset, months.get(2));

        MetricsSummaryView {
            average_rating: Self::delta(
                Self::average_rating(&current),
                Self::average_rating(&previous),
            ),
            high_performers: Self::delta(
                Self::high_performers(&current),
                Self::high_performers(&previous),
            ),
            improving: Self::delta(
                Self::improving_count(&current, &previous),
                Self::improving_count(&previous, &before_previous),
            ),
            on_time_delivery: Self::delta(
                Self::on_time_delivery(&current),
                Self::on_time_delivery(&previous),
            ),
        }
    }

    /// Per-month role averages for the trends chart, oldest month first.
    /// Role membership is read off the metric shape of each record.
    pub fn performance_trends(dataset: &Dataset, metric: TrendMetric) -> Vec<TrendPoint> {
        let mut months = dataset.months_desc();
        months.reverse();

        months
            .iter()
            .map(|month| {
                let records = Self::month_records(dataset, Some(month));
                TrendPoint {
                    month: month_label(month),
                    sde: Self::role_average(&records, Role::Sde, metric),
                    product_manager: Self::role_average(&records, Role::ProductManager, metric),
                    ml_engineer: Self::role_average(&records, Role::MlEngineer, metric),
                }
            })
            .collect()
    }

    pub fn role_summary(dataset: &Dataset) -> RoleSummaryView {
        let months = dataset.months_desc();
        let latest = Self::month_records(dataset, months.first());

        let role_distribution = Role::ALL
            .iter()
            .map(|role| RoleCount {
                role: *role,
                count: dataset
                    .employees
                    .iter()
                    .filter(|e| e.role == *role)
                    .count(),
            })
            .collect();

        let average_by_role = Role::ALL
            .iter()
            .map(|role| {
                let ratings: Vec<f64> = latest
                    .iter()
                    .filter(|record| {
                        dataset
                            .employees
                            .iter()
                            .any(|e| e.id == record.employee_id && e.role == *role)
                    })
                    .map(|record| f64::from(record.rating))
                    .collect();
                let average_rating = if ratings.is_empty() {
                    0.0
                } else {
                    ratings.iter().sum::<f64>() / ratings.len() as f64
                };
                RoleAverage {
                    role: *role,
                    average_rating,
                }
            })
            .collect();

        RoleSummaryView {
            role_distribution,
            average_by_role,
        }
    }

    /// Ten newest insights, optionally narrowed to one category.
    pub fn recent_insights(dataset: &Dataset, category: Option<InsightCategory>) -> Vec<Insight> {
        let mut insights: Vec<Insight> = dataset
            .insights
            .iter()
            .filter(|insight| category.map_or(true, |c| insight.category == c))
            .cloned()
            .collect();
        insights.sort_by(|a, b| b.date.cmp(&a.date));
        insights.truncate(10);
        insights
    }

    fn month_records<'a>(
        dataset: &'a Dataset,
        month: Option<&String>,
    ) -> Vec<&'a PerformanceRecord> {
        match month {
            Some(month) => dataset
                .performance_data
                .iter()
                .filter(|record| record.month == *month)
                .collect(),
            None => Vec::new(),
        }
    }

    fn delta(current: f64, previous: f64) -> MetricDelta {
        let change_percent = if previous == 0.0 {
            0.0
        } else {
            (current - previous) / previous * 100.0
        };
        MetricDelta {
            current,
            previous,
            change_percent,
        }
    }

    fn average_rating(records: &[&PerformanceRecord]) -> f64 {
        if records.is_empty() {
            return 0.0;
        }
        records.iter().map(|r| f64::from(r.rating)).sum::<f64>() / records.len() as f64
    }

    fn high_performers(records: &[&PerformanceRecord]) -> f64 {
        records.iter().filter(|r| r.rating >= 4).count() as f64
    }

    /// How many employees rated higher this month than last month.
    fn improving_count(current: &[&PerformanceRecord], previous: &[&PerformanceRecord]) -> f64 {
        current
            .iter()
            .filter(|cur| {
                previous
                    .iter()
                    .find(|prev| prev.employee_id == cur.employee_id)
                    .map_or(false, |prev| cur.rating > prev.rating)
            })
            .count() as f64
    }

    /// Average of the onTimeDelivery metric across a month. Records without
    /// the metric count as zero, which drags the average down when ML
    /// engineers are in the mix.
    fn on_time_delivery(records: &[&PerformanceRecord]) -> f64 {
        if records.is_empty() {
            return 0.0;
        }
        records
            .iter()
            .map(|r| r.metrics.get("onTimeDelivery").unwrap_or(0.0))
            .sum::<f64>()
            / records.len() as f64
    }

    /// Records are bucketed into roles by probing for a metric only that
    /// role's schema carries.
    fn record_role(record: &PerformanceRecord) -> Option<Role> {
        if record.metrics.get("codeQuality").is_some() {
            Some(Role::Sde)
        } else if record.metrics.get("productImpact").is_some() {
            Some(Role::ProductManager)
        } else if record.metrics.get("modelAccuracy").is_some() {
            Some(Role::MlEngineer)
        } else {
            None
        }
    }

    /// Which metric key feeds the chart for a role, `None` when the metric
    /// does not apply to the role, `Some(None)` for the rating series.
    fn metric_key(metric: TrendMetric, role: Role) -> Option<Option<&'static str>> {
        match (metric, role) {
            (TrendMetric::Rating, _) => Some(None),
            (TrendMetric::OnTimeDelivery, Role::Sde | Role::ProductManager) => {
                Some(Some("onTimeDelivery"))
            }
            (TrendMetric::CodeQuality, Role::Sde) => Some(Some("codeQuality")),
            (TrendMetric::StakeholderSatisfaction, Role::ProductManager) => {
                Some(Some("stakeholderSatisfaction"))
            }
            (TrendMetric::ModelAccuracy, Role::MlEngineer) => Some(Some("modelAccuracy")),
            (TrendMetric::DataQuality, Role::MlEngineer) => Some(Some("dataQuality")),
            _ => None,
        }
    }

    fn role_average(
        records: &[&PerformanceRecord],
        role: Role,
        metric: TrendMetric,
    ) -> Option<f64> {
        let key = Self::metric_key(metric, role)?;
        let values: Vec<f64> = records
            .iter()
            .filter(|record| Self::record_role(record) == Some(role))
            .filter_map(|record| match key {
                None => Some(f64::from(record.rating)),
                Some(key) => record.metrics.get(key),
            })
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::context::GeneratorContext;
    use crate::services::dataset_service::DatasetService;
    use chrono::{TimeZone, Utc};

    fn dataset() -> Dataset {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut ctx = GeneratorContext::new(77, now);
        DatasetService::generate(&mut ctx, 15)
    }

    #[test]
    fn top_performers_are_capped_and_ordered() {
        let dataset = dataset();
        let performers = DashboardService::top_performers(&dataset);

        assert_eq!(performers.len(), 5);
        for pair in performers.windows(2) {
            assert!(pair[0].average_rating >= pair[1].average_rating);
        }
        for entry in &performers {
            assert!((1.0..=5.0).contains(&entry.average_rating));
        }
    }

    #[test]
    fn metrics_summary_change_is_zero_when_previous_is_zero() {
        let delta = DashboardService::delta(4.0, 0.0);
        assert_eq!(delta.change_percent, 0.0);

        let delta = DashboardService::delta(4.0, 2.0);
        assert_eq!(delta.change_percent, 100.0);
    }

    #[test]
    fn metrics_summary_covers_the_two_newest_months() {
        let dataset = dataset();
        let summary = DashboardService::metrics_summary(&dataset);

        assert!(summary.average_rating.current >= 1.0);
        assert!(summary.average_rating.current <= 5.0);
        assert!(summary.average_rating.previous >= 1.0);
        assert!(summary.high_performers.current >= 0.0);
    }

    #[test]
    fn trends_have_one_point_per_month_in_ascending_order() {
        let dataset = dataset();
        let points = DashboardService::performance_trends(&dataset, TrendMetric::Rating);
        assert_eq!(points.len(), 6);
        assert_eq!(points.last().map(|p| p.month.as_str()), Some("6/25"));
    }

    #[test]
    fn role_specific_metric_leaves_other_roles_empty() {
        let dataset = dataset();
        let points = DashboardService::performance_trends(&dataset, TrendMetric::CodeQuality);

        for point in &points {
            assert!(point.product_manager.is_none());
            assert!(point.ml_engineer.is_none());
        }
    }

    #[test]
    fn recent_insights_respect_the_category_filter() {
        let dataset = dataset();
        let insights =
            DashboardService::recent_insights(&dataset, Some(InsightCategory::Recommendation));

        assert!(!insights.is_empty());
        assert!(insights.len() <= 10);
        assert!(insights
            .iter()
            .all(|i| i.category == InsightCategory::Recommendation));
    }
}

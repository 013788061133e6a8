use chrono::{TimeZone, Utc};

use pms_app_lib::models::dataset::Dataset;
use pms_app_lib::models::employee::Role;
use pms_app_lib::models::views::TrendMetric;
use pms_app_lib::services::context::GeneratorContext;
use pms_app_lib::services::dashboard_service::DashboardService;
use pms_app_lib::services::dataset_service::DatasetService;
use pms_app_lib::services::development_service::DevelopmentService;
use pms_app_lib::services::directory_service::DirectoryService;
use pms_app_lib::services::feedback_service::FeedbackService;
use pms_app_lib::services::performance_service::PerformanceService;

fn dataset() -> Dataset {
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    let mut ctx = GeneratorContext::new(321, now);
    DatasetService::generate(&mut ctx, 20)
}

#[test]
fn top_performers_are_the_best_five() {
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
fn metrics_summary_compares_the_two_newest_months() {
    let dataset = dataset();
    let summary = DashboardService::metrics_summary(&dataset);

    assert!((1.0..=5.0).contains(&summary.average_rating.current));
    assert!((1.0..=5.0).contains(&summary.average_rating.previous));
    assert!(summary.high_performers.current <= 20.0);
    assert!(summary.on_time_delivery.current >= 0.0);
}

#[test]
fn trend_membership_follows_the_metric_shape() {
    let dataset = dataset();

    let has_role = |role: Role| dataset.employees.iter().any(|e| e.role == role);

    let rating_points = DashboardService::performance_trends(&dataset, TrendMetric::Rating);
    assert_eq!(rating_points.len(), 6);
    for point in &rating_points {
        assert_eq!(point.sde.is_some(), has_role(Role::Sde));
        assert_eq!(point.product_manager.is_some(), has_role(Role::ProductManager));
        assert_eq!(point.ml_engineer.is_some(), has_role(Role::MlEngineer));
    }

    let accuracy_points =
        DashboardService::performance_trends(&dataset, TrendMetric::ModelAccuracy);
    for point in &accuracy_points {
        assert!(point.sde.is_none());
        assert!(point.product_manager.is_none());
        assert_eq!(point.ml_engineer.is_some(), has_role(Role::MlEngineer));
    }

    let delivery_points =
        DashboardService::performance_trends(&dataset, TrendMetric::OnTimeDelivery);
    for point in &delivery_points {
        assert_eq!(point.sde.is_some(), has_role(Role::Sde));
        assert_eq!(
            point.product_manager.is_some(),
            has_role(Role::ProductManager)
        );
        assert!(point.ml_engineer.is_none());
    }
}

#[test]
fn role_summary_distribution_covers_everyone() {
    let dataset = dataset();
    let summary = DashboardService::role_summary(&dataset);

    let total: usize = summary.role_distribution.iter().map(|r| r.count).sum();
    assert_eq!(total, dataset.employees.len());
    for average in &summary.average_by_role {
        assert!((0.0..=5.0).contains(&average.average_rating));
    }
}

#[test]
fn directory_search_and_profile_agree() {
    let dataset = dataset();
    let all = DirectoryService::list(&dataset, None, None);
    assert_eq!(all.len(), dataset.employees.len());

    let first = &dataset.employees[0];
    let needle = first.name.to_uppercase();
    let found = DirectoryService::list(&dataset, Some(needle.as_str()), None);
    assert!(found.iter().any(|item| item.employee.id == first.id));

    let profile = DirectoryService::profile(&dataset, &first.id).expect("profile");
    assert_eq!(profile.performance.len(), 6);
    assert_eq!(profile.chart.len(), 6);
    assert!(profile.development_plan.is_some());
}

#[test]
fn month_table_and_radar_are_consistent() {
    let dataset = dataset();
    let months = PerformanceService::months(&dataset);
    let latest = months.first().expect("months");

    for role in Role::ALL {
        let rows = PerformanceService::table(&dataset, role, latest);
        let radar = PerformanceService::role_profile(&dataset, role, latest);
        if rows.is_empty() {
            assert!(radar.is_empty());
        } else {
            assert_eq!(radar.len(), rows[0].metrics.len());
        }
    }
}

#[test]
fn feedback_digest_splits_by_category() {
    let dataset = dataset();
    let digest = FeedbackService::recent(&dataset);

    assert_eq!(digest.month, "2025-06");
    for entry in digest.peer.iter().chain(&digest.manager) {
        assert!(dataset
            .employees
            .iter()
            .any(|e| e.id == entry.employee_id && e.name == entry.employee_name));
    }
}

#[test]
fn plan_progress_is_bounded_and_role_filter_holds() {
    let dataset = dataset();
    let all = DevelopmentService::plans(&dataset, None, None);
    assert_eq!(all.len(), dataset.development_plans.len());
    for summary in &all {
        assert!(summary.progress <= 100);
    }

    let sde_only = DevelopmentService::plans(&dataset, None, Some(Role::Sde));
    assert!(sde_only.iter().all(|s| s.employee_role == Role::Sde));
}

use std::collections::HashMap;

use crate::models::employee::{Employee, Role};
use crate::models::insight::{Insight, InsightCategory};
use crate::models::performance::{PerformanceRecord, RoleMetrics};
use crate::services::context::GeneratorContext;
use crate::services::templates;

/// Derives templated observations from the generated history. Confidence
/// values are drawn within a fixed band per rule, they carry no statistical
/// meaning.
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn generate(
        ctx: &mut GeneratorContext,
        employees: &[Employee],
        performance_data: &[PerformanceRecord],
    ) -> Vec<Insight> {
        let mut by_employee: HashMap<&str, Vec<&PerformanceRecord>> = HashMap::new();
        for record in performance_data {
            by_employee
                .entry(record.employee_id.as_str())
                .or_default()
                .push(record);
        }

        let mut insights = Vec::new();
        for employee in employees {
            let mut history = by_employee
                .get(employee.id.as_str())
                .cloned()
                .unwrap_or_default();
            history.sort_by(|a, b| a.month.cmp(&b.month));

            // The trend rule needs a before and an after; the remaining
            // rules still run on whatever history exists.
            if history.len() >= 2 {
                Self::trend_insight(ctx, employee, &history, &mut insights);
            }
            if let Some(latest) = history.last() {
                Self::threshold_insights(ctx, employee, latest, &mut insights);
            }
            Self::recommendation_insight(ctx, employee, &mut insights);
        }

        insights
    }

    fn trend_insight(
        ctx: &mut GeneratorContext,
        employee: &Employee,
        history: &[&PerformanceRecord],
        insights: &mut Vec<Insight>,
    ) {
        let first = history[0].rating;
        let last = history[history.len() - 1].rating;
        if first == last {
            return;
        }
        let improving = last > first;

        let related: Vec<&str> = match (employee.role, improving) {
            (Role::Sde, true) => vec!["Code Quality", "Velocity", "On-Time Delivery"],
            (Role::Sde, false) => vec!["Bugs Introduced", "Commit Frequency"],
            (Role::ProductManager, true) => vec!["Stakeholder Satisfaction", "Requirement Quality"],
            (Role::ProductManager, false) => vec!["Feature Delivery Rate", "Roadmap Adherence"],
            (Role::MlEngineer, true) => vec!["Model Accuracy", "Data Quality"],
            (Role::MlEngineer, false) => vec!["Pipeline Uptime", "Experiment Velocity"],
        };

        let (title, description) = if improving {
            (
                "Consistent Performance Improvement",
                format!(
                    "{} has shown steady improvement over the last {} months, with ratings increasing from {} to {}.",
                    employee.name,
                    history.len(),
                    first,
                    last
                ),
            )
        } else {
            (
                "Performance Needs Attention",
                format!(
                    "{}'s performance has been declining over the last {} months, with ratings decreasing from {} to {}.",
                    employee.name,
                    history.len(),
                    first,
                    last
                ),
            )
        };

        insights.push(Insight {
            id: ctx.id(),
            employee_id: employee.id.clone(),
            date: ctx.now().to_rfc3339(),
            title: title.to_string(),
            description,
            category: InsightCategory::Trend,
            confidence: ctx.int(80, 95) as u8,
            related_metrics: Some(related.into_iter().map(String::from).collect()),
        });
    }

    fn threshold_insights(
        ctx: &mut GeneratorContext,
        employee: &Employee,
        latest: &PerformanceRecord,
        insights: &mut Vec<Insight>,
    ) {
        let mut push = |ctx: &mut GeneratorContext,
                        title: &str,
                        description: String,
                        category: InsightCategory,
                        confidence_min: i64,
                        confidence_max: i64,
                        related: &[&str]| {
            insights.push(Insight {
                id: ctx.id(),
                employee_id: employee.id.clone(),
                date: ctx.now().to_rfc3339(),
                title: title.to_string(),
                description,
                category,
                confidence: ctx.int(confidence_min, confidence_max) as u8,
                related_metrics: Some(related.iter().map(|m| (*m).to_string()).collect()),
            });
        };

        match &latest.metrics {
            RoleMetrics::Engineer(m) => {
                if m.code_quality > 85 {
                    push(
                        ctx,
                        "Exceptional Code Quality",
                        format!(
                            "{} consistently produces high-quality code with a quality score of {}/100, significantly above team average.",
                            employee.name, m.code_quality
                        ),
                        InsightCategory::Strength,
                        85,
                        98,
                        &["Code Quality", "Test Coverage"],
                    );
                }
                if m.bugs_introduced > 7 {
                    push(
                        ctx,
                        "Code Quality Improvement Opportunity",
                        format!(
                            "{} has introduced {} bugs in the last month, which is above team average. Consider additional code reviews or pairing sessions.",
                            employee.name, m.bugs_introduced
                        ),
                        InsightCategory::Improvement,
                        75,
                        90,
                        &["Bugs Introduced", "Code Quality", "Test Coverage"],
                    );
                }
                if m.test_coverage < 60 {
                    push(
                        ctx,
                        "Testing Coverage Needs Attention",
                        format!(
                            "{}'s code has {}% test coverage, below the team target of 80%. Consider focusing on improving test coverage in the next sprint.",
                            employee.name, m.test_coverage
                        ),
                        InsightCategory::Improvement,
                        80,
                        95,
                        &["Test Coverage", "Bugs Introduced"],
                    );
                }
            }
            RoleMetrics::ProductManager(m) => {
                if m.stakeholder_satisfaction > 90 {
                    push(
                        ctx,
                        "Outstanding Stakeholder Management",
                        format!(
                            "{} has achieved exceptional stakeholder satisfaction scores of {}/100, demonstrating excellent communication and expectation setting.",
                            employee.name, m.stakeholder_satisfaction
                        ),
                        InsightCategory::Strength,
                        85,
                        95,
                        &["Stakeholder Satisfaction", "Requirement Quality"],
                    );
                }
                if m.requirement_quality < 70 {
                    push(
                        ctx,
                        "Requirements Definition Opportunity",
                        format!(
                            "{}'s requirement quality score is {}/100. Recommend providing additional detail and acceptance criteria in user stories.",
                            employee.name, m.requirement_quality
                        ),
                        InsightCategory::Improvement,
                        75,
                        90,
                        &["Requirement Quality", "Feature Delivery Rate"],
                    );
                }
                if m.feature_delivery_rate < 80 {
                    push(
                        ctx,
                        "Feature Delivery Rate Below Target",
                        format!(
                            "{}'s feature delivery rate of {}% is below target. Consider breaking down features into smaller, more manageable pieces.",
                            employee.name, m.feature_delivery_rate
                        ),
                        InsightCategory::Improvement,
                        75,
                        85,
                        &["Feature Delivery Rate", "Roadmap Adherence"],
                    );
                }
            }
            RoleMetrics::MlEngineer(m) => {
                if m.model_accuracy > 85 {
                    push(
                        ctx,
                        "Exceptional Model Performance",
                        format!(
                            "{} has achieved {}% model accuracy, significantly improving prediction quality for business outcomes.",
                            employee.name, m.model_accuracy
                        ),
                        InsightCategory::Strength,
                        85,
                        98,
                        &["Model Accuracy", "Algorithm Complexity"],
                    );
                }
                if m.experiment_velocity < 3 {
                    push(
                        ctx,
                        "Experimentation Opportunity",
                        format!(
                            "{} conducted {} experiments last month, below team average. Consider allocating more time for hypothesis testing and exploration.",
                            employee.name, m.experiment_velocity
                        ),
                        InsightCategory::Improvement,
                        75,
                        90,
                        &["Experiment Velocity", "Model Accuracy"],
                    );
                }
                if m.pipeline_uptime < 90 {
                    push(
                        ctx,
                        "Data Pipeline Stability Issues",
                        format!(
                            "{}'s data pipeline uptime of {}% is below the target of 98%. Focus on improving error handling and monitoring.",
                            employee.name, m.pipeline_uptime
                        ),
                        InsightCategory::Improvement,
                        80,
                        95,
                        &["Pipeline Uptime", "Data Quality"],
                    );
                }
            }
        }
    }

    // Every employee gets one development recommendation regardless of how
    // the month went.
    fn recommendation_insight(
        ctx: &mut GeneratorContext,
        employee: &Employee,
        insights: &mut Vec<Insight>,
    ) {
        let title = (*ctx.pick(templates::recommendation_titles(employee.role))).to_string();
        let index = ctx.int(0, 2) as usize;
        let description = templates::recommendation_description(employee.role, &employee.name, index);
        let related = ctx.sample(templates::recommendation_metrics(employee.role), 1, 3);

        insights.push(Insight {
            id: ctx.id(),
            employee_id: employee.id.clone(),
            date: ctx.now().to_rfc3339(),
            title,
            description,
            category: InsightCategory::Recommendation,
            confidence: ctx.int(70, 90) as u8,
            related_metrics: Some(related),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::performance::{EngineerMetrics, Feedback};

    fn sde(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Ada Lovelace".to_string(),
            role: Role::Sde,
            email: "ada.lovelace1@example.com".to_string(),
            avatar: "https://avatars.githubusercontent.com/u/1".to_string(),
            department: "Engineering".to_string(),
            manager: "Sarah Johnson".to_string(),
            join_date: "2022-01-15".to_string(),
            experience_years: 6,
            skills: vec!["Rust".to_string()],
            previous_company: None,
            education: None,
        }
    }

    fn record(employee_id: &str, month: &str, rating: u8, metrics: EngineerMetrics) -> PerformanceRecord {
        PerformanceRecord {
            id: format!("{employee_id}-{month}"),
            employee_id: employee_id.to_string(),
            month: month.to_string(),
            rating,
            metrics: RoleMetrics::Engineer(metrics),
            feedback: Vec::<Feedback>::new(),
        }
    }

    fn average_metrics() -> EngineerMetrics {
        EngineerMetrics {
            code_quality: 75,
            velocity: 12,
            commit_frequency: 10,
            pull_requests_reviewed: 5,
            bugs_introduced: 4,
            on_time_delivery: 85,
            complexity_score: 70,
            test_coverage: 80,
        }
    }

    #[test]
    fn rising_ratings_produce_an_improvement_trend() {
        let employee = sde("e1");
        let records = vec![
            record("e1", "2025-03", 2, average_metrics()),
            record("e1", "2025-04", 3, average_metrics()),
            record("e1", "2025-05", 5, average_metrics()),
        ];
        let mut ctx = GeneratorContext::seeded(1);
        let insights = InsightGenerator::generate(&mut ctx, &[employee], &records);

        let trend = insights
            .iter()
            .find(|i| i.category == InsightCategory::Trend)
            .expect("trend insight");
        assert_eq!(trend.title, "Consistent Performance Improvement");
        assert!(trend.description.contains("from 2 to 5"));
        assert!((80..=95).contains(&trend.confidence));
    }

    #[test]
    fn single_month_history_skips_the_trend_but_not_the_rest() {
        let employee = sde("e1");
        let records = vec![record("e1", "2025-05", 4, average_metrics())];
        let mut ctx = GeneratorContext::seeded(2);
        let insights = InsightGenerator::generate(&mut ctx, &[employee], &records);

        assert!(insights.iter().all(|i| i.category != InsightCategory::Trend));
        assert!(insights
            .iter()
            .any(|i| i.category == InsightCategory::Recommendation));
    }

    #[test]
    fn high_code_quality_yields_a_strength_insight() {
        let employee = sde("e1");
        let mut metrics = average_metrics();
        metrics.code_quality = 90;
        let records = vec![
            record("e1", "2025-04", 4, average_metrics()),
            record("e1", "2025-05", 4, metrics),
        ];
        let mut ctx = GeneratorContext::seeded(3);
        let insights = InsightGenerator::generate(&mut ctx, &[employee], &records);

        let strength = insights
            .iter()
            .find(|i| i.category == InsightCategory::Strength)
            .expect("strength insight");
        assert_eq!(strength.title, "Exceptional Code Quality");
        assert!(strength.description.contains("90/100"));
        assert!((85..=98).contains(&strength.confidence));
    }

    #[test]
    fn every_employee_receives_a_recommendation() {
        let mut ctx = GeneratorContext::seeded(4);
        let employees = vec![sde("e1"), sde("e2")];
        let insights = InsightGenerator::generate(&mut ctx, &employees, &[]);

        for employee in &employees {
            assert!(insights.iter().any(|i| i.employee_id == employee.id
                && i.category == InsightCategory::Recommendation));
        }
    }
}

use chrono::Months;

use crate::models::employee::{Employee, Role};
use crate::models::performance::{
    EngineerMetrics, Feedback, FeedbackCategory, MlEngineerMetrics, PerformanceRecord,
    ProductManagerMetrics, RoleMetrics, Sentiment,
};
use crate::services::context::GeneratorContext;
use crate::services::employee_generator::full_name;
use crate::services::templates;

/// Months of history produced per employee, current month included.
pub const MONTHS_OF_HISTORY: usize = 6;

/// Builds the monthly appraisal history. Each employee is assigned one
/// trajectory for the whole window, so the per-employee rating series reads
/// as a coherent story rather than independent monthly draws.
pub struct PerformanceGenerator;

#[derive(Clone, Copy)]
enum Trajectory {
    Improving,
    Declining,
    Stable,
}

impl PerformanceGenerator {
    pub fn generate(ctx: &mut GeneratorContext, employees: &[Employee]) -> Vec<PerformanceRecord> {
        let mut records = Vec::with_capacity(employees.len() * MONTHS_OF_HISTORY);

        for employee in employees {
            let trajectory = match ctx.int(1, 3) {
                1 => Trajectory::Improving,
                2 => Trajectory::Declining,
                _ => Trajectory::Stable,
            };

            for step in 0..MONTHS_OF_HISTORY {
                let months_back = (MONTHS_OF_HISTORY - 1 - step) as u32;
                let month = (ctx.now() - Months::new(months_back))
                    .format("%Y-%m")
                    .to_string();

                let base = match trajectory {
                    Trajectory::Improving => 3.0 + 0.4 * step as f64,
                    Trajectory::Declining => 5.0 - 0.3 * step as f64,
                    Trajectory::Stable => 3.5 + ctx.float(-0.5, 0.5),
                };
                let rating = (base + ctx.float(-0.5, 0.5)).round().clamp(1.0, 5.0) as u8;

                let metrics =
                    Self::metrics_for(ctx, employee.role, rating, employee.experience_years);

                // High performers attract more feedback, strugglers less.
                let feedback_count = if rating >= 4 {
                    4
                } else if rating <= 2 {
                    2
                } else {
                    3
                };
                let feedback =
                    Self::feedback_for(ctx, employee, feedback_count, &month, rating);

                records.push(PerformanceRecord {
                    id: ctx.id(),
                    employee_id: employee.id.clone(),
                    month,
                    rating,
                    metrics,
                    feedback,
                });
            }
        }

        records
    }

    /// Metric values scale with a blend of the month's rating and the
    /// employee's experience, rating carrying the larger weight.
    fn metrics_for(
        ctx: &mut GeneratorContext,
        role: Role,
        rating: u8,
        experience_years: u32,
    ) -> RoleMetrics {
        let performance_factor = f64::from(rating) / 5.0;
        let experience_factor = (f64::from(experience_years) / 10.0).min(1.0);
        let combined = performance_factor * 0.7 + experience_factor * 0.3;

        let mut scaled = |base: f64, span: f64| -> i64 {
            (base + span * combined * ctx.float(0.8, 1.2)).round() as i64
        };

        match role {
            Role::Sde => RoleMetrics::Engineer(EngineerMetrics {
                code_quality: scaled(60.0, 40.0),
                velocity: scaled(5.0, 15.0),
                commit_frequency: scaled(3.0, 17.0),
                pull_requests_reviewed: scaled(2.0, 8.0),
                bugs_introduced: scaled(10.0, -8.0),
                on_time_delivery: scaled(70.0, 30.0),
                complexity_score: scaled(50.0, 50.0),
                test_coverage: scaled(60.0, 35.0),
            }),
            Role::ProductManager => RoleMetrics::ProductManager(ProductManagerMetrics {
                product_impact: scaled(60.0, 40.0),
                stakeholder_satisfaction: scaled(70.0, 30.0),
                requirement_quality: scaled(65.0, 35.0),
                decisions_timeliness: scaled(60.0, 40.0),
                on_time_delivery: scaled(70.0, 30.0),
                feature_delivery_rate: scaled(70.0, 30.0),
                roadmap_adherence: scaled(75.0, 25.0),
                market_analysis_score: scaled(65.0, 35.0),
            }),
            Role::MlEngineer => RoleMetrics::MlEngineer(MlEngineerMetrics {
                model_accuracy: scaled(70.0, 30.0),
                experiment_velocity: scaled(3.0, 7.0),
                paper_contributions: scaled(0.0, 3.0),
                data_quality: scaled(65.0, 35.0),
                model_deployments: scaled(1.0, 4.0),
                pipeline_uptime: scaled(85.0, 15.0),
                algorithm_complexity: scaled(60.0, 40.0),
            }),
        }
    }

    fn feedback_for(
        ctx: &mut GeneratorContext,
        employee: &Employee,
        count: usize,
        month: &str,
        rating: u8,
    ) -> Vec<Feedback> {
        (0..count)
            .map(|_| {
                // One draw decides both sentiment and category, so the two
                // stay correlated within an entry.
                let draw = ctx.unit();

                let sentiment = if rating >= 4 {
                    if draw < 0.7 {
                        Sentiment::Positive
                    } else if draw < 0.9 {
                        Sentiment::Neutral
                    } else {
                        Sentiment::Negative
                    }
                } else if rating <= 2 {
                    if draw < 0.7 {
                        Sentiment::Negative
                    } else if draw < 0.9 {
                        Sentiment::Neutral
                    } else {
                        Sentiment::Positive
                    }
                } else if draw < 0.5 {
                    Sentiment::Neutral
                } else if draw < 0.75 {
                    Sentiment::Positive
                } else {
                    Sentiment::Negative
                };

                let category = if draw < 0.4 {
                    FeedbackCategory::Peer
                } else if draw < 0.7 {
                    FeedbackCategory::Manager
                } else if draw < 0.9 {
                    FeedbackCategory::SelfAssessment
                } else {
                    FeedbackCategory::System
                };

                let template = *ctx.pick(templates::feedback_templates(employee.role, sentiment));
                let text = Self::substitute(ctx, employee.role, template);

                let topics = ctx.sample(templates::feedback_topics(employee.role), 1, 3);
                let from = if category == FeedbackCategory::SelfAssessment {
                    employee.name.clone()
                } else {
                    full_name(ctx)
                };

                Feedback {
                    id: ctx.id(),
                    from,
                    date: format!("{}-{}", month, ctx.int(1, 28)),
                    text,
                    category,
                    sentiment,
                    topics: Some(topics),
                }
            })
            .collect()
    }

    /// Light templating: a role-specific placeholder phrase gets swapped for
    /// a concrete subject when the template happens to contain it.
    fn substitute(ctx: &mut GeneratorContext, role: Role, template: &str) -> String {
        match role {
            Role::Sde => {
                let subsystem = *ctx.pick(&templates::SUBSYSTEMS);
                template.replacen(
                    "technical problems",
                    &format!("issues in the {} system", subsystem),
                    1,
                )
            }
            Role::ProductManager => {
                let group = *ctx.pick(&templates::STAKEHOLDER_GROUPS);
                template.replacen("stakeholders", group, 1)
            }
            Role::MlEngineer => {
                let family = *ctx.pick(&templates::MODEL_FAMILIES);
                template.replacen("models", family, 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::employee_generator::EmployeeGenerator;

    fn generate(seed: u64, count: usize) -> (Vec<Employee>, Vec<PerformanceRecord>) {
        let mut ctx = GeneratorContext::seeded(seed);
        let employees = EmployeeGenerator::generate(&mut ctx, count);
        let records = PerformanceGenerator::generate(&mut ctx, &employees);
        (employees, records)
    }

    #[test]
    fn six_records_per_employee_one_per_month() {
        let (employees, records) = generate(11, 8);
        assert_eq!(records.len(), employees.len() * MONTHS_OF_HISTORY);

        for employee in &employees {
            let mut months: Vec<&str> = records
                .iter()
                .filter(|r| r.employee_id == employee.id)
                .map(|r| r.month.as_str())
                .collect();
            assert_eq!(months.len(), MONTHS_OF_HISTORY);
            months.sort();
            months.dedup();
            assert_eq!(months.len(), MONTHS_OF_HISTORY);
        }
    }

    #[test]
    fn ratings_stay_on_the_five_point_scale() {
        let (_, records) = generate(23, 20);
        for record in &records {
            assert!((1..=5).contains(&record.rating));
        }
    }

    #[test]
    fn metric_schema_matches_the_employee_role() {
        let (employees, records) = generate(5, 20);
        for record in &records {
            let employee = employees
                .iter()
                .find(|e| e.id == record.employee_id)
                .unwrap();
            assert_eq!(record.metrics.role(), employee.role);
        }
    }

    #[test]
    fn feedback_count_follows_the_rating_band() {
        let (_, records) = generate(9, 20);
        for record in &records {
            let expected = match record.rating {
                4..=5 => 4,
                1..=2 => 2,
                _ => 3,
            };
            assert_eq!(record.feedback.len(), expected);
        }
    }

    #[test]
    fn self_feedback_is_attributed_to_the_employee() {
        let (employees, records) = generate(17, 20);
        for record in &records {
            let employee = employees
                .iter()
                .find(|e| e.id == record.employee_id)
                .unwrap();
            for entry in &record.feedback {
                if entry.category == FeedbackCategory::SelfAssessment {
                    assert_eq!(entry.from, employee.name);
                }
            }
        }
    }
}

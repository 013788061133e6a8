use chrono::Duration;

use crate::models::development::{DevelopmentGoal, DevelopmentPlan, GoalStatus};
use crate::models::employee::Employee;
use crate::models::insight::Insight;
use crate::services::context::GeneratorContext;
use crate::services::templates;

/// Builds one development plan per employee. The insights are accepted so a
/// later iteration can tailor goals to them, but goal selection currently
/// runs on role and category templates alone.
pub struct DevelopmentGenerator;

const GOAL_STATUSES: [GoalStatus; 3] = [
    GoalStatus::NotStarted,
    GoalStatus::InProgress,
    GoalStatus::Completed,
];

const COMPLETION_STEPS: [u8; 5] = [0, 25, 50, 75, 100];

impl DevelopmentGenerator {
    pub fn generate(
        ctx: &mut GeneratorContext,
        employees: &[Employee],
        _insights: &[Insight],
    ) -> Vec<DevelopmentPlan> {
        employees
            .iter()
            .map(|employee| Self::plan_for(ctx, employee))
            .collect()
    }

    fn plan_for(ctx: &mut GeneratorContext, employee: &Employee) -> DevelopmentPlan {
        let categories = templates::goal_category_order(employee.role);
        let goal_count = ctx.int(3, 5) as usize;

        let goals = (0..goal_count)
            .map(|i| {
                let category = categories[i % categories.len()];
                DevelopmentGoal {
                    id: ctx.id(),
                    title: (*ctx.pick(templates::goal_titles(employee.role, category)))
                        .to_string(),
                    description: (*ctx.pick(templates::goal_descriptions(employee.role, category)))
                        .to_string(),
                    category,
                    status: *ctx.pick(&GOAL_STATUSES),
                    due_date: (ctx.now() + Duration::days(ctx.int(1, 365)))
                        .format("%Y-%m-%d")
                        .to_string(),
                    completion_percentage: Some(*ctx.pick(&COMPLETION_STEPS)),
                    related_skills: Some(ctx.sample(
                        templates::goal_skills(employee.role, category),
                        1,
                        3,
                    )),
                }
            })
            .collect();

        DevelopmentPlan {
            id: ctx.id(),
            employee_id: employee.id.clone(),
            created: (ctx.now() - Duration::days(ctx.int(0, 1)))
                .format("%Y-%m-%d")
                .to_string(),
            goals,
        }
    }
}

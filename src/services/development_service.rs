use crate::models::dataset::Dataset;
use crate::models::development::{DevelopmentPlan, GoalStatus};
use crate::models::employee::Role;
use crate::models::views::PlanSummary;

/// Read models for the development plan overview.
pub struct DevelopmentService;

impl DevelopmentService {
    /// Plans joined with their owner, filtered by role and search term.
    /// Search matches the employee name or any goal title.
    pub fn plans(dataset: &Dataset, search: Option<&str>, role: Option<Role>) -> Vec<PlanSummary> {
        let needle = search.map(str::to_lowercase).unwrap_or_default();

        dataset
            .development_plans
            .iter()
            .filter_map(|plan| {
                let employee = dataset
                    .employees
                    .iter()
                    .find(|e| e.id == plan.employee_id)?;
                if let Some(role) = role {
                    if employee.role != role {
                        return None;
                    }
                }
                if !needle.is_empty() {
                    let name_match = employee.name.to_lowercase().contains(&needle);
                    let goal_match = plan
                        .goals
                        .iter()
                        .any(|goal| goal.title.to_lowercase().contains(&needle));
                    if !name_match && !goal_match {
                        return None;
                    }
                }
                Some(PlanSummary {
                    plan: plan.clone(),
                    employee_name: employee.name.clone(),
                    employee_role: employee.role,
                    employee_avatar: employee.avatar.clone(),
                    department: employee.department.clone(),
                    progress: Self::progress(plan),
                })
            })
            .collect()
    }

    /// Share of completed goals, rounded to whole percent. Plans without
    /// goals sit at zero.
    fn progress(plan: &DevelopmentPlan) -> u8 {
        if plan.goals.is_empty() {
            return 0;
        }
        let completed = plan
            .goals
            .iter()
            .filter(|goal| goal.status == GoalStatus::Completed)
            .count();
        ((completed as f64 / plan.goals.len() as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::development::{DevelopmentGoal, GoalCategory};
    use crate::services::context::GeneratorContext;
    use crate::services::dataset_service::DatasetService;
    use chrono::{TimeZone, Utc};

    fn dataset() -> Dataset {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut ctx = GeneratorContext::new(77, now);
        DatasetService::generate(&mut ctx, 15)
    }

    fn goal(status: GoalStatus) -> DevelopmentGoal {
        DevelopmentGoal {
            id: "g".to_string(),
            title: "Master Advanced System Design Patterns".to_string(),
            description: String::new(),
            category: GoalCategory::Technical,
            status,
            due_date: "2026-01-01".to_string(),
            completion_percentage: None,
            related_skills: None,
        }
    }

    #[test]
    fn every_plan_is_joined_with_its_owner() {
        let dataset = dataset();
        let summaries = DevelopmentService::plans(&dataset, None, None);

        assert_eq!(summaries.len(), dataset.development_plans.len());
        for summary in &summaries {
            assert!(!summary.employee_name.is_empty());
            assert!(summary.progress <= 100);
        }
    }

    #[test]
    fn role_filter_applies_to_the_plan_owner() {
        let dataset = dataset();
        let summaries = DevelopmentService::plans(&dataset, None, Some(Role::Sde));
        assert!(summaries.iter().all(|s| s.employee_role == Role::Sde));
    }

    #[test]
    fn search_matches_goal_titles_too() {
        let dataset = dataset();
        let summaries = DevelopmentService::plans(&dataset, Some("system design"), None);

        for summary in &summaries {
            let matched = summary
                .plan
                .goals
                .iter()
                .any(|g| g.title.to_lowercase().contains("system design"))
                || summary.employee_name.to_lowercase().contains("system design");
            assert!(matched);
        }
    }

    #[test]
    fn progress_is_the_completed_share() {
        let plan = DevelopmentPlan {
            id: "p".to_string(),
            employee_id: "e".to_string(),
            created: "2025-06-14".to_string(),
            goals: vec![
                goal(GoalStatus::Completed),
                goal(GoalStatus::InProgress),
                goal(GoalStatus::NotStarted),
            ],
        };
        assert_eq!(DevelopmentService::progress(&plan), 33);

        let empty = DevelopmentPlan {
            id: "p".to_string(),
            employee_id: "e".to_string(),
            created: "2025-06-14".to_string(),
            goals: Vec::new(),
        };
        assert_eq!(DevelopmentService::progress(&empty), 0);
    }
}

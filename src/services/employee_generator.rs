use chrono::Duration;

use crate::models::employee::{Employee, Role};
use crate::services::context::GeneratorContext;
use crate::services::templates;

/// Builds the synthetic employee roster. Role, department and manager are
/// uniform picks; profile fields come from role-conditioned pools.
pub struct EmployeeGenerator;

impl EmployeeGenerator {
    pub fn generate(ctx: &mut GeneratorContext, count: usize) -> Vec<Employee> {
        (0..count).map(|_| Self::generate_one(ctx)).collect()
    }

    fn generate_one(ctx: &mut GeneratorContext) -> Employee {
        let role = *ctx.pick(&Role::ALL);
        let first = *ctx.pick(&templates::FIRST_NAMES);
        let last = *ctx.pick(&templates::LAST_NAMES);
        let name = format!("{} {}", first, last);
        let email = email_for(ctx, first, last);
        let avatar = avatar_url(ctx);
        let department = (*ctx.pick(&templates::DEPARTMENTS)).to_string();
        let manager = (*ctx.pick(&templates::MANAGERS)).to_string();
        let join_date = (ctx.now() - Duration::days(ctx.int(1, 5 * 365)))
            .format("%Y-%m-%d")
            .to_string();
        let experience_years = ctx.int(1, 15) as u32;
        let skills = ctx.sample(templates::skills_for(role), 2, 5);
        let previous_company = Some((*ctx.pick(templates::previous_companies_for(role))).to_string());
        let education = Some((*ctx.pick(templates::education_for(role))).to_string());

        Employee {
            id: ctx.id(),
            name,
            role,
            email,
            avatar,
            department,
            manager,
            join_date,
            experience_years,
            skills,
            previous_company,
            education,
        }
    }
}

pub(crate) fn full_name(ctx: &mut GeneratorContext) -> String {
    format!(
        "{} {}",
        ctx.pick(&templates::FIRST_NAMES),
        ctx.pick(&templates::LAST_NAMES)
    )
}

pub(crate) fn email_for(ctx: &mut GeneratorContext, first: &str, last: &str) -> String {
    format!(
        "{}.{}{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        ctx.int(1, 99)
    )
}

pub(crate) fn avatar_url(ctx: &mut GeneratorContext) -> String {
    format!(
        "https://avatars.githubusercontent.com/u/{}",
        ctx.int(1, 10_000_000)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count_with_populated_profiles() {
        let mut ctx = GeneratorContext::seeded(42);
        let employees = EmployeeGenerator::generate(&mut ctx, 20);

        assert_eq!(employees.len(), 20);
        for employee in &employees {
            assert!(!employee.id.is_empty());
            assert!(employee.email.ends_with("@example.com"));
            assert!((1..=15).contains(&employee.experience_years));
            assert!((2..=5).contains(&employee.skills.len()));
            assert!(employee.previous_company.is_some());
            assert!(employee.education.is_some());
        }
    }

    #[test]
    fn skills_come_from_the_role_pool() {
        let mut ctx = GeneratorContext::seeded(7);
        let employees = EmployeeGenerator::generate(&mut ctx, 30);

        for employee in &employees {
            let pool = templates::skills_for(employee.role);
            for skill in &employee.skills {
                assert!(pool.contains(&skill.as_str()), "unexpected skill {skill}");
            }
        }
    }

    #[test]
    fn join_date_is_within_the_past_five_years() {
        let mut ctx = GeneratorContext::seeded(3);
        let employees = EmployeeGenerator::generate(&mut ctx, 10);
        let today = ctx.now().format("%Y-%m-%d").to_string();

        for employee in &employees {
            assert!(employee.join_date.as_str() < today.as_str());
        }
    }
}

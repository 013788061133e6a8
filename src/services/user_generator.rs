use crate::models::employee::Employee;
use crate::models::user::{User, UserRole};
use crate::services::context::GeneratorContext;
use crate::services::employee_generator::{avatar_url, email_for};
use crate::services::templates;

/// Builds the account list: one self-service account per employee plus a
/// handful of synthetic HR and Manager accounts with elevated permissions.
pub struct UserGenerator;

const EMPLOYEE_PERMISSIONS: [&str; 3] = [
    "view_own_performance",
    "view_own_feedback",
    "view_own_development",
];

const HR_PERMISSIONS: [&str; 6] = [
    "view_all_performance",
    "edit_all_performance",
    "view_all_feedback",
    "edit_all_feedback",
    "admin_access",
    "compensation_management",
];

const MANAGER_PERMISSIONS: [&str; 5] = [
    "view_team_performance",
    "edit_team_performance",
    "view_team_feedback",
    "add_feedback",
    "approve_development_plans",
];

impl UserGenerator {
    pub fn generate(ctx: &mut GeneratorContext, employees: &[Employee]) -> Vec<User> {
        let mut users: Vec<User> = employees
            .iter()
            .map(|employee| User {
                id: employee.id.clone(),
                name: employee.name.clone(),
                email: employee.email.clone(),
                role: UserRole::from(employee.role),
                avatar: employee.avatar.clone(),
                permissions: Some(
                    EMPLOYEE_PERMISSIONS.iter().map(|p| (*p).to_string()).collect(),
                ),
            })
            .collect();

        let hr_count = ctx.int(2, 4);
        for _ in 0..hr_count {
            users.push(Self::staff_account(ctx, UserRole::Hr, &HR_PERMISSIONS));
        }

        let manager_count = ctx.int(3, 6);
        for _ in 0..manager_count {
            users.push(Self::staff_account(ctx, UserRole::Manager, &MANAGER_PERMISSIONS));
        }

        users
    }

    fn staff_account(ctx: &mut GeneratorContext, role: UserRole, permissions: &[&str]) -> User {
        let first = *ctx.pick(&templates::FIRST_NAMES);
        let last = *ctx.pick(&templates::LAST_NAMES);
        User {
            id: ctx.id(),
            name: format!("{} {}", first, last),
            email: email_for(ctx, first, last),
            role,
            avatar: avatar_url(ctx),
            permissions: Some(permissions.iter().map(|p| (*p).to_string()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::employee_generator::EmployeeGenerator;

    #[test]
    fn employee_accounts_share_the_employee_identity() {
        let mut ctx = GeneratorContext::seeded(19);
        let employees = EmployeeGenerator::generate(&mut ctx, 20);
        let users = UserGenerator::generate(&mut ctx, &employees);

        for (user, employee) in users.iter().zip(&employees) {
            assert_eq!(user.id, employee.id);
            assert_eq!(user.name, employee.name);
            assert_eq!(user.role, UserRole::from(employee.role));
        }
    }

    #[test]
    fn staff_accounts_are_added_within_the_expected_bounds() {
        let mut ctx = GeneratorContext::seeded(19);
        let employees = EmployeeGenerator::generate(&mut ctx, 20);
        let users = UserGenerator::generate(&mut ctx, &employees);

        let hr = users.iter().filter(|u| u.role == UserRole::Hr).count();
        let managers = users.iter().filter(|u| u.role == UserRole::Manager).count();
        assert!((2..=4).contains(&hr));
        assert!((3..=6).contains(&managers));
        assert_eq!(users.len(), employees.len() + hr + managers);
    }

    #[test]
    fn hr_accounts_carry_admin_access() {
        let mut ctx = GeneratorContext::seeded(23);
        let employees = EmployeeGenerator::generate(&mut ctx, 5);
        let users = UserGenerator::generate(&mut ctx, &employees);

        for user in users.iter().filter(|u| u.role == UserRole::Hr) {
            let permissions = user.permissions.as_ref().expect("permissions");
            assert!(permissions.iter().any(|p| p == "admin_access"));
        }
    }
}

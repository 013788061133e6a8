use chrono::Datelike;

use crate::models::compensation::CompensationRecord;
use crate::models::employee::{Employee, Role};
use crate::services::context::GeneratorContext;

/// Builds three fiscal years of compensation per employee, the current year
/// included. Year is the outer loop so records group by year in the output.
pub struct CompensationGenerator;

const YEARS_OF_HISTORY: i32 = 3;

const ANNUAL_RATING_POOL: [u8; 6] = [3, 3, 3, 4, 4, 5];

impl CompensationGenerator {
    pub fn generate(ctx: &mut GeneratorContext, employees: &[Employee]) -> Vec<CompensationRecord> {
        let current_year = ctx.now().year();
        let mut records = Vec::with_capacity(employees.len() * YEARS_OF_HISTORY as usize);

        for year in (current_year - YEARS_OF_HISTORY + 1)..=current_year {
            for employee in employees {
                records.push(Self::record_for(ctx, employee, year));
            }
        }

        records
    }

    fn record_for(ctx: &mut GeneratorContext, employee: &Employee, year: i32) -> CompensationRecord {
        let (band_min, band_max) = salary_band(employee.role);
        let experience_factor = (f64::from(employee.experience_years) / 15.0).min(1.0);
        let base_salary = (band_min
            + (band_max - band_min) * experience_factor
            + ctx.int(-10_000, 10_000) as f64)
            .round() as i64;

        let rating = *ctx.pick(&ANNUAL_RATING_POOL);
        let bonus = (base_salary as f64 * bonus_percentage(rating)).round() as i64;

        // Stock grants start at the five-year experience mark.
        let stock_options = if employee.experience_years >= 5 {
            (base_salary as f64 * ctx.float(0.05, 0.3)).round() as i64
        } else {
            0
        };

        let notes = if rating >= 4 {
            Some("Received performance excellence recognition".to_string())
        } else if rating <= 2 {
            Some("Performance improvement plan discussed".to_string())
        } else {
            None
        };

        CompensationRecord {
            id: ctx.id(),
            employee_id: employee.id.clone(),
            year,
            base_salary,
            bonus: Some(bonus),
            stock_options: Some(stock_options),
            total_compensation: base_salary + bonus + stock_options,
            performance_rating: rating,
            notes,
        }
    }
}

fn salary_band(role: Role) -> (f64, f64) {
    match role {
        Role::Sde => (90_000.0, 180_000.0),
        Role::ProductManager => (100_000.0, 190_000.0),
        Role::MlEngineer => (110_000.0, 200_000.0),
    }
}

fn bonus_percentage(rating: u8) -> f64 {
    match rating {
        1 => 0.0,
        2 => 0.01,
        3 => 0.05,
        4 => 0.10,
        _ => 0.20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::employee_generator::EmployeeGenerator;

    #[test]
    fn three_years_per_employee_with_consistent_totals() {
        let mut ctx = GeneratorContext::seeded(13);
        let employees = EmployeeGenerator::generate(&mut ctx, 10);
        let current_year = ctx.now().year();
        let records = CompensationGenerator::generate(&mut ctx, &employees);

        assert_eq!(records.len(), employees.len() * 3);
        for record in &records {
            assert!((current_year - 2..=current_year).contains(&record.year));
            let bonus = record.bonus.unwrap_or(0);
            let stock = record.stock_options.unwrap_or(0);
            assert_eq!(record.total_compensation, record.base_salary + bonus + stock);
        }
    }

    #[test]
    fn stock_options_require_five_years_of_experience() {
        let mut ctx = GeneratorContext::seeded(29);
        let employees = EmployeeGenerator::generate(&mut ctx, 20);
        let records = CompensationGenerator::generate(&mut ctx, &employees);

        for record in &records {
            let employee = employees
                .iter()
                .find(|e| e.id == record.employee_id)
                .unwrap();
            if employee.experience_years < 5 {
                assert_eq!(record.stock_options, Some(0));
            }
        }
    }

    #[test]
    fn notes_track_the_rating_band() {
        let mut ctx = GeneratorContext::seeded(41);
        let employees = EmployeeGenerator::generate(&mut ctx, 20);
        let records = CompensationGenerator::generate(&mut ctx, &employees);

        for record in &records {
            match record.performance_rating {
                4..=5 => assert_eq!(
                    record.notes.as_deref(),
                    Some("Received performance excellence recognition")
                ),
                3 => assert!(record.notes.is_none()),
                _ => assert_eq!(
                    record.notes.as_deref(),
                    Some("Performance improvement plan discussed")
                ),
            }
        }
    }
}

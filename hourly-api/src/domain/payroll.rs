//! Payroll aggregation: time logs to worked hours to pay.
//!
//! Everything here is a pure function of its inputs.

use itertools::Itertools;
use time::Time;

use super::{
    models::{Employee, PayrollReport, PayrollRow, TimeLog},
    PayPeriod,
};

/// Hours between two clock times on the same day, never negative.
pub fn worked_hours(start: Time, end: Time) -> f64 {
    let start_minutes = i32::from(start.hour()) * 60 + i32::from(start.minute());
    let end_minutes = i32::from(end.hour()) * 60 + i32::from(end.minute());
    let diff = end_minutes - start_minutes;

    if diff > 0 {
        f64::from(diff) / 60.0
    } else {
        0.0
    }
}

/// Round half away from zero to 2 decimals.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the payment sheet for `period`.
///
/// Every employee in `employees` gets a row (ordered by id), including those
/// with no logged time. Logs outside the period or for unknown employees are
/// ignored.
pub fn aggregate(logs: &[TimeLog], employees: &[Employee], period: &PayPeriod) -> PayrollReport {
    let hours_by_employee = logs
        .iter()
        .filter(|log| period.contains(log.date))
        .into_group_map_by(|log| log.employee_id);

    let mut total_hours = 0.0;
    let mut total_payout = 0.0;

    let rows = employees
        .iter()
        .sorted_by_key(|employee| employee.id)
        .map(|employee| {
            let hours: f64 = hours_by_employee
                .get(&employee.id)
                .map(|logs| logs.iter().map(|log| log.worked_hours()).sum::<f64>())
                .unwrap_or(0.0);
            let pay = hours * employee.hourly_rate;

            total_hours += hours;
            total_payout += pay;

            PayrollRow {
                employee_id: employee.id,
                name: employee.name.clone(),
                hourly_rate: employee.hourly_rate,
                total_hours: round_cents(hours),
                total_pay: round_cents(pay),
            }
        })
        .collect();

    PayrollReport {
        period: *period,
        rows,
        total_hours: round_cents(total_hours),
        total_payout: round_cents(total_payout),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};
    use time::Date;

    use super::*;
    use crate::domain::models::{EmployeeId, ProjectId, TaskId, TimeLogId};

    fn employee(id: i32, name: &str, hourly_rate: f64) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            name: name.to_string(),
            hourly_rate,
            email: None,
            password_hash: None,
        }
    }

    fn log(id: i32, employee_id: i32, date: Date, start: Time, end: Time) -> TimeLog {
        TimeLog {
            id: TimeLogId::new(id),
            employee_id: EmployeeId::new(employee_id),
            project_id: ProjectId::new(1),
            task_id: TaskId::new(1),
            date,
            start_time: start,
            end_time: end,
        }
    }

    fn march() -> PayPeriod {
        "2024-03".parse().unwrap()
    }

    #[test]
    fn end_before_or_at_start_counts_as_zero() {
        assert_eq!(worked_hours(time!(10:00), time!(9:00)), 0.0);
        assert_eq!(worked_hours(time!(10:00), time!(10:00)), 0.0);
        assert_eq!(worked_hours(time!(9:00), time!(17:30)), 8.5);
    }

    #[test]
    fn asha_march_scenario() {
        let employees = vec![employee(1, "Asha", 500.0)];
        let logs = vec![
            log(1, 1, date!(2024 - 03 - 05), time!(9:00), time!(17:30)),
            log(2, 1, date!(2024 - 03 - 06), time!(10:00), time!(9:00)),
        ];

        let report = aggregate(&logs, &employees, &march());

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].total_hours, 8.5);
        assert_eq!(report.rows[0].total_pay, 4250.0);
        assert_eq!(report.total_payout, 4250.0);
    }

    #[test]
    fn zero_rate_pays_nothing() {
        let employees = vec![employee(1, "Volunteer", 0.0)];
        let logs = vec![log(1, 1, date!(2024 - 03 - 05), time!(8:00), time!(16:00))];

        let report = aggregate(&logs, &employees, &march());

        assert_eq!(report.rows[0].total_hours, 8.0);
        assert_eq!(report.rows[0].total_pay, 0.0);
    }

    #[test]
    fn only_logs_in_the_selected_month_count() {
        let employees = vec![employee(1, "Asha", 100.0)];
        let logs = vec![
            log(1, 1, date!(2024 - 02 - 29), time!(9:00), time!(17:00)),
            log(2, 1, date!(2024 - 03 - 01), time!(9:00), time!(10:00)),
            log(3, 1, date!(2024 - 04 - 01), time!(9:00), time!(17:00)),
        ];

        let report = aggregate(&logs, &employees, &march());

        assert_eq!(report.rows[0].total_hours, 1.0);
        assert_eq!(report.rows[0].total_pay, 100.0);
    }

    #[test]
    fn hours_are_summed_per_employee_and_rows_follow_id_order() {
        let employees = vec![employee(2, "Ravi", 200.0), employee(1, "Asha", 500.0)];
        let logs = vec![
            log(1, 1, date!(2024 - 03 - 05), time!(9:00), time!(12:00)),
            log(2, 2, date!(2024 - 03 - 05), time!(9:00), time!(9:45)),
            log(3, 1, date!(2024 - 03 - 07), time!(13:00), time!(14:30)),
        ];

        let report = aggregate(&logs, &employees, &march());

        let names: Vec<_> = report.rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, ["Asha", "Ravi"]);
        assert_eq!(report.rows[0].total_hours, 4.5);
        assert_eq!(report.rows[1].total_hours, 0.75);
        assert_eq!(report.rows[1].total_pay, 150.0);
        assert_eq!(report.total_hours, 5.25);
        assert_eq!(report.total_payout, 2400.0);
    }

    #[test]
    fn employees_without_logs_get_an_empty_row() {
        let employees = vec![employee(1, "Asha", 500.0), employee(2, "Ravi", 200.0)];
        let logs = vec![log(1, 1, date!(2024 - 03 - 05), time!(9:00), time!(10:00))];

        let report = aggregate(&logs, &employees, &march());

        assert_eq!(report.rows[1].total_hours, 0.0);
        assert_eq!(report.rows[1].total_pay, 0.0);
    }

    #[test]
    fn totals_are_rounded_once_from_unrounded_rows() {
        // 20 minutes at 10.01/h is 3.3366..., displayed as 3.34 per row.
        let employees = vec![employee(1, "A", 10.01), employee(2, "B", 10.01)];
        let logs = vec![
            log(1, 1, date!(2024 - 03 - 05), time!(9:00), time!(9:20)),
            log(2, 2, date!(2024 - 03 - 05), time!(9:00), time!(9:20)),
        ];

        let report = aggregate(&logs, &employees, &march());

        assert_eq!(report.rows[0].total_pay, 3.34);
        assert_eq!(report.rows[1].total_pay, 3.34);
        assert_eq!(report.total_payout, 6.67);
    }
}

use crate::domain::PayPeriod;

use super::EmployeeId;

/// One employee's line on the monthly payment sheet.
///
/// `total_hours` and `total_pay` are rounded to 2 decimals for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRow {
    pub employee_id: EmployeeId,
    pub name: String,
    pub hourly_rate: f64,
    pub total_hours: f64,
    pub total_pay: f64,
}

/// Payment sheet for one month.
///
/// Totals are summed from the unrounded per-employee values and rounded
/// once, so they can differ by a cent from the sum of the displayed rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollReport {
    pub period: PayPeriod,
    pub rows: Vec<PayrollRow>,
    pub total_hours: f64,
    pub total_payout: f64,
}

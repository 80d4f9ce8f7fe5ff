//! Dashboard aggregation over a list of bills.

use chrono::NaiveDate;

use crate::domain::Bill;

/// Headline figures shown above the bill table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSummary {
    pub total_bills: usize,
    pub total_amount: f64,
    pub paid_bills: usize,
    pub overdue_bills: usize,
}

impl DashboardSummary {
    /// Computes the dashboard figures. Paid bills are never counted as
    /// overdue, regardless of their due date.
    pub fn compute(bills: &[Bill], today: NaiveDate) -> Self {
        Self {
            total_bills: bills.len(),
            total_amount: bills.iter().map(|bill| bill.amount).sum(),
            paid_bills: bills.iter().filter(|bill| bill.paid).count(),
            overdue_bills: bills
                .iter()
                .filter(|bill| !bill.paid && bill.due_date < today)
                .count(),
        }
    }
}

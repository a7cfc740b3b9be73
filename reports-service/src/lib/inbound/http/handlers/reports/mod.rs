use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::reports::models::Expense;
use crate::domain::reports::models::Income;
use crate::domain::reports::models::Report;

pub mod get_reports;
pub mod get_reports_for_month;
pub mod get_reports_for_year;

pub use get_reports::get_reports;
pub use get_reports_for_month::get_reports_for_month;
pub use get_reports_for_year::get_reports_for_year;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportResponseData {
    pub incomes: Vec<EntryData>,
    pub expenses: Vec<EntryData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryData {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
}

impl From<Report> for ReportResponseData {
    fn from(report: Report) -> Self {
        Self {
            incomes: report.incomes.into_iter().map(EntryData::from).collect(),
            expenses: report.expenses.into_iter().map(EntryData::from).collect(),
        }
    }
}

impl From<Income> for EntryData {
    fn from(income: Income) -> Self {
        Self {
            id: income.id,
            description: income.description,
            amount: income.amount,
            occurred_on: income.occurred_on,
        }
    }
}

impl From<Expense> for EntryData {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            description: expense.description,
            amount: expense.amount,
            occurred_on: expense.occurred_on,
        }
    }
}

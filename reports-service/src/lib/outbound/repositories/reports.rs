use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::reports::errors::ReportsError;
use crate::domain::reports::models::Expense;
use crate::domain::reports::models::Income;
use crate::domain::reports::models::Report;
use crate::domain::reports::models::ReportPeriod;
use crate::domain::reports::ports::ReportsStore;
use crate::domain::user::models::UserId;

pub struct PostgresReportsStore {
    pool: PgPool,
}

impl PostgresReportsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_entries(
        &self,
        table: &str,
        user_id: UserId,
        period: &ReportPeriod,
    ) -> Result<Vec<EntryRow>, ReportsError> {
        // NULL parameters disable their filter, so one query covers the
        // all/year/month scopes
        let query = format!(
            r#"
            SELECT id, description, amount, occurred_on
            FROM {}
            WHERE user_id = $1
              AND ($2::int IS NULL OR EXTRACT(YEAR FROM occurred_on)::int = $2)
              AND ($3::int IS NULL OR EXTRACT(MONTH FROM occurred_on)::int = $3)
            ORDER BY occurred_on, id
            "#,
            table
        );

        sqlx::query_as::<_, EntryRow>(&query)
            .bind(user_id.0)
            .bind(period.year.map(|y| y.as_i32()))
            .bind(period.month.map(|m| m.as_u32() as i32))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[derive(FromRow)]
struct EntryRow {
    id: i64,
    description: String,
    amount: f64,
    occurred_on: NaiveDate,
}

fn map_sqlx_error(e: sqlx::Error) -> ReportsError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => ReportsError::Unavailable(e.to_string()),
        _ => ReportsError::Database(e.to_string()),
    }
}

#[async_trait]
impl ReportsStore for PostgresReportsStore {
    async fn report_for(
        &self,
        user_id: UserId,
        period: &ReportPeriod,
    ) -> Result<Report, ReportsError> {
        let incomes = self.fetch_entries("incomes", user_id, period).await?;
        let expenses = self.fetch_entries("expenses", user_id, period).await?;

        Ok(Report {
            incomes: incomes
                .into_iter()
                .map(|row| Income {
                    id: row.id,
                    description: row.description,
                    amount: row.amount,
                    occurred_on: row.occurred_on,
                })
                .collect(),
            expenses: expenses
                .into_iter()
                .map(|row| Expense {
                    id: row.id,
                    description: row.description,
                    amount: row.amount,
                    occurred_on: row.occurred_on,
                })
                .collect(),
        })
    }
}

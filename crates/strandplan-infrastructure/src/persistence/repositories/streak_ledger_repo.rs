use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use strandplan_domain::shared::{DomainError, UserId};
use strandplan_domain::streak::{StreakLedgerRepository, StreakLogEntry};

const DAY_FORMAT: &str = "%Y-%m-%d";

pub struct SqliteStreakLedgerRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStreakLedgerRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT)
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid calendar_day: {} ({})", raw, e)))
}

#[async_trait]
impl StreakLedgerRepository for SqliteStreakLedgerRepository {
    async fn append_if_absent(&self, entry: &StreakLogEntry) -> Result<bool, DomainError> {
        // INSERT OR IGNORE against the (user_id, calendar_day) UNIQUE
        // constraint: the losing writer of a duplicate-tap race affects
        // zero rows and reports created=false.
        let query = r#"
            INSERT OR IGNORE INTO streak_log (user_id, calendar_day, logged_at_utc)
            VALUES (?1, ?2, ?3)
        "#;

        let result = sqlx::query(query)
            .bind(entry.user_id.as_str())
            .bind(entry.calendar_day.format(DAY_FORMAT).to_string())
            .bind(entry.logged_at_utc)
            .execute(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("Append streak log: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_days(
        &self,
        user_id: &UserId,
        since: Option<NaiveDate>,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        let rows: Vec<String> = match since {
            Some(since_day) => {
                let query = r#"
                    SELECT calendar_day
                    FROM streak_log
                    WHERE user_id = ?1 AND calendar_day >= ?2
                    ORDER BY calendar_day ASC
                "#;
                sqlx::query_scalar(query)
                    .bind(user_id.as_str())
                    .bind(since_day.format(DAY_FORMAT).to_string())
                    .fetch_all(&*self.pool)
                    .await
            }
            None => {
                let query = r#"
                    SELECT calendar_day
                    FROM streak_log
                    WHERE user_id = ?1
                    ORDER BY calendar_day ASC
                "#;
                sqlx::query_scalar(query)
                    .bind(user_id.as_str())
                    .fetch_all(&*self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::Repository(format!("List streak days: {e}")))?;

        rows.iter().map(|raw| parse_day(raw)).collect()
    }

    async fn list_days_in_range(
        &self,
        user_id: &UserId,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        let query = r#"
            SELECT calendar_day
            FROM streak_log
            WHERE user_id = ?1
              AND calendar_day >= ?2
              AND calendar_day <= ?3
            ORDER BY calendar_day ASC
        "#;

        let rows: Vec<String> = sqlx::query_scalar(query)
            .bind(user_id.as_str())
            .bind(start_day.format(DAY_FORMAT).to_string())
            .bind(end_day.format(DAY_FORMAT).to_string())
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("List streak days in range: {e}")))?;

        rows.iter().map(|raw| parse_day(raw)).collect()
    }
}

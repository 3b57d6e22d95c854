use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use strandplan_domain::entitlement::{
    SubscriptionRecord, SubscriptionRepository, SubscriptionStatus,
};
use strandplan_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct SubscriptionRow {
    user_id: String,
    status: String,
    trial_started_at_utc: Option<DateTime<Utc>>,
    trial_ends_at_utc: Option<DateTime<Utc>>,
    current_period_end_utc: Option<DateTime<Utc>>,
    posting_goal: Option<i64>,
}

impl SubscriptionRow {
    fn into_record(self) -> SubscriptionRecord {
        SubscriptionRecord {
            user_id: UserId::from_string(&self.user_id),
            status: SubscriptionStatus::parse(&self.status),
            trial_started_at_utc: self.trial_started_at_utc,
            trial_ends_at_utc: self.trial_ends_at_utc,
            current_period_end_utc: self.current_period_end_utc,
            posting_goal: self.posting_goal.map(|g| g.max(0) as u32),
        }
    }
}

pub struct SqliteSubscriptionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSubscriptionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SqliteSubscriptionRepository {
    async fn get(&self, user_id: &UserId) -> Result<Option<SubscriptionRecord>, DomainError> {
        let query = r#"
            SELECT
                user_id,
                status,
                trial_started_at_utc,
                trial_ends_at_utc,
                current_period_end_utc,
                posting_goal
            FROM subscriptions
            WHERE user_id = ?1
        "#;

        let row: Option<SubscriptionRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("Get subscription: {e}")))?;

        Ok(row.map(|r| r.into_record()))
    }

    async fn save(&self, record: &SubscriptionRecord) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO subscriptions (
                user_id,
                status,
                trial_started_at_utc,
                trial_ends_at_utc,
                current_period_end_utc,
                posting_goal
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#;

        sqlx::query(query)
            .bind(record.user_id.as_str())
            .bind(record.status.as_str())
            .bind(record.trial_started_at_utc)
            .bind(record.trial_ends_at_utc)
            .bind(record.current_period_end_utc)
            .bind(record.posting_goal.map(|g| g as i64))
            .execute(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("Save subscription: {e}")))?;

        Ok(())
    }
}

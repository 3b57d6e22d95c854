use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use strandplan_domain::profile::{UserProfile, UserProfileRepository};
use strandplan_domain::shared::{DomainError, UserId};

#[derive(FromRow)]
struct UserProfileRow {
    user_id: String,
    timezone: Option<String>,
    created_at_utc: DateTime<Utc>,
}

impl UserProfileRow {
    fn into_profile(self) -> UserProfile {
        UserProfile::new(
            UserId::from_string(&self.user_id),
            self.timezone,
            self.created_at_utc,
        )
    }
}

pub struct SqliteUserProfileRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserProfileRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for SqliteUserProfileRepository {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let query = r#"
            SELECT user_id, timezone, created_at_utc
            FROM user_profiles
            WHERE user_id = ?1
        "#;

        let row: Option<UserProfileRow> = sqlx::query_as(query)
            .bind(user_id.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("Find user profile: {e}")))?;

        Ok(row.map(|r| r.into_profile()))
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO user_profiles (user_id, timezone, created_at_utc)
            VALUES (?1, ?2, ?3)
        "#;

        sqlx::query(query)
            .bind(profile.user_id.as_str())
            .bind(profile.timezone.as_deref())
            .bind(profile.created_at_utc)
            .execute(&*self.pool)
            .await
            .map_err(|e| DomainError::Repository(format!("Save user profile: {e}")))?;

        Ok(())
    }
}

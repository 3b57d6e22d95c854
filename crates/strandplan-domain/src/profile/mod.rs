//! User profile: the identity collaborator's view of a user that the
//! streak engine needs (timezone preference and account age).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    /// Stored IANA timezone preference; `None` falls back to the product
    /// default at resolution time.
    pub timezone: Option<String>,
    pub created_at_utc: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: UserId, timezone: Option<String>, created_at_utc: DateTime<Utc>) -> Self {
        Self {
            user_id,
            timezone,
            created_at_utc,
        }
    }
}

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError>;
}

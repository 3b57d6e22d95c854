//! Hand-rolled in-memory repositories for application-layer tests.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use strandplan_domain::entitlement::{SubscriptionRecord, SubscriptionRepository};
use strandplan_domain::profile::{UserProfile, UserProfileRepository};
use strandplan_domain::shared::{DomainError, UserId};
use strandplan_domain::streak::{StreakLedgerRepository, StreakLogEntry};

pub struct InMemoryLedger {
    days: RwLock<HashMap<String, BTreeSet<NaiveDate>>>,
    fail_next: RwLock<bool>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            days: RwLock::new(HashMap::new()),
            fail_next: RwLock::new(false),
        }
    }

    /// Make the next ledger call fail like an unreachable store.
    pub async fn fail_next(&self) {
        *self.fail_next.write().await = true;
    }

    pub async fn entry_count(&self) -> usize {
        self.days.read().await.values().map(|set| set.len()).sum()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        let mut flag = self.fail_next.write().await;
        if *flag {
            *flag = false;
            return Err(DomainError::Repository("store unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StreakLedgerRepository for InMemoryLedger {
    async fn append_if_absent(&self, entry: &StreakLogEntry) -> Result<bool, DomainError> {
        self.check_failure().await?;
        let mut days = self.days.write().await;
        Ok(days
            .entry(entry.user_id.as_str().to_string())
            .or_default()
            .insert(entry.calendar_day))
    }

    async fn list_days(
        &self,
        user_id: &UserId,
        since: Option<NaiveDate>,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        self.check_failure().await?;
        let days = self.days.read().await;
        Ok(days
            .get(user_id.as_str())
            .map(|set| {
                set.iter()
                    .copied()
                    .filter(|d| since.is_none_or(|s| *d >= s))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list_days_in_range(
        &self,
        user_id: &UserId,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Vec<NaiveDate>, DomainError> {
        self.check_failure().await?;
        let days = self.days.read().await;
        Ok(days
            .get(user_id.as_str())
            .map(|set| {
                set.iter()
                    .copied()
                    .filter(|d| *d >= start_day && *d <= end_day)
                    .collect()
            })
            .unwrap_or_default())
    }
}

pub struct InMemorySubscriptions {
    records: RwLock<HashMap<String, SubscriptionRecord>>,
}

impl InMemorySubscriptions {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn get(&self, user_id: &UserId) -> Result<Option<SubscriptionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(user_id.as_str()).cloned())
    }

    async fn save(&self, record: &SubscriptionRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(record.user_id.as_str().to_string(), record.clone());
        Ok(())
    }
}

pub struct InMemoryProfiles {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryProfiles {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserProfileRepository for InMemoryProfiles {
    async fn find_by_id(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id.as_str()).cloned())
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.user_id.as_str().to_string(), profile.clone());
        Ok(())
    }
}

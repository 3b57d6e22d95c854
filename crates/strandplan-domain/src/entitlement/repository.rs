use async_trait::async_trait;

use super::SubscriptionRecord;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Billing state for a user. `None` is a valid steady state, not an
    /// error: plenty of accounts never start a checkout.
    async fn get(&self, user_id: &UserId) -> Result<Option<SubscriptionRecord>, DomainError>;

    /// Upsert the record. Written by the billing-webhook collaborator;
    /// entitlement resolution only ever reads.
    async fn save(&self, record: &SubscriptionRecord) -> Result<(), DomainError>;
}

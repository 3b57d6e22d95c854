use async_trait::async_trait;
use chrono::NaiveDate;

use super::StreakLogEntry;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait StreakLedgerRepository: Send + Sync {
    /// Insert a ledger entry unless one already exists for its day.
    ///
    /// Must be atomic: two concurrent calls for the same (user, day) store
    /// exactly one row, and only the winner sees `true`. Implementations
    /// enforce this with a storage-level uniqueness constraint, never an
    /// application-level check-then-insert.
    async fn append_if_absent(&self, entry: &StreakLogEntry) -> Result<bool, DomainError>;

    /// Distinct logged days for a user, ascending, optionally bounded below.
    ///
    /// Callers pass a lookback bound so streak computation stays
    /// O(recent history) rather than O(all time).
    async fn list_days(
        &self,
        user_id: &UserId,
        since: Option<NaiveDate>,
    ) -> Result<Vec<NaiveDate>, DomainError>;

    /// Distinct logged days inside an inclusive date range, ascending.
    async fn list_days_in_range(
        &self,
        user_id: &UserId,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Vec<NaiveDate>, DomainError>;
}

use std::sync::Arc;

use chrono::{DateTime, Utc};

use strandplan_domain::content::CONTENT_CATEGORIES;
use strandplan_domain::entitlement::SubscriptionRepository;
use strandplan_domain::profile::UserProfileRepository;
use strandplan_domain::shared::{DomainError, UserId};
use strandplan_domain::streak::StreakLedgerRepository;

use crate::application::dtos::{CalendarMonthDto, ContentCategoryDto, TrendDto};

mod calendar;
mod trend;

/// Read-side queries for the planner UI: the month calendar (entitlement
/// gated) and the recent-activity trend.
pub struct PlannerQueries {
    ledger: Arc<dyn StreakLedgerRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    profiles: Arc<dyn UserProfileRepository>,
}

impl PlannerQueries {
    pub fn new(
        ledger: Arc<dyn StreakLedgerRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        profiles: Arc<dyn UserProfileRepository>,
    ) -> Self {
        Self {
            ledger,
            subscriptions,
            profiles,
        }
    }

    /// Posting activity for one calendar month, locked when the month is
    /// outside the user's entitled content months.
    pub async fn get_calendar_month(
        &self,
        user_id: &UserId,
        year: i32,
        month: u32,
        now_utc: DateTime<Utc>,
    ) -> Result<CalendarMonthDto, DomainError> {
        calendar::get_calendar_month(
            self.ledger.as_ref(),
            self.subscriptions.as_ref(),
            self.profiles.as_ref(),
            user_id,
            year,
            month,
            now_utc,
        )
        .await
    }

    /// Posted / not-posted series for the last `days` days, ending today.
    pub async fn get_trend(
        &self,
        user_id: &UserId,
        days: u32,
        now_utc: DateTime<Utc>,
    ) -> Result<TrendDto, DomainError> {
        trend::get_trend(
            self.ledger.as_ref(),
            self.profiles.as_ref(),
            user_id,
            days,
            now_utc,
        )
        .await
    }

    /// The closed set of post categories, for planner filters and chips.
    pub fn list_content_categories(&self) -> Vec<ContentCategoryDto> {
        CONTENT_CATEGORIES.iter().map(ContentCategoryDto::from).collect()
    }
}

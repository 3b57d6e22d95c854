//! Subscription state and content-access entitlement.
//!
//! The billing collaborator owns [`SubscriptionRecord`]; this module only
//! reads it. [`resolve_access`] is total: any well-formed record, and the
//! complete absence of one, resolves to an [`AccessStatus`] without erroring.
//! Anything unexpected resolves closed (no access), never open.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;

mod repository;
pub use repository::SubscriptionRepository;

/// Days of full-calendar-teaser access a brand-new account gets before the
/// paywall applies.
pub const FREE_PREVIEW_DAYS: i64 = 7;

/// Calendar months (1-12) visible during the free preview.
pub const PREVIEW_MONTHS: [u32; 1] = [1];

/// Whether accounts whose trial or subscription has lapsed keep the preview
/// months as a permanent teaser. Lapsed accounts are locked out entirely;
/// the preview is a one-time window from account creation.
pub const EXPIRED_KEEPS_PREVIEW: bool = false;

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    None,
    Trialing,
    Active,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::None => "none",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
        }
    }

    /// Parse the status as stored by the billing collaborator. Unknown
    /// strings resolve to `None` so entitlement stays total and fails
    /// closed rather than erroring.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "trialing" => SubscriptionStatus::Trialing,
            "active" => SubscriptionStatus::Active,
            "past_due" => SubscriptionStatus::PastDue,
            "canceled" => SubscriptionStatus::Canceled,
            _ => SubscriptionStatus::None,
        }
    }
}

/// Billing state for one user, written by the payment-webhook collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub user_id: UserId,
    pub status: SubscriptionStatus,
    pub trial_started_at_utc: Option<DateTime<Utc>>,
    pub trial_ends_at_utc: Option<DateTime<Utc>>,
    pub current_period_end_utc: Option<DateTime<Utc>>,
    /// Posts-per-week target picked at onboarding.
    pub posting_goal: Option<u32>,
}

/// Derived access view. Recomputed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessStatus {
    pub has_access: bool,
    /// Calendar-content months (1-12) the user may view, ascending.
    pub accessible_months: Vec<u32>,
    pub free_access_ends_at_utc: Option<DateTime<Utc>>,
    pub subscription_status: SubscriptionStatus,
    /// Whole days left in the trial or free-preview window, rounded up so a
    /// user mid-day on their last day still sees "1 day left".
    pub days_remaining: u32,
}

impl AccessStatus {
    fn locked(status: SubscriptionStatus) -> Self {
        let accessible_months = if EXPIRED_KEEPS_PREVIEW {
            PREVIEW_MONTHS.to_vec()
        } else {
            Vec::new()
        };
        Self {
            has_access: EXPIRED_KEEPS_PREVIEW,
            accessible_months,
            free_access_ends_at_utc: None,
            subscription_status: status,
            days_remaining: 0,
        }
    }
}

fn all_months() -> Vec<u32> {
    (1..=12).collect()
}

/// Calendar-day rounding: 3 days 2 hours remaining reads as 4 days.
fn days_remaining_until(ends_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let seconds = (ends_at - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        (seconds as u64).div_ceil(SECONDS_PER_DAY as u64) as u32
    }
}

/// Resolve what the user may see right now.
///
/// An absent record is a valid steady state (account created, checkout never
/// started) and is treated exactly like `status == none` from account
/// creation.
pub fn resolve_access(
    subscription: Option<&SubscriptionRecord>,
    account_created_at_utc: DateTime<Utc>,
    now_utc: DateTime<Utc>,
) -> AccessStatus {
    let status = subscription.map(|s| s.status).unwrap_or(SubscriptionStatus::None);

    match status {
        SubscriptionStatus::Active => {
            // A period end may not have synced yet right after checkout;
            // an active record without one still grants access.
            let paid_up = subscription
                .and_then(|s| s.current_period_end_utc)
                .map(|end| end > now_utc)
                .unwrap_or(true);
            if paid_up {
                AccessStatus {
                    has_access: true,
                    accessible_months: all_months(),
                    free_access_ends_at_utc: None,
                    subscription_status: status,
                    days_remaining: 0,
                }
            } else {
                AccessStatus::locked(status)
            }
        }
        SubscriptionStatus::Trialing => {
            match subscription.and_then(|s| s.trial_ends_at_utc) {
                Some(ends_at) if ends_at > now_utc => AccessStatus {
                    has_access: true,
                    accessible_months: all_months(),
                    free_access_ends_at_utc: Some(ends_at),
                    subscription_status: status,
                    days_remaining: days_remaining_until(ends_at, now_utc),
                },
                // Expired trial, or a trialing record missing its end date:
                // fail closed.
                _ => AccessStatus::locked(status),
            }
        }
        SubscriptionStatus::None => {
            let preview_ends = account_created_at_utc + Duration::days(FREE_PREVIEW_DAYS);
            if now_utc < preview_ends {
                AccessStatus {
                    has_access: true,
                    accessible_months: PREVIEW_MONTHS.to_vec(),
                    free_access_ends_at_utc: Some(preview_ends),
                    subscription_status: status,
                    days_remaining: days_remaining_until(preview_ends, now_utc),
                }
            } else {
                AccessStatus::locked(status)
            }
        }
        SubscriptionStatus::PastDue | SubscriptionStatus::Canceled => AccessStatus::locked(status),
    }
}

//! The streak/entitlement service: the one place that decides "what day is
//! today for this user" and "has this user already logged today".
//!
//! Operations take `now_utc` explicitly so behavior is deterministic under
//! test; nothing here reads the ambient clock. Clients never supply a day.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::info;

use strandplan_domain::calendar::resolve_calendar_day;
use strandplan_domain::entitlement::{resolve_access, SubscriptionRepository};
use strandplan_domain::profile::UserProfileRepository;
use strandplan_domain::shared::{DomainError, UserId};
use strandplan_domain::streak::{
    compute_streak, posts_in_week, StreakLedgerRepository, StreakLogEntry,
};

use crate::application::dtos::{GoalProgressDto, ProfileSummaryDto, StreakSummaryDto};

/// Ledger reads are bounded to this many days so streak computation stays
/// O(recent history). Far longer than any realistic streak plus slack for
/// the longest-streak display.
pub const STREAK_LOOKBACK_DAYS: i64 = 730;

pub struct StreakEntitlementService {
    ledger: Arc<dyn StreakLedgerRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    profiles: Arc<dyn UserProfileRepository>,
}

impl StreakEntitlementService {
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

    /// Full profile-screen summary: streak, milestones, goal progress and
    /// content access, computed against one consistent "today".
    pub async fn get_summary(
        &self,
        user_id: &UserId,
        now_utc: DateTime<Utc>,
    ) -> Result<ProfileSummaryDto, DomainError> {
        let (timezone, created_at) = self.profile_parts(user_id, now_utc).await?;
        let today = resolve_calendar_day(now_utc, timezone.as_deref());

        let days = self
            .ledger
            .list_days(user_id, Some(lookback_start(today)))
            .await?;
        let streak = compute_streak(&days, today);

        let subscription = self.subscriptions.get(user_id).await?;
        let access = resolve_access(subscription.as_ref(), created_at, now_utc);

        let goal = subscription
            .as_ref()
            .and_then(|s| s.posting_goal)
            .map(|goal_per_week| GoalProgressDto {
                goal_per_week,
                posts_this_week: posts_in_week(&days, today),
            });

        info!(
            "[streak] summary user={} today={} current={} access={}",
            user_id, today, streak.current_streak, access.has_access
        );

        Ok(ProfileSummaryDto {
            user_id: user_id.to_string(),
            today: today.format("%Y-%m-%d").to_string(),
            streak: StreakSummaryDto::from_summary(streak),
            access: access.into(),
            goal,
        })
    }

    /// Log a post for the user's current calendar day.
    ///
    /// Idempotent: a duplicate same-day call (double tap, retried request)
    /// is success, returning the same freshly recomputed summary as the
    /// first call. The UNIQUE constraint behind `append_if_absent` closes
    /// the concurrent-duplicate race.
    pub async fn log_today(
        &self,
        user_id: &UserId,
        now_utc: DateTime<Utc>,
    ) -> Result<StreakSummaryDto, DomainError> {
        let (timezone, _) = self.profile_parts(user_id, now_utc).await?;
        let today = resolve_calendar_day(now_utc, timezone.as_deref());

        let entry = StreakLogEntry::new(user_id.clone(), today, now_utc);
        let created = self.ledger.append_if_absent(&entry).await?;
        if created {
            info!("[streak] post logged user={} day={}", user_id, today);
        } else {
            info!("[streak] duplicate log ignored user={} day={}", user_id, today);
        }

        let days = self
            .ledger
            .list_days(user_id, Some(lookback_start(today)))
            .await?;
        Ok(StreakSummaryDto::from_summary(compute_streak(&days, today)))
    }

    /// Timezone preference and account age. An account without a profile
    /// row yet (first request racing onboarding) is treated as brand-new in
    /// the default zone rather than failing the request.
    async fn profile_parts(
        &self,
        user_id: &UserId,
        now_utc: DateTime<Utc>,
    ) -> Result<(Option<String>, DateTime<Utc>), DomainError> {
        match self.profiles.find_by_id(user_id).await? {
            Some(profile) => Ok((profile.timezone, profile.created_at_utc)),
            None => Ok((None, now_utc)),
        }
    }
}

fn lookback_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(STREAK_LOOKBACK_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        InMemoryLedger, InMemoryProfiles, InMemorySubscriptions,
    };
    use strandplan_domain::entitlement::{SubscriptionRecord, SubscriptionStatus};
    use strandplan_domain::profile::UserProfile;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 instant")
    }

    fn service() -> (
        StreakEntitlementService,
        Arc<InMemoryLedger>,
        Arc<InMemorySubscriptions>,
        Arc<InMemoryProfiles>,
    ) {
        let ledger = Arc::new(InMemoryLedger::new());
        let subscriptions = Arc::new(InMemorySubscriptions::new());
        let profiles = Arc::new(InMemoryProfiles::new());
        let svc = StreakEntitlementService::new(
            ledger.clone(),
            subscriptions.clone(),
            profiles.clone(),
        );
        (svc, ledger, subscriptions, profiles)
    }

    async fn seed_profile(profiles: &InMemoryProfiles, user_id: &UserId, tz: &str, created: DateTime<Utc>) {
        profiles
            .save(&UserProfile::new(
                user_id.clone(),
                Some(tz.to_string()),
                created,
            ))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_log_today_then_summary() {
        let (svc, _, _, profiles) = service();
        let user_id = UserId::new();
        let now = instant("2026-03-10T18:00:00Z");
        seed_profile(&profiles, &user_id, "America/New_York", now - Duration::days(1)).await;

        let summary = svc.log_today(&user_id, now).await.unwrap();
        assert_eq!(summary.current_streak, 1);
        assert!(summary.has_posted_today);

        let full = svc.get_summary(&user_id, now).await.unwrap();
        assert_eq!(full.today, "2026-03-10");
        assert_eq!(full.streak.current_streak, 1);
    }

    #[tokio::test]
    async fn test_duplicate_log_is_idempotent_success() {
        let (svc, ledger, _, profiles) = service();
        let user_id = UserId::new();
        let now = instant("2026-03-10T18:00:00Z");
        seed_profile(&profiles, &user_id, "America/New_York", now - Duration::days(1)).await;

        let first = svc.log_today(&user_id, now).await.unwrap();
        let second = svc.log_today(&user_id, now + Duration::minutes(5)).await.unwrap();

        assert_eq!(first.total_posts, 1);
        assert_eq!(second.total_posts, 1);
        assert_eq!(ledger.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_today_resolved_in_user_timezone() {
        // 02:30 UTC on the 10th is still the evening of the 9th in New York.
        let (svc, ledger, _, profiles) = service();
        let user_id = UserId::new();
        let now = instant("2026-03-10T02:30:00Z");
        seed_profile(&profiles, &user_id, "America/New_York", now - Duration::days(1)).await;

        svc.log_today(&user_id, now).await.unwrap();
        let days = ledger.list_days(&user_id, None).await.unwrap();
        assert_eq!(days, vec![NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()]);
    }

    #[tokio::test]
    async fn test_timezone_change_does_not_rewrite_history() {
        let (svc, ledger, _, profiles) = service();
        let user_id = UserId::new();
        let created = instant("2026-03-01T00:00:00Z");
        seed_profile(&profiles, &user_id, "America/New_York", created).await;

        let first_now = instant("2026-03-09T23:00:00Z"); // 03-09 in NY
        svc.log_today(&user_id, first_now).await.unwrap();

        // User moves to Tokyo; the stored day for the earlier post stays.
        seed_profile(&profiles, &user_id, "Asia/Tokyo", created).await;
        let second_now = instant("2026-03-10T16:00:00Z"); // 03-11 in Tokyo
        svc.log_today(&user_id, second_now).await.unwrap();

        let days = ledger.list_days(&user_id, None).await.unwrap();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_summary_for_brand_new_user_without_profile() {
        // No profile row yet: default timezone, preview window from now.
        let (svc, _, _, _) = service();
        let user_id = UserId::new();
        let now = instant("2026-03-10T18:00:00Z");

        let summary = svc.get_summary(&user_id, now).await.unwrap();
        assert!(summary.access.has_access);
        assert_eq!(summary.access.subscription_status, "none");
        assert_eq!(summary.streak.current_streak, 0);
        assert!(summary.goal.is_none());
    }

    #[tokio::test]
    async fn test_summary_includes_goal_progress() {
        let (svc, _, subscriptions, profiles) = service();
        let user_id = UserId::new();
        let now = instant("2026-03-10T18:00:00Z"); // Tuesday
        seed_profile(&profiles, &user_id, "UTC", now - Duration::days(30)).await;

        subscriptions
            .save(&SubscriptionRecord {
                user_id: user_id.clone(),
                status: SubscriptionStatus::Active,
                trial_started_at_utc: None,
                trial_ends_at_utc: None,
                current_period_end_utc: Some(now + Duration::days(10)),
                posting_goal: Some(3),
            })
            .await
            .unwrap();

        svc.log_today(&user_id, now - Duration::days(1)).await.unwrap();
        svc.log_today(&user_id, now).await.unwrap();

        let summary = svc.get_summary(&user_id, now).await.unwrap();
        let goal = summary.goal.unwrap();
        assert_eq!(goal.goal_per_week, 3);
        assert_eq!(goal.posts_this_week, 2);
        assert!(summary.access.has_access);
        assert_eq!(summary.access.accessible_months.len(), 12);
    }

    #[tokio::test]
    async fn test_ledger_failure_surfaces_as_retryable() {
        let (svc, ledger, _, profiles) = service();
        let user_id = UserId::new();
        let now = instant("2026-03-10T18:00:00Z");
        seed_profile(&profiles, &user_id, "UTC", now - Duration::days(1)).await;

        ledger.fail_next().await;
        let err = svc.log_today(&user_id, now).await.unwrap_err();
        assert!(err.is_retryable());
    }
}

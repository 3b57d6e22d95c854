//! Posting-streak ledger types and the streak calculator.
//!
//! The ledger is append-only: one entry per user per calendar day, written
//! once and never mutated. Everything the profile screen shows about a
//! streak is recomputed from the ledger on read.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;

mod repository;
pub use repository::StreakLedgerRepository;

/// One "post logged" event. At most one per (user, calendar day); the
/// storage layer enforces the uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakLogEntry {
    pub user_id: UserId,
    /// Civil date in the user's timezone at the moment the post was logged.
    pub calendar_day: NaiveDate,
    pub logged_at_utc: DateTime<Utc>,
}

impl StreakLogEntry {
    pub fn new(user_id: UserId, calendar_day: NaiveDate, logged_at_utc: DateTime<Utc>) -> Self {
        Self {
            user_id,
            calendar_day,
            logged_at_utc,
        }
    }
}

/// Derived streak view. Never persisted; the ledger is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_posts: u32,
    pub has_posted_today: bool,
}

/// Compute the streak view from a user's logged days.
///
/// A streak is a run of consecutive civil dates. The current streak is the
/// run ending at `today` or at yesterday (posting yesterday keeps the streak
/// alive until tonight); missing yesterday zeroes it no matter how long the
/// older history is. Consecutiveness is successor-date, not elapsed hours,
/// so daylight-saving shifts never break a streak.
///
/// `days` may arrive in any order and with duplicates; days after `today`
/// are ignored (the service decides "today", never the client).
pub fn compute_streak(days: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    let mut sorted: Vec<NaiveDate> = days.iter().copied().filter(|d| *d <= today).collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for &day in &sorted {
        run = match prev {
            Some(p) if (day - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    // After the loop `run` is the length of the trailing run; it only counts
    // as the current streak if that run reaches today or yesterday.
    let current = match prev {
        Some(last) if (today - last).num_days() <= 1 => run,
        _ => 0,
    };

    StreakSummary {
        current_streak: current,
        longest_streak: longest,
        total_posts: sorted.len() as u32,
        has_posted_today: sorted.binary_search(&today).is_ok(),
    }
}

/// Posts logged during the ISO week containing `today`, for posting-goal
/// progress. Duplicated days count once.
pub fn posts_in_week(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let week = today.iso_week();
    let mut in_week: Vec<NaiveDate> = days
        .iter()
        .copied()
        .filter(|d| *d <= today && d.iso_week() == week)
        .collect();
    in_week.sort_unstable();
    in_week.dedup();
    in_week.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let summary = compute_streak(&[], day(2026, 3, 10));
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 0);
        assert_eq!(summary.total_posts, 0);
        assert!(!summary.has_posted_today);
    }

    #[test]
    fn test_posted_today_only() {
        let today = day(2026, 3, 10);
        let summary = compute_streak(&[today], today);
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 1);
        assert!(summary.has_posted_today);
    }

    #[test]
    fn test_streak_alive_after_posting_yesterday() {
        // Posted yesterday, nothing yet today: streak of 1 is still live.
        let today = day(2026, 3, 10);
        let summary = compute_streak(&[day(2026, 3, 9)], today);
        assert_eq!(summary.current_streak, 1);
        assert!(!summary.has_posted_today);
    }

    #[test]
    fn test_missed_yesterday_zeroes_current_streak() {
        // Posted two days in a row, then skipped yesterday.
        let today = day(2026, 3, 10);
        let summary = compute_streak(&[day(2026, 3, 7), day(2026, 3, 8)], today);
        assert_eq!(summary.current_streak, 0);
        assert!(summary.longest_streak >= 2);
        assert_eq!(summary.total_posts, 2);
    }

    #[test]
    fn test_longest_streak_independent_of_recency() {
        let today = day(2026, 6, 1);
        let history = [
            day(2026, 1, 1),
            day(2026, 1, 2),
            day(2026, 1, 3),
            day(2026, 1, 4),
            day(2026, 5, 31),
        ];
        let summary = compute_streak(&history, today);
        assert_eq!(summary.longest_streak, 4);
        assert_eq!(summary.current_streak, 1);
    }

    #[test]
    fn test_current_never_exceeds_longest() {
        let today = day(2026, 3, 10);
        let histories: Vec<Vec<NaiveDate>> = vec![
            vec![],
            vec![today],
            vec![day(2026, 3, 8), day(2026, 3, 9), today],
            vec![day(2026, 2, 1), day(2026, 3, 9)],
        ];
        for history in histories {
            let summary = compute_streak(&history, today);
            assert!(summary.current_streak <= summary.longest_streak);
        }
    }

    #[test]
    fn test_gap_of_any_size_breaks_a_run() {
        let today = day(2026, 3, 10);
        let summary = compute_streak(&[day(2026, 3, 7), day(2026, 3, 9), today], today);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.longest_streak, 2);
        assert_eq!(summary.total_posts, 3);
    }

    #[test]
    fn test_duplicates_and_unsorted_input_tolerated() {
        let today = day(2026, 3, 10);
        let history = [day(2026, 3, 10), day(2026, 3, 9), day(2026, 3, 9)];
        let summary = compute_streak(&history, today);
        assert_eq!(summary.current_streak, 2);
        assert_eq!(summary.total_posts, 2);
    }

    #[test]
    fn test_future_days_ignored() {
        let today = day(2026, 3, 10);
        let summary = compute_streak(&[today, day(2026, 3, 11)], today);
        assert_eq!(summary.total_posts, 1);
        assert_eq!(summary.current_streak, 1);
    }

    #[test]
    fn test_streak_spans_month_boundary() {
        let today = day(2026, 3, 1);
        let summary = compute_streak(&[day(2026, 2, 27), day(2026, 2, 28), today], today);
        assert_eq!(summary.current_streak, 3);
    }

    #[test]
    fn test_posts_in_week_counts_distinct_days() {
        // 2026-03-10 is a Tuesday; the ISO week runs Mon 03-09 .. Sun 03-15.
        let today = day(2026, 3, 10);
        let history = [
            day(2026, 3, 8),  // Sunday, previous ISO week
            day(2026, 3, 9),  // Monday
            day(2026, 3, 10), // Tuesday
            day(2026, 3, 10), // duplicate
        ];
        assert_eq!(posts_in_week(&history, today), 2);
    }
}

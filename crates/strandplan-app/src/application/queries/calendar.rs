use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use log::info;

use strandplan_domain::calendar::resolve_calendar_day;
use strandplan_domain::entitlement::{resolve_access, SubscriptionRepository};
use strandplan_domain::profile::UserProfileRepository;
use strandplan_domain::shared::{DomainError, UserId};
use strandplan_domain::streak::StreakLedgerRepository;

use crate::application::dtos::{CalendarDayDto, CalendarMonthDto, MonthStatsDto};

pub async fn get_calendar_month(
    ledger: &dyn StreakLedgerRepository,
    subscriptions: &dyn SubscriptionRepository,
    profiles: &dyn UserProfileRepository,
    user_id: &UserId,
    year: i32,
    month: u32,
    now_utc: DateTime<Utc>,
) -> Result<CalendarMonthDto, DomainError> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::InvalidInput(format!("Invalid month: {year}-{month}")))?;
    let last_day = last_day_of_month(first_day);

    let profile = profiles.find_by_id(user_id).await?;
    let created_at = profile
        .as_ref()
        .map(|p| p.created_at_utc)
        .unwrap_or(now_utc);
    let timezone = profile.and_then(|p| p.timezone);

    let subscription = subscriptions.get(user_id).await?;
    let access = resolve_access(subscription.as_ref(), created_at, now_utc);

    // A month outside the entitled set comes back locked with no day data;
    // the paywall banner renders from the access view, not from here.
    if !access.accessible_months.contains(&month) {
        info!("[access] calendar month locked user={} month={}", user_id, month);
        return Ok(CalendarMonthDto {
            user_id: user_id.to_string(),
            year,
            month,
            locked: true,
            days: Vec::new(),
            month_stats: MonthStatsDto {
                total_days: 0,
                posted_days: 0,
                post_rate: 0.0,
            },
        });
    }

    let posted = ledger.list_days_in_range(user_id, first_day, last_day).await?;
    let today = resolve_calendar_day(now_utc, timezone.as_deref());

    let mut days = Vec::new();
    let mut cursor = first_day;
    while cursor <= last_day {
        days.push(CalendarDayDto {
            date: cursor.format("%Y-%m-%d").to_string(),
            posted: posted.binary_search(&cursor).is_ok(),
        });
        cursor += Duration::days(1);
    }

    // Posting rate over days that have happened so far, not the whole month.
    let elapsed_days = if today < first_day {
        0
    } else if today > last_day {
        days.len() as u32
    } else {
        today.day()
    };
    let posted_days = posted.len() as u32;
    let post_rate = if elapsed_days == 0 {
        0.0
    } else {
        f64::from(posted_days) / f64::from(elapsed_days) * 100.0
    };

    Ok(CalendarMonthDto {
        user_id: user_id.to_string(),
        year,
        month,
        locked: false,
        days,
        month_stats: MonthStatsDto {
            total_days: elapsed_days,
            posted_days,
            post_rate,
        },
    })
}

fn last_day_of_month(first_day: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first_day.month() == 12 {
        (first_day.year() + 1, 1)
    } else {
        (first_day.year(), first_day.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid")
        .pred_opt()
        .expect("month start has a predecessor")
}

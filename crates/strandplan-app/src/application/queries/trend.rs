use chrono::{DateTime, Duration, Utc};

use strandplan_domain::calendar::resolve_calendar_day;
use strandplan_domain::profile::UserProfileRepository;
use strandplan_domain::shared::{DomainError, UserId};
use strandplan_domain::streak::StreakLedgerRepository;

use crate::application::dtos::{TrendDto, TrendPointDto};

/// Cap so a buggy client cannot request an unbounded ledger scan.
const MAX_TREND_DAYS: u32 = 365;

pub async fn get_trend(
    ledger: &dyn StreakLedgerRepository,
    profiles: &dyn UserProfileRepository,
    user_id: &UserId,
    days: u32,
    now_utc: DateTime<Utc>,
) -> Result<TrendDto, DomainError> {
    if days == 0 {
        return Err(DomainError::InvalidInput(
            "Trend window must cover at least one day".to_string(),
        ));
    }
    let days = days.min(MAX_TREND_DAYS);

    let timezone = profiles
        .find_by_id(user_id)
        .await?
        .and_then(|p| p.timezone);
    let today = resolve_calendar_day(now_utc, timezone.as_deref());
    let start = today - Duration::days(i64::from(days) - 1);

    let posted = ledger.list_days_in_range(user_id, start, today).await?;

    let mut points = Vec::with_capacity(days as usize);
    let mut cursor = start;
    while cursor <= today {
        points.push(TrendPointDto {
            date: cursor.format("%Y-%m-%d").to_string(),
            posted: posted.binary_search(&cursor).is_ok(),
        });
        cursor += Duration::days(1);
    }

    Ok(TrendDto {
        user_id: user_id.to_string(),
        start_date: start.format("%Y-%m-%d").to_string(),
        end_date: today.format("%Y-%m-%d").to_string(),
        points,
    })
}

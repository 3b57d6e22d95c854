//! Calendar-day resolution in the user's stored IANA timezone.
//!
//! The streak engine counts civil dates, not 24-hour windows, so every
//! day-boundary decision goes through this module. Resolution is pure:
//! callers pass the instant, nothing here reads the ambient clock.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use log::warn;

/// Zone applied when a user has no stored timezone or an unparseable one.
/// The product's home market; changing this shifts day boundaries for
/// every user without a stored preference.
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Parse a stored timezone preference, falling back to [`DEFAULT_TIMEZONE`].
///
/// A malformed zone is a validation problem with a safe recovery, never a
/// failed request.
pub fn resolve_timezone(stored: Option<&str>) -> Tz {
    match stored {
        Some(raw) => match raw.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!("[calendar] invalid timezone {:?}, using default", raw);
                default_timezone()
            }
        },
        None => default_timezone(),
    }
}

/// The civil date at `now_utc` in the user's timezone.
///
/// Past ledger entries keep the calendar day they were written with; a
/// timezone change only affects day boundaries from this call onward.
pub fn resolve_calendar_day(now_utc: DateTime<Utc>, stored_tz: Option<&str>) -> NaiveDate {
    now_utc.with_timezone(&resolve_timezone(stored_tz)).date_naive()
}

fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
        .parse::<Tz>()
        .unwrap_or(chrono_tz::America::New_York)
}

mod streak_service;

pub use streak_service::{StreakEntitlementService, STREAK_LOOKBACK_DAYS};

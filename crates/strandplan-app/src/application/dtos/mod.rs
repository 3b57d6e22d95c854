mod access_dto;
mod calendar_dto;
mod streak_dto;

pub use access_dto::AccessStatusDto;
pub use calendar_dto::{
    CalendarDayDto, CalendarMonthDto, ContentCategoryDto, MonthStatsDto, TrendDto, TrendPointDto,
};
pub use streak_dto::{
    BadgeDto, GoalProgressDto, NextMilestoneDto, ProfileSummaryDto, StreakSummaryDto,
};

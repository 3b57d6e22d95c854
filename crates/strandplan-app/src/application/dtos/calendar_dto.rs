use serde::{Deserialize, Serialize};

use strandplan_domain::content::ContentCategory;

/// A post category as shown on calendar chips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCategoryDto {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
}

impl From<&ContentCategory> for ContentCategoryDto {
    fn from(category: &ContentCategory) -> Self {
        Self {
            id: category.id.to_string(),
            label: category.label.to_string(),
            icon: category.icon.to_string(),
            color: category.color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDayDto {
    pub date: String, // YYYY-MM-DD
    pub posted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthStatsDto {
    /// Days of the month elapsed so far; the denominator for `post_rate`.
    pub total_days: u32,
    pub posted_days: u32,
    /// Posting rate as a percentage (0.0 - 100.0).
    pub post_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarMonthDto {
    pub user_id: String,
    pub year: i32,
    pub month: u32,
    /// True when the month is outside the user's entitled content months;
    /// a locked month carries no day data.
    pub locked: bool,
    pub days: Vec<CalendarDayDto>,
    pub month_stats: MonthStatsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPointDto {
    pub date: String,
    pub posted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendDto {
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
    pub points: Vec<TrendPointDto>,
}

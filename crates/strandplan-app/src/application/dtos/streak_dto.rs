use serde::{Deserialize, Serialize};

use strandplan_domain::milestone::{earned_badges, next_milestone};
use strandplan_domain::streak::StreakSummary;

use super::AccessStatusDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeDto {
    pub days: u32,
    pub badge: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextMilestoneDto {
    pub days: u32,
    pub badge: String,
    pub icon: String,
    /// Streak days still needed to unlock it.
    pub days_remaining: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakSummaryDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_posts: u32,
    pub has_posted_today: bool,
    pub earned_badges: Vec<BadgeDto>,
    pub next_milestone: Option<NextMilestoneDto>,
}

impl StreakSummaryDto {
    /// Attach milestone state to a computed streak summary.
    pub fn from_summary(summary: StreakSummary) -> Self {
        let earned = earned_badges(summary.current_streak)
            .into_iter()
            .map(|m| BadgeDto {
                days: m.days,
                badge: m.badge.to_string(),
                icon: m.icon.to_string(),
            })
            .collect();

        let next = next_milestone(summary.current_streak).map(|m| NextMilestoneDto {
            days: m.days,
            badge: m.badge.to_string(),
            icon: m.icon.to_string(),
            days_remaining: m.days - summary.current_streak,
        });

        Self {
            current_streak: summary.current_streak,
            longest_streak: summary.longest_streak,
            total_posts: summary.total_posts,
            has_posted_today: summary.has_posted_today,
            earned_badges: earned,
            next_milestone: next,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgressDto {
    pub goal_per_week: u32,
    pub posts_this_week: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummaryDto {
    pub user_id: String,
    /// The user's current calendar day (YYYY-MM-DD), as the engine resolved
    /// it. Clients display it but never decide it.
    pub today: String,
    pub streak: StreakSummaryDto,
    pub access: AccessStatusDto,
    pub goal: Option<GoalProgressDto>,
}

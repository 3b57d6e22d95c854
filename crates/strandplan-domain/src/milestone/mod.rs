//! Streak milestones and badge evaluation.
//!
//! The milestone table is a closed, ordered constant: every threshold has a
//! badge and an icon by construction, and evaluation is a total function
//! over it.

use serde::Serialize;

/// A fixed streak-length threshold that unlocks a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MilestoneDefinition {
    /// Streak length that earns the badge.
    pub days: u32,
    pub badge: &'static str,
    /// Symbolic icon id resolved by the presentation layer.
    pub icon: &'static str,
}

/// Milestone table, ascending by threshold. Immutable at runtime.
pub const MILESTONES: [MilestoneDefinition; 6] = [
    MilestoneDefinition {
        days: 3,
        badge: "Getting Started",
        icon: "spark",
    },
    MilestoneDefinition {
        days: 7,
        badge: "Week Warrior",
        icon: "flame",
    },
    MilestoneDefinition {
        days: 14,
        badge: "Two-Week Streak",
        icon: "bolt",
    },
    MilestoneDefinition {
        days: 30,
        badge: "Month Master",
        icon: "crown",
    },
    MilestoneDefinition {
        days: 100,
        badge: "Century Club",
        icon: "trophy",
    },
    MilestoneDefinition {
        days: 365,
        badge: "Year-Round Pro",
        icon: "star",
    },
];

/// Badges earned at the given streak, ascending by threshold.
pub fn earned_badges(current_streak: u32) -> Vec<&'static MilestoneDefinition> {
    earned_badges_in(&MILESTONES, current_streak)
}

/// The next milestone still ahead of the given streak, if any.
pub fn next_milestone(current_streak: u32) -> Option<&'static MilestoneDefinition> {
    next_milestone_in(&MILESTONES, current_streak)
}

fn earned_badges_in(table: &'static [MilestoneDefinition], streak: u32) -> Vec<&'static MilestoneDefinition> {
    table.iter().filter(|m| m.days <= streak).collect()
}

fn next_milestone_in(table: &'static [MilestoneDefinition], streak: u32) -> Option<&'static MilestoneDefinition> {
    table.iter().find(|m| m.days > streak)
}

//! Content categories for the 365-day post calendar.
//!
//! A closed constant table like the milestone list: every category carries
//! an icon and a color by construction, so the planner UI can never meet a
//! category without one.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Hex color used by calendar chips.
    pub color: &'static str,
}

pub const CONTENT_CATEGORIES: [ContentCategory; 7] = [
    ContentCategory {
        id: "transformation",
        label: "Before & After",
        icon: "sparkles",
        color: "#E879A6",
    },
    ContentCategory {
        id: "education",
        label: "Education",
        icon: "book",
        color: "#8B5CF6",
    },
    ContentCategory {
        id: "behind_the_scenes",
        label: "Behind the Scenes",
        icon: "camera",
        color: "#F59E0B",
    },
    ContentCategory {
        id: "client_love",
        label: "Client Love",
        icon: "heart",
        color: "#EF4444",
    },
    ContentCategory {
        id: "product_care",
        label: "Product & Care",
        icon: "droplet",
        color: "#3B82F6",
    },
    ContentCategory {
        id: "promo",
        label: "Promotions",
        icon: "tag",
        color: "#10B981",
    },
    ContentCategory {
        id: "personal",
        label: "Personal",
        icon: "smile",
        color: "#6B7280",
    },
];

pub fn category_by_id(id: &str) -> Option<&'static ContentCategory> {
    CONTENT_CATEGORIES.iter().find(|c| c.id == id)
}

use serde::{Deserialize, Serialize};

use strandplan_domain::entitlement::AccessStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessStatusDto {
    pub has_access: bool,
    /// Calendar-content months (1-12) the user may open, ascending.
    pub accessible_months: Vec<u32>,
    /// RFC 3339 end of the trial or free-preview window, when one applies.
    pub free_access_ends_at: Option<String>,
    pub subscription_status: String,
    /// Whole days left in the window, rounded up for banner display.
    pub days_remaining: u32,
}

impl From<AccessStatus> for AccessStatusDto {
    fn from(access: AccessStatus) -> Self {
        Self {
            has_access: access.has_access,
            accessible_months: access.accessible_months,
            free_access_ends_at: access.free_access_ends_at_utc.map(|t| t.to_rfc3339()),
            subscription_status: access.subscription_status.as_str().to_string(),
            days_remaining: access.days_remaining,
        }
    }
}

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::queries::PlannerQueries;
use crate::application::services::StreakEntitlementService;
use strandplan_domain::entitlement::SubscriptionRepository;
use strandplan_domain::profile::UserProfileRepository;
use strandplan_domain::streak::StreakLedgerRepository;
use strandplan_infrastructure::config::AppConfig;

pub struct Repositories {
    pub ledger: Arc<dyn StreakLedgerRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub profiles: Arc<dyn UserProfileRepository>,
}

/// Everything a host (HTTP server, CLI, scheduled job) needs to serve
/// streak and entitlement requests.
pub struct AppState {
    pub pool: Arc<SqlitePool>,
    pub repositories: Repositories,
    pub service: Arc<StreakEntitlementService>,
    pub queries: Arc<PlannerQueries>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        crate::presentation::bootstrap::build_app_state(config).await
    }
}

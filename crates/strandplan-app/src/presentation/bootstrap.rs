//! Startup wiring: logging, database, migrations, then the services
//! assembled behind their repository traits.

use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::application::queries::PlannerQueries;
use crate::application::services::StreakEntitlementService;
use crate::presentation::state::{AppState, Repositories};
use strandplan_domain::entitlement::SubscriptionRepository;
use strandplan_domain::profile::UserProfileRepository;
use strandplan_domain::streak::StreakLedgerRepository;
use strandplan_infrastructure::config::AppConfig;
use strandplan_infrastructure::logging::init_logger;
use strandplan_infrastructure::persistence::{
    repositories::{
        SqliteStreakLedgerRepository, SqliteSubscriptionRepository, SqliteUserProfileRepository,
    },
    Database,
};

pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    init_logger(config.log_dir.clone())?;

    let db_path = config
        .database_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Database path is not valid UTF-8"))?;
    info!("[bootstrap] database path: {}", db_path);

    let started_at = Instant::now();
    let database = Database::new(db_path).await?;
    info!(
        "[bootstrap] database connected ({}ms)",
        started_at.elapsed().as_millis()
    );

    let started_at = Instant::now();
    database.run_migrations().await?;
    info!(
        "[bootstrap] migrations applied ({}ms)",
        started_at.elapsed().as_millis()
    );

    let pool = Arc::new(database.pool().clone());

    let ledger =
        Arc::new(SqliteStreakLedgerRepository::new(pool.clone())) as Arc<dyn StreakLedgerRepository>;
    let subscriptions = Arc::new(SqliteSubscriptionRepository::new(pool.clone()))
        as Arc<dyn SubscriptionRepository>;
    let profiles = Arc::new(SqliteUserProfileRepository::new(pool.clone()))
        as Arc<dyn UserProfileRepository>;

    let service = Arc::new(StreakEntitlementService::new(
        ledger.clone(),
        subscriptions.clone(),
        profiles.clone(),
    ));
    let queries = Arc::new(PlannerQueries::new(
        ledger.clone(),
        subscriptions.clone(),
        profiles.clone(),
    ));

    info!(
        "[bootstrap] app state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        pool,
        repositories: Repositories {
            ledger,
            subscriptions,
            profiles,
        },
        service,
        queries,
    })
}

pub mod streak_ledger_repo;
pub mod subscription_repo;
pub mod user_profile_repo;

pub use streak_ledger_repo::SqliteStreakLedgerRepository;
pub use subscription_repo::SqliteSubscriptionRepository;
pub use user_profile_repo::SqliteUserProfileRepository;

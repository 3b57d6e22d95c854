// Application layer - orchestrates domain logic against persisted state.
// Transport (HTTP handlers, push delivery, payment webhooks) lives with the
// collaborators that own it, not here.

pub mod application;
pub mod presentation;

pub use application::queries::PlannerQueries;
pub use application::services::StreakEntitlementService;
pub use presentation::AppState;

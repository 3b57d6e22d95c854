// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod calendar;
pub mod content;
pub mod entitlement;
pub mod milestone;
pub mod profile;
pub mod shared;
pub mod streak;

// Re-exports for convenience
pub use shared::{DomainError, UserId};

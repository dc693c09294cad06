//! Agents domain: agencies, staff, alliances, notifications

pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;

// Re-export repository types
pub use repository::{
    AgentAllianceRepository, AgentRepository, AgentStaffRepository, AgentsRepositories,
    NotificationRepository, NotificationViewRepository,
};

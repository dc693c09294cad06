//! Chat domain: chat groups and messages between agents and job seekers

pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;

// Re-export repository types
pub use repository::{ChatGroupRepository, ChatMessageRepository, ChatRepositories};

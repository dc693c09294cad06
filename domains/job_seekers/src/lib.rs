//! Job seekers domain: job seekers, their desired conditions and licenses

pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;

// Re-export repository types
pub use repository::{
    JobSeekerDesiredIndustryRepository, JobSeekerDesiredOccupationRepository,
    JobSeekerDetailRepository, JobSeekerHideToAgentRepository, JobSeekerLicenseRepository,
    JobSeekerRepository, JobSeekersRepositories,
};

//! Enterprises domain: enterprise profiles, billing addresses, job information

pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;

// Re-export repository types
pub use repository::{
    BillingAddressRepository, EnterpriseProfileRepository, EnterprisesRepositories,
    JobInformationDetailRepository, JobInformationHideToAgentRepository,
    JobInformationPrefectureRepository, JobInformationRepository,
    JobInformationRequiredLanguageRepository, JobInformationRequiredPcToolRepository,
};

//! Repository implementations for Enterprises domain

pub mod billing_addresses;
pub mod enterprise_profiles;
pub mod job_information_details;
pub mod job_informations;

use talentlink_store::{PgRecordStore, RecordStore};

pub use billing_addresses::BillingAddressRepository;
pub use enterprise_profiles::EnterpriseProfileRepository;
pub use job_information_details::{
    JobInformationDetail, JobInformationDetailRepository, JobInformationHideToAgentRepository,
    JobInformationPrefectureRepository, JobInformationRequiredLanguageRepository,
    JobInformationRequiredPcToolRepository,
};
pub use job_informations::JobInformationRepository;

/// Combined repository access for the Enterprises domain
#[derive(Clone)]
pub struct EnterprisesRepositories<S = PgRecordStore> {
    pub enterprise_profiles: EnterpriseProfileRepository<S>,
    pub billing_addresses: BillingAddressRepository<S>,
    pub job_informations: JobInformationRepository<S>,
    pub job_information_prefectures: JobInformationPrefectureRepository<S>,
    pub job_information_required_languages: JobInformationRequiredLanguageRepository<S>,
    pub job_information_required_pc_tools: JobInformationRequiredPcToolRepository<S>,
    pub job_information_hide_to_agents: JobInformationHideToAgentRepository<S>,
}

impl<S: RecordStore + Clone> EnterprisesRepositories<S> {
    pub fn new(store: S) -> Self {
        Self {
            enterprise_profiles: EnterpriseProfileRepository::new(store.clone()),
            billing_addresses: BillingAddressRepository::new(store.clone()),
            job_informations: JobInformationRepository::new(store.clone()),
            job_information_prefectures: JobInformationPrefectureRepository::new(store.clone()),
            job_information_required_languages: JobInformationRequiredLanguageRepository::new(
                store.clone(),
            ),
            job_information_required_pc_tools: JobInformationRequiredPcToolRepository::new(
                store.clone(),
            ),
            job_information_hide_to_agents: JobInformationHideToAgentRepository::new(store),
        }
    }
}

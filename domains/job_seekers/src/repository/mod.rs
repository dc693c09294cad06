//! Repository implementations for Job Seekers domain

pub mod job_seeker_details;
pub mod job_seekers;

use talentlink_store::{PgRecordStore, RecordStore};

pub use job_seeker_details::{
    JobSeekerDesiredIndustryRepository, JobSeekerDesiredOccupationRepository, JobSeekerDetail,
    JobSeekerDetailRepository, JobSeekerHideToAgentRepository, JobSeekerLicenseRepository,
};
pub use job_seekers::JobSeekerRepository;

/// Combined repository access for the Job Seekers domain
#[derive(Clone)]
pub struct JobSeekersRepositories<S = PgRecordStore> {
    pub job_seekers: JobSeekerRepository<S>,
    pub desired_industries: JobSeekerDesiredIndustryRepository<S>,
    pub desired_occupations: JobSeekerDesiredOccupationRepository<S>,
    pub licenses: JobSeekerLicenseRepository<S>,
    pub hide_to_agents: JobSeekerHideToAgentRepository<S>,
}

impl<S: RecordStore + Clone> JobSeekersRepositories<S> {
    pub fn new(store: S) -> Self {
        Self {
            job_seekers: JobSeekerRepository::new(store.clone()),
            desired_industries: JobSeekerDesiredIndustryRepository::new(store.clone()),
            desired_occupations: JobSeekerDesiredOccupationRepository::new(store.clone()),
            licenses: JobSeekerLicenseRepository::new(store.clone()),
            hide_to_agents: JobSeekerHideToAgentRepository::new(store),
        }
    }
}

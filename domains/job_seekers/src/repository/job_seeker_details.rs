//! Detail rows owned by a job seeker

use crate::domain::entities::{
    JobSeekerDesiredIndustry, JobSeekerDesiredOccupation, JobSeekerHideToAgent, JobSeekerLicense,
};
use chrono::{DateTime, Utc};
use talentlink_store::{
    args, hierarchy, Args, ChildEntity, Entity, EntityRepository, PgRecordStore, RecordStore,
    Result,
};

impl Entity for JobSeekerDesiredIndustry {
    const TABLE: &'static str = "job_seeker_desired_industries";
    const LABEL: &'static str = "JobSeekerDesiredIndustryRepository";
    const COLUMNS: &'static str =
        "id, job_seeker_id, desired_industry, desired_rank, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "job_seeker_id",
        "desired_industry",
        "desired_rank",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.job_seeker_id,
            self.desired_industry,
            self.desired_rank,
            self.created_at,
            self.updated_at
        ]
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn prepare_insert(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
}

impl Entity for JobSeekerDesiredOccupation {
    const TABLE: &'static str = "job_seeker_desired_occupations";
    const LABEL: &'static str = "JobSeekerDesiredOccupationRepository";
    const COLUMNS: &'static str =
        "id, job_seeker_id, desired_occupation, desired_rank, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "job_seeker_id",
        "desired_occupation",
        "desired_rank",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.job_seeker_id,
            self.desired_occupation,
            self.desired_rank,
            self.created_at,
            self.updated_at
        ]
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn prepare_insert(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
}

impl Entity for JobSeekerLicense {
    const TABLE: &'static str = "job_seeker_licenses";
    const LABEL: &'static str = "JobSeekerLicenseRepository";
    const COLUMNS: &'static str =
        "id, job_seeker_id, license_type, acquisition_time, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "job_seeker_id",
        "license_type",
        "acquisition_time",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.job_seeker_id,
            self.license_type,
            &self.acquisition_time,
            self.created_at,
            self.updated_at
        ]
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn prepare_insert(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
}

impl Entity for JobSeekerHideToAgent {
    const TABLE: &'static str = "job_seeker_hide_to_agents";
    const LABEL: &'static str = "JobSeekerHideToAgentRepository";
    const COLUMNS: &'static str = "id, job_seeker_id, agent_id, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["job_seeker_id", "agent_id", "created_at", "updated_at"];

    fn insert_args(&self) -> Args {
        args![
            self.job_seeker_id,
            self.agent_id,
            self.created_at,
            self.updated_at
        ]
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn prepare_insert(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }
}

impl ChildEntity for JobSeekerDesiredIndustry {
    const PARENT_KEY: &'static str = "job_seeker_id";
}

impl ChildEntity for JobSeekerDesiredOccupation {
    const PARENT_KEY: &'static str = "job_seeker_id";
}

impl ChildEntity for JobSeekerLicense {
    const PARENT_KEY: &'static str = "job_seeker_id";
}

impl ChildEntity for JobSeekerHideToAgent {
    const PARENT_KEY: &'static str = "job_seeker_id";
}

/// Detail row keyed by `job_seeker_id`
pub trait JobSeekerDetail: ChildEntity {}

impl JobSeekerDetail for JobSeekerDesiredIndustry {}
impl JobSeekerDetail for JobSeekerDesiredOccupation {}
impl JobSeekerDetail for JobSeekerLicense {}

/// Repository over one job seeker detail table
#[derive(Clone)]
pub struct JobSeekerDetailRepository<E, S = PgRecordStore> {
    repo: EntityRepository<E, S>,
}

pub type JobSeekerDesiredIndustryRepository<S = PgRecordStore> =
    JobSeekerDetailRepository<JobSeekerDesiredIndustry, S>;
pub type JobSeekerDesiredOccupationRepository<S = PgRecordStore> =
    JobSeekerDetailRepository<JobSeekerDesiredOccupation, S>;
pub type JobSeekerLicenseRepository<S = PgRecordStore> =
    JobSeekerDetailRepository<JobSeekerLicense, S>;

impl<E: JobSeekerDetail, S: RecordStore> JobSeekerDetailRepository<E, S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    pub async fn create(&self, detail: &mut E) -> Result<i64> {
        self.repo.create(detail).await
    }

    /// Remove every detail row of the job seeker
    pub async fn delete_by_job_seeker_id(&self, job_seeker_id: i64) -> Result<u64> {
        self.repo.delete_by_parent_id(job_seeker_id).await
    }

    pub async fn get_by_job_seeker_id(&self, job_seeker_id: i64) -> Result<Vec<E>> {
        self.repo.get_by_parent_id(job_seeker_id).await
    }

    pub async fn get_by_job_seeker_id_list(&self, job_seeker_ids: &[i64]) -> Result<Vec<E>> {
        self.repo.get_by_parent_id_list(job_seeker_ids).await
    }

    /// Detail rows of every job seeker registered with the agent
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<E>> {
        let clause = format!(
            "job_seeker_id IN ({}) ORDER BY id ASC",
            hierarchy::job_seeker_ids_of_agent("$1")
        );
        self.repo
            .select_where("get_by_agent_id", &clause, args![agent_id])
            .await
    }
}

/// Job seekers hidden from specific agents
#[derive(Clone)]
pub struct JobSeekerHideToAgentRepository<S = PgRecordStore> {
    repo: EntityRepository<JobSeekerHideToAgent, S>,
}

impl<S: RecordStore> JobSeekerHideToAgentRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    pub async fn create(&self, hide: &mut JobSeekerHideToAgent) -> Result<i64> {
        self.repo.create(hide).await
    }

    pub async fn delete_by_job_seeker_id(&self, job_seeker_id: i64) -> Result<u64> {
        self.repo.delete_by_parent_id(job_seeker_id).await
    }

    pub async fn get_by_job_seeker_id(&self, job_seeker_id: i64) -> Result<Vec<JobSeekerHideToAgent>> {
        self.repo.get_by_parent_id(job_seeker_id).await
    }

    pub async fn get_by_job_seeker_id_list(
        &self,
        job_seeker_ids: &[i64],
    ) -> Result<Vec<JobSeekerHideToAgent>> {
        self.repo.get_by_parent_id_list(job_seeker_ids).await
    }

    /// Job seekers hidden from the agent
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<JobSeekerHideToAgent>> {
        self.repo
            .select_where(
                "get_by_agent_id",
                "agent_id = $1 ORDER BY id ASC",
                args![agent_id],
            )
            .await
    }
}

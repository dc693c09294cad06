//! Detail rows owned by a job information listing

use crate::domain::entities::{
    JobInformationHideToAgent, JobInformationPrefecture, JobInformationRequiredLanguage,
    JobInformationRequiredPcTool,
};
use chrono::{DateTime, Utc};
use talentlink_store::{
    args, hierarchy, Args, ChildEntity, Entity, EntityRepository, PgRecordStore, RecordStore,
    Result,
};

/// Detail row keyed by `job_information_id`
pub trait JobInformationDetail: ChildEntity {}

impl Entity for JobInformationPrefecture {
    const TABLE: &'static str = "job_information_prefectures";
    const LABEL: &'static str = "JobInformationPrefectureRepository";
    const COLUMNS: &'static str = "id, job_information_id, prefecture, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["job_information_id", "prefecture", "created_at", "updated_at"];

    fn insert_args(&self) -> Args {
        args![
            self.job_information_id,
            self.prefecture,
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

impl Entity for JobInformationRequiredLanguage {
    const TABLE: &'static str = "job_information_required_languages";
    const LABEL: &'static str = "JobInformationRequiredLanguageRepository";
    const COLUMNS: &'static str =
        "id, job_information_id, language_type, language_level, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "job_information_id",
        "language_type",
        "language_level",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.job_information_id,
            self.language_type,
            self.language_level,
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

impl Entity for JobInformationRequiredPcTool {
    const TABLE: &'static str = "job_information_required_pc_tools";
    const LABEL: &'static str = "JobInformationRequiredPcToolRepository";
    const COLUMNS: &'static str = "id, job_information_id, tool, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["job_information_id", "tool", "created_at", "updated_at"];

    fn insert_args(&self) -> Args {
        args![
            self.job_information_id,
            self.tool,
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

impl Entity for JobInformationHideToAgent {
    const TABLE: &'static str = "job_information_hide_to_agents";
    const LABEL: &'static str = "JobInformationHideToAgentRepository";
    const COLUMNS: &'static str = "id, job_information_id, agent_id, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["job_information_id", "agent_id", "created_at", "updated_at"];

    fn insert_args(&self) -> Args {
        args![
            self.job_information_id,
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

impl ChildEntity for JobInformationPrefecture {
    const PARENT_KEY: &'static str = "job_information_id";
}

impl ChildEntity for JobInformationRequiredLanguage {
    const PARENT_KEY: &'static str = "job_information_id";
}

impl ChildEntity for JobInformationRequiredPcTool {
    const PARENT_KEY: &'static str = "job_information_id";
}

impl ChildEntity for JobInformationHideToAgent {
    const PARENT_KEY: &'static str = "job_information_id";
}

impl JobInformationDetail for JobInformationPrefecture {}
impl JobInformationDetail for JobInformationRequiredLanguage {}
impl JobInformationDetail for JobInformationRequiredPcTool {}

/// Repository over one job information detail table
#[derive(Clone)]
pub struct JobInformationDetailRepository<E, S = PgRecordStore> {
    repo: EntityRepository<E, S>,
}

pub type JobInformationPrefectureRepository<S = PgRecordStore> =
    JobInformationDetailRepository<JobInformationPrefecture, S>;
pub type JobInformationRequiredLanguageRepository<S = PgRecordStore> =
    JobInformationDetailRepository<JobInformationRequiredLanguage, S>;
pub type JobInformationRequiredPcToolRepository<S = PgRecordStore> =
    JobInformationDetailRepository<JobInformationRequiredPcTool, S>;

impl<E: JobInformationDetail, S: RecordStore> JobInformationDetailRepository<E, S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    pub async fn create(&self, detail: &mut E) -> Result<i64> {
        self.repo.create(detail).await
    }

    /// Remove every detail row of the listing, typically before re-inserting
    pub async fn delete_by_job_information_id(&self, job_information_id: i64) -> Result<u64> {
        self.repo.delete_by_parent_id(job_information_id).await
    }

    pub async fn get_by_job_information_id(&self, job_information_id: i64) -> Result<Vec<E>> {
        self.repo.get_by_parent_id(job_information_id).await
    }

    pub async fn get_by_job_information_id_list(
        &self,
        job_information_ids: &[i64],
    ) -> Result<Vec<E>> {
        self.repo.get_by_parent_id_list(job_information_ids).await
    }

    /// Detail rows of every listing under the agent
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<E>> {
        let clause = format!(
            "job_information_id IN ({}) ORDER BY id ASC",
            hierarchy::job_information_ids_of_agent("$1")
        );
        self.repo
            .select_where("get_by_agent_id", &clause, args![agent_id])
            .await
    }
}

/// Listings hidden from specific agents
#[derive(Clone)]
pub struct JobInformationHideToAgentRepository<S = PgRecordStore> {
    repo: EntityRepository<JobInformationHideToAgent, S>,
}

impl<S: RecordStore> JobInformationHideToAgentRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    pub async fn create(&self, hide: &mut JobInformationHideToAgent) -> Result<i64> {
        self.repo.create(hide).await
    }

    pub async fn delete_by_job_information_id(&self, job_information_id: i64) -> Result<u64> {
        self.repo.delete_by_parent_id(job_information_id).await
    }

    pub async fn get_by_job_information_id(
        &self,
        job_information_id: i64,
    ) -> Result<Vec<JobInformationHideToAgent>> {
        self.repo.get_by_parent_id(job_information_id).await
    }

    pub async fn get_by_job_information_id_list(
        &self,
        job_information_ids: &[i64],
    ) -> Result<Vec<JobInformationHideToAgent>> {
        self.repo.get_by_parent_id_list(job_information_ids).await
    }

    /// Listings hidden from the agent
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<JobInformationHideToAgent>> {
        self.repo
            .select_where(
                "get_by_agent_id",
                "agent_id = $1 ORDER BY id ASC",
                args![agent_id],
            )
            .await
    }
}

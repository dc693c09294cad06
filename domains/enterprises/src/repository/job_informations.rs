//! Job information repository

use crate::domain::entities::{JobInformation, RecruitmentState};
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, hierarchy, Args, Entity, EntityRepository, ExternalId, FreeWord, FreeWordTarget,
    MutableEntity, PgRecordStore, RecordStore, Result, SqlValue,
};
use uuid::Uuid;

/// Numeric input matches the listing id, anything else its title
const FREE_WORD_TARGET: FreeWordTarget = FreeWordTarget {
    id_column: "id",
    text_columns: &[&["title"]],
    phone_column: None,
};

const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

impl Entity for JobInformation {
    const TABLE: &'static str = "job_informations";
    const LABEL: &'static str = "JobInformationRepository";
    const COLUMNS: &'static str = "id, uuid, billing_address_id, title, recruitment_state, \
                                   expire_at, work_details, number_of_hires, annual_income_min, \
                                   annual_income_max, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "billing_address_id",
        "title",
        "recruitment_state",
        "expire_at",
        "work_details",
        "number_of_hires",
        "annual_income_min",
        "annual_income_max",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.billing_address_id,
            &self.title,
            self.recruitment_state,
            self.expire_at,
            &self.work_details,
            &self.number_of_hires,
            self.annual_income_min,
            self.annual_income_max,
            self.created_at,
            self.updated_at
        ]
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn prepare_insert(&mut self, now: DateTime<Utc>) {
        if self.uuid.is_nil() {
            self.uuid = new_uuid();
        }
        self.created_at = now;
        self.updated_at = now;
    }
}

impl ExternalId for JobInformation {}

impl MutableEntity for JobInformation {
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("billing_address_id", self.billing_address_id.into()),
            ("title", (&self.title).into()),
            ("recruitment_state", self.recruitment_state.into()),
            ("expire_at", self.expire_at.into()),
            ("work_details", (&self.work_details).into()),
            ("number_of_hires", (&self.number_of_hires).into()),
            ("annual_income_min", self.annual_income_min.into()),
            ("annual_income_max", self.annual_income_max.into()),
        ]
    }
}

#[derive(Clone)]
pub struct JobInformationRepository<S = PgRecordStore> {
    repo: EntityRepository<JobInformation, S>,
}

impl<S: RecordStore> JobInformationRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new listing
    pub async fn create(&self, job: &mut JobInformation) -> Result<i64> {
        self.repo.create(job).await
    }

    /// Update listing columns (the recruitment state is changed separately)
    pub async fn update(&self, id: i64, job: &JobInformation) -> Result<u64> {
        self.repo.update(id, job).await
    }

    pub async fn update_recruitment_state(
        &self,
        id: i64,
        state: RecruitmentState,
    ) -> Result<u64> {
        self.repo
            .update_columns(
                "update_recruitment_state",
                id,
                vec![("recruitment_state", state.into())],
            )
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<JobInformation> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<JobInformation> {
        self.repo.find_by_uuid(uuid).await
    }

    pub async fn get_by_billing_address_id(
        &self,
        billing_address_id: i64,
    ) -> Result<Vec<JobInformation>> {
        self.repo
            .select_where(
                "get_by_billing_address_id",
                "billing_address_id = $1 ORDER BY id ASC",
                args![billing_address_id],
            )
            .await
    }

    pub async fn get_by_enterprise_id(&self, enterprise_id: i64) -> Result<Vec<JobInformation>> {
        let clause = format!(
            "id IN ({}) ORDER BY id ASC",
            hierarchy::job_information_ids_of_enterprise("$1")
        );
        self.repo
            .select_where("get_by_enterprise_id", &clause, args![enterprise_id])
            .await
    }

    /// Every listing under the agent, newest first
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<JobInformation>> {
        let clause = format!(
            "id IN ({}) {NEWEST_FIRST}",
            hierarchy::job_information_ids_of_agent("$1")
        );
        self.repo
            .select_where("get_by_agent_id", &clause, args![agent_id])
            .await
    }

    /// Listings under the agent matching a free word, newest first.
    ///
    /// Numeric input matches the id, other input is a substring of the title.
    /// Empty input returns every listing of the agent.
    pub async fn get_by_agent_id_and_free_word(
        &self,
        agent_id: i64,
        free_word: &str,
    ) -> Result<Vec<JobInformation>> {
        let word = FreeWord::parse(free_word);
        tracing::debug!(agent_id, free_word = ?word, "Searching job information");

        let mut args = Args::new();
        let agent = args.bind(agent_id);
        let mut clause = format!("id IN ({})", hierarchy::job_information_ids_of_agent(&agent));
        if let Some(condition) = FREE_WORD_TARGET.condition(&word, &mut args) {
            clause.push_str(" AND ");
            clause.push_str(&condition);
        }
        clause.push(' ');
        clause.push_str(NEWEST_FIRST);

        self.repo
            .select_where("get_by_agent_id_and_free_word", &clause, args)
            .await
    }

    /// Open listings of allied agents that are not hidden to `agent_id`, newest first
    pub async fn get_alliance_by_agent_id(&self, agent_id: i64) -> Result<Vec<JobInformation>> {
        let clause = format!(
            "id IN ({}) AND recruitment_state = $2 AND id NOT IN ({}) {NEWEST_FIRST}",
            hierarchy::job_information_ids_of_allied_agents("$1"),
            hierarchy::job_information_ids_hidden_to_agent("$1"),
        );
        self.repo
            .select_where(
                "get_alliance_by_agent_id",
                &clause,
                args![agent_id, RecruitmentState::Open],
            )
            .await
    }

    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<JobInformation>> {
        self.repo.get_by_id_list(ids).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.repo.delete_by_id(id).await
    }
}

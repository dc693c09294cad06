//! Chat group repository

use crate::domain::entities::{ChatGroupWithJobSeeker, ChatUserType};
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, Args, Entity, EntityRepository, ExternalId, PgRecordStore, RecordStore, Result,
};
use uuid::Uuid;

impl Entity for ChatGroupWithJobSeeker {
    const TABLE: &'static str = "chat_groups_with_job_seeker";
    const LABEL: &'static str = "ChatGroupWithJobSeekerRepository";
    const COLUMNS: &'static str = "id, uuid, agent_id, job_seeker_id, agent_last_watched_at, \
                                   job_seeker_last_watched_at, line_active, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "agent_id",
        "job_seeker_id",
        "agent_last_watched_at",
        "job_seeker_last_watched_at",
        "line_active",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.agent_id,
            self.job_seeker_id,
            self.agent_last_watched_at,
            self.job_seeker_last_watched_at,
            self.line_active,
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

impl ExternalId for ChatGroupWithJobSeeker {}

#[derive(Clone)]
pub struct ChatGroupRepository<S = PgRecordStore> {
    repo: EntityRepository<ChatGroupWithJobSeeker, S>,
}

impl<S: RecordStore> ChatGroupRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create the chat group of a job seeker
    pub async fn create(&self, group: &mut ChatGroupWithJobSeeker) -> Result<i64> {
        self.repo.create(group).await
    }

    pub async fn update_agent_last_watched_at(
        &self,
        id: i64,
        watched_at: DateTime<Utc>,
    ) -> Result<u64> {
        self.repo
            .update_columns(
                "update_agent_last_watched_at",
                id,
                vec![("agent_last_watched_at", watched_at.into())],
            )
            .await
    }

    pub async fn update_job_seeker_last_watched_at(
        &self,
        id: i64,
        watched_at: DateTime<Utc>,
    ) -> Result<u64> {
        self.repo
            .update_columns(
                "update_job_seeker_last_watched_at",
                id,
                vec![("job_seeker_last_watched_at", watched_at.into())],
            )
            .await
    }

    pub async fn update_line_active(&self, id: i64, line_active: bool) -> Result<u64> {
        self.repo
            .update_columns(
                "update_line_active",
                id,
                vec![("line_active", line_active.into())],
            )
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<ChatGroupWithJobSeeker> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<ChatGroupWithJobSeeker> {
        self.repo.find_by_uuid(uuid).await
    }

    pub async fn find_by_job_seeker_id(&self, job_seeker_id: i64) -> Result<ChatGroupWithJobSeeker> {
        self.repo
            .find_where(
                "find_by_job_seeker_id",
                "job_seeker_id = $1",
                args![job_seeker_id],
            )
            .await
    }

    /// Groups of the agent, most recent message first; groups without messages last
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<ChatGroupWithJobSeeker>> {
        self.repo
            .select_where(
                "get_by_agent_id",
                "agent_id = $1 ORDER BY (\
                     SELECT MAX(m.created_at) FROM chat_messages_with_job_seeker m \
                     WHERE m.group_id = chat_groups_with_job_seeker.id) DESC NULLS LAST, \
                 id DESC",
                args![agent_id],
            )
            .await
    }

    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<ChatGroupWithJobSeeker>> {
        self.repo.get_by_id_list(ids).await
    }

    /// Groups with job seeker messages the agent has not seen yet
    pub async fn count_unwatched_by_agent_id(&self, agent_id: i64) -> Result<i64> {
        self.repo
            .count_where(
                "count_unwatched_by_agent_id",
                "agent_id = $1 AND EXISTS (\
                     SELECT 1 FROM chat_messages_with_job_seeker m \
                     WHERE m.group_id = chat_groups_with_job_seeker.id \
                     AND m.user_type = $2 \
                     AND (agent_last_watched_at IS NULL OR m.created_at > agent_last_watched_at))",
                args![agent_id, ChatUserType::JobSeeker],
            )
            .await
    }
}

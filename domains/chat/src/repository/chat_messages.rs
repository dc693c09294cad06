//! Chat message repository

use crate::domain::entities::{ChatMessageWithJobSeeker, ChatUserType};
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, Args, ChildEntity, Entity, EntityRepository, ExternalId, PgRecordStore, RecordStore,
    Result,
};

impl Entity for ChatMessageWithJobSeeker {
    const TABLE: &'static str = "chat_messages_with_job_seeker";
    const LABEL: &'static str = "ChatMessageWithJobSeekerRepository";
    const COLUMNS: &'static str = "id, uuid, group_id, user_type, message_type, message, \
                                   photo_url, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "group_id",
        "user_type",
        "message_type",
        "message",
        "photo_url",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.group_id,
            self.user_type,
            self.message_type,
            &self.message,
            &self.photo_url,
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

impl ExternalId for ChatMessageWithJobSeeker {}

impl ChildEntity for ChatMessageWithJobSeeker {
    const PARENT_KEY: &'static str = "group_id";
}

#[derive(Clone)]
pub struct ChatMessageRepository<S = PgRecordStore> {
    repo: EntityRepository<ChatMessageWithJobSeeker, S>,
}

impl<S: RecordStore> ChatMessageRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Post a message
    pub async fn create(&self, message: &mut ChatMessageWithJobSeeker) -> Result<i64> {
        self.repo.create(message).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<ChatMessageWithJobSeeker> {
        self.repo.find_by_id(id).await
    }

    /// Messages of a group, oldest first
    pub async fn get_by_group_id(&self, group_id: i64) -> Result<Vec<ChatMessageWithJobSeeker>> {
        self.repo
            .select_where(
                "get_by_group_id",
                "group_id = $1 ORDER BY created_at ASC, id ASC",
                args![group_id],
            )
            .await
    }

    /// Newest message of each group that has any. Empty input never reaches the store.
    pub async fn get_latest_by_group_id_list(
        &self,
        group_ids: &[i64],
    ) -> Result<Vec<ChatMessageWithJobSeeker>> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT DISTINCT ON (group_id) {} FROM {} WHERE group_id = ANY($1) \
             ORDER BY group_id, created_at DESC, id DESC",
            ChatMessageWithJobSeeker::COLUMNS,
            ChatMessageWithJobSeeker::TABLE
        );
        self.repo
            .store()
            .select(
                self.repo.op("get_latest_by_group_id_list"),
                &sql,
                args![group_ids],
            )
            .await
    }

    /// Job seeker messages posted after `since`; every one of them when `since` is `None`
    pub async fn count_unread_by_group_id(
        &self,
        group_id: i64,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64> {
        let mut args = args![group_id, ChatUserType::JobSeeker];
        let mut clause = "group_id = $1 AND user_type = $2".to_string();
        if let Some(since) = since {
            clause.push_str(&format!(" AND created_at > {}", args.bind(since)));
        }
        self.repo
            .count_where("count_unread_by_group_id", &clause, args)
            .await
    }

    pub async fn delete_by_group_id(&self, group_id: i64) -> Result<u64> {
        self.repo.delete_by_parent_id(group_id).await
    }
}

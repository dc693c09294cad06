//! Notification and notification view repositories

use crate::domain::entities::{Notification, NotificationTarget, NotificationView};
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, Args, ChildEntity, Entity, EntityRepository, ExternalId, MutableEntity, PgRecordStore,
    RecordStore, Result, SqlValue,
};
use uuid::Uuid;

impl Entity for Notification {
    const TABLE: &'static str = "notifications_for_user";
    const LABEL: &'static str = "NotificationRepository";
    const COLUMNS: &'static str =
        "id, uuid, target, target_agent_id, title, body, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "target",
        "target_agent_id",
        "title",
        "body",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.target,
            self.target_agent_id,
            &self.title,
            &self.body,
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

impl ExternalId for Notification {}

impl MutableEntity for Notification {
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("target", self.target.into()),
            ("target_agent_id", self.target_agent_id.into()),
            ("title", (&self.title).into()),
            ("body", (&self.body).into()),
        ]
    }
}

impl Entity for NotificationView {
    const TABLE: &'static str = "user_notification_views";
    const LABEL: &'static str = "NotificationViewRepository";
    const COLUMNS: &'static str = "id, notification_id, agent_staff_id, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["notification_id", "agent_staff_id", "created_at", "updated_at"];

    fn insert_args(&self) -> Args {
        args![
            self.notification_id,
            self.agent_staff_id,
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

impl ChildEntity for NotificationView {
    const PARENT_KEY: &'static str = "notification_id";
}

#[derive(Clone)]
pub struct NotificationRepository<S = PgRecordStore> {
    repo: EntityRepository<Notification, S>,
}

impl<S: RecordStore> NotificationRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new notification
    pub async fn create(&self, notification: &mut Notification) -> Result<i64> {
        self.repo.create(notification).await
    }

    /// Update title and body
    pub async fn update(&self, id: i64, notification: &Notification) -> Result<u64> {
        self.repo.update(id, notification).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Notification> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Notification> {
        self.repo.find_by_uuid(uuid).await
    }

    /// Notifications addressed to everyone or to this agent, newest first
    pub async fn get_for_agent_id(&self, agent_id: i64) -> Result<Vec<Notification>> {
        self.repo
            .select_where(
                "get_for_agent_id",
                "target = $1 OR target_agent_id = $2 ORDER BY created_at DESC, id DESC",
                args![NotificationTarget::All, agent_id],
            )
            .await
    }

    /// Notifications visible to the staff member's agent that they have not viewed
    pub async fn count_unread_by_agent_staff_id(&self, agent_staff_id: i64) -> Result<i64> {
        self.repo
            .count_where(
                "count_unread_by_agent_staff_id",
                "(target = $1 OR target_agent_id = (\
                     SELECT agent_id FROM agent_staffs WHERE id = $2)) \
                 AND NOT EXISTS (\
                     SELECT 1 FROM user_notification_views v \
                     WHERE v.notification_id = notifications_for_user.id \
                     AND v.agent_staff_id = $2)",
                args![NotificationTarget::All, agent_staff_id],
            )
            .await
    }
}

#[derive(Clone)]
pub struct NotificationViewRepository<S = PgRecordStore> {
    repo: EntityRepository<NotificationView, S>,
}

impl<S: RecordStore> NotificationViewRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Mark a notification as viewed
    pub async fn create(&self, view: &mut NotificationView) -> Result<i64> {
        self.repo.create(view).await
    }

    pub async fn get_by_agent_staff_id(&self, agent_staff_id: i64) -> Result<Vec<NotificationView>> {
        self.repo
            .select_where(
                "get_by_agent_staff_id",
                "agent_staff_id = $1 ORDER BY id ASC",
                args![agent_staff_id],
            )
            .await
    }

    pub async fn delete_by_notification_id(&self, notification_id: i64) -> Result<u64> {
        self.repo.delete_by_parent_id(notification_id).await
    }
}

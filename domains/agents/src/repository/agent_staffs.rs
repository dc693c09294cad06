//! Agent staff repository

use crate::domain::entities::{AgentStaff, StaffAuthority};
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, Args, Entity, EntityRepository, ExternalId, MutableEntity, PgRecordStore, RecordStore,
    Result, SqlValue,
};
use uuid::Uuid;

impl Entity for AgentStaff {
    const TABLE: &'static str = "agent_staffs";
    const LABEL: &'static str = "AgentStaffRepository";
    const COLUMNS: &'static str = "id, uuid, agent_id, staff_name, furigana, email, \
                                   phone_number, authority, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "agent_id",
        "staff_name",
        "furigana",
        "email",
        "phone_number",
        "authority",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.agent_id,
            &self.staff_name,
            &self.furigana,
            &self.email,
            &self.phone_number,
            self.authority,
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

impl ExternalId for AgentStaff {}

impl MutableEntity for AgentStaff {
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("agent_id", self.agent_id.into()),
            ("staff_name", (&self.staff_name).into()),
            ("furigana", (&self.furigana).into()),
            ("email", (&self.email).into()),
            ("phone_number", (&self.phone_number).into()),
            ("authority", self.authority.into()),
        ]
    }
}

#[derive(Clone)]
pub struct AgentStaffRepository<S = PgRecordStore> {
    repo: EntityRepository<AgentStaff, S>,
}

impl<S: RecordStore> AgentStaffRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new staff member
    pub async fn create(&self, staff: &mut AgentStaff) -> Result<i64> {
        self.repo.create(staff).await
    }

    /// Update profile columns (authority is changed separately)
    pub async fn update(&self, id: i64, staff: &AgentStaff) -> Result<u64> {
        self.repo.update(id, staff).await
    }

    pub async fn update_authority(&self, id: i64, authority: StaffAuthority) -> Result<u64> {
        self.repo
            .update_columns("update_authority", id, vec![("authority", authority.into())])
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<AgentStaff> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<AgentStaff> {
        self.repo.find_by_uuid(uuid).await
    }

    /// Find staff member by login email
    pub async fn find_by_email(&self, email: &str) -> Result<AgentStaff> {
        self.repo
            .find_where("find_by_email", "email = $1", args![email])
            .await
    }

    /// List staff of an agent in registration order
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<AgentStaff>> {
        self.repo
            .select_where(
                "get_by_agent_id",
                "agent_id = $1 ORDER BY id ASC",
                args![agent_id],
            )
            .await
    }

    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<AgentStaff>> {
        self.repo.get_by_id_list(ids).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.repo.delete_by_id(id).await
    }
}

//! Enterprise profile repository

use crate::domain::entities::EnterpriseProfile;
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, hierarchy, Args, Entity, EntityRepository, ExternalId, MutableEntity, PgRecordStore,
    RecordStore, Result, SqlValue,
};
use uuid::Uuid;

impl Entity for EnterpriseProfile {
    const TABLE: &'static str = "enterprise_profiles";
    const LABEL: &'static str = "EnterpriseProfileRepository";
    const COLUMNS: &'static str = "id, uuid, agent_staff_id, company_name, corporate_site_url, \
                                   representative, establishment, post_code, office_location, \
                                   employee_number, capital, is_listed, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "agent_staff_id",
        "company_name",
        "corporate_site_url",
        "representative",
        "establishment",
        "post_code",
        "office_location",
        "employee_number",
        "capital",
        "is_listed",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.agent_staff_id,
            &self.company_name,
            &self.corporate_site_url,
            &self.representative,
            &self.establishment,
            &self.post_code,
            &self.office_location,
            self.employee_number,
            &self.capital,
            self.is_listed,
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

impl ExternalId for EnterpriseProfile {}

impl MutableEntity for EnterpriseProfile {
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("agent_staff_id", self.agent_staff_id.into()),
            ("company_name", (&self.company_name).into()),
            ("corporate_site_url", (&self.corporate_site_url).into()),
            ("representative", (&self.representative).into()),
            ("establishment", (&self.establishment).into()),
            ("post_code", (&self.post_code).into()),
            ("office_location", (&self.office_location).into()),
            ("employee_number", self.employee_number.into()),
            ("capital", (&self.capital).into()),
            ("is_listed", self.is_listed.into()),
        ]
    }
}

#[derive(Clone)]
pub struct EnterpriseProfileRepository<S = PgRecordStore> {
    repo: EntityRepository<EnterpriseProfile, S>,
}

impl<S: RecordStore> EnterpriseProfileRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new enterprise profile
    pub async fn create(&self, profile: &mut EnterpriseProfile) -> Result<i64> {
        self.repo.create(profile).await
    }

    pub async fn update(&self, id: i64, profile: &EnterpriseProfile) -> Result<u64> {
        self.repo.update(id, profile).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<EnterpriseProfile> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<EnterpriseProfile> {
        self.repo.find_by_uuid(uuid).await
    }

    pub async fn get_by_agent_staff_id(&self, agent_staff_id: i64) -> Result<Vec<EnterpriseProfile>> {
        self.repo
            .select_where(
                "get_by_agent_staff_id",
                "agent_staff_id = $1 ORDER BY id ASC",
                args![agent_staff_id],
            )
            .await
    }

    /// Enterprises managed by any staff member of the agent
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<EnterpriseProfile>> {
        let clause = format!(
            "id IN ({}) ORDER BY id ASC",
            hierarchy::enterprise_ids_of_agent("$1")
        );
        self.repo
            .select_where("get_by_agent_id", &clause, args![agent_id])
            .await
    }

    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<EnterpriseProfile>> {
        self.repo.get_by_id_list(ids).await
    }

    pub async fn all(&self) -> Result<Vec<EnterpriseProfile>> {
        self.repo.all().await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.repo.delete_by_id(id).await
    }
}

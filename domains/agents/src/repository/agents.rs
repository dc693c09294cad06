//! Agent repository

use crate::domain::entities::Agent;
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, Args, Entity, EntityRepository, ExternalId, MutableEntity, PgRecordStore, RecordStore,
    Result, SqlValue,
};
use uuid::Uuid;

impl Entity for Agent {
    const TABLE: &'static str = "agents";
    const LABEL: &'static str = "AgentRepository";
    const COLUMNS: &'static str = "id, uuid, agent_name, office_location, representative, \
                                   license_number, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "agent_name",
        "office_location",
        "representative",
        "license_number",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            &self.agent_name,
            &self.office_location,
            &self.representative,
            &self.license_number,
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

impl ExternalId for Agent {}

impl MutableEntity for Agent {
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("agent_name", (&self.agent_name).into()),
            ("office_location", (&self.office_location).into()),
            ("representative", (&self.representative).into()),
            ("license_number", (&self.license_number).into()),
        ]
    }
}

#[derive(Clone)]
pub struct AgentRepository<S = PgRecordStore> {
    repo: EntityRepository<Agent, S>,
}

impl<S: RecordStore> AgentRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new agent
    pub async fn create(&self, agent: &mut Agent) -> Result<i64> {
        self.repo.create(agent).await
    }

    /// Update agent profile columns
    pub async fn update(&self, id: i64, agent: &Agent) -> Result<u64> {
        self.repo.update(id, agent).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Agent> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<Agent> {
        self.repo.find_by_uuid(uuid).await
    }

    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<Agent>> {
        self.repo.get_by_id_list(ids).await
    }

    pub async fn all(&self) -> Result<Vec<Agent>> {
        self.repo.all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentlink_store::MockRecordStore;

    fn agent() -> Agent {
        Agent::new(
            "Sakura Career".to_string(),
            "Tokyo".to_string(),
            "Sato".to_string(),
            "13-yu-000000".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_insert_columns_match_insert_args() {
        assert_eq!(agent().insert_args().len(), Agent::INSERT_COLUMNS.len());
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_uuid() {
        let store = MockRecordStore::new();
        let repo = AgentRepository::new(store.clone());
        let mut record = agent();

        let id = repo.create(&mut record).await.unwrap();

        assert_eq!(record.id, id);
        assert!(!record.uuid.is_nil());
        assert!(store.last_call().unwrap().sql.starts_with("INSERT INTO agents"));
    }

    #[tokio::test]
    async fn test_update_leaves_identifiers_and_created_at() {
        let store = MockRecordStore::new();
        let repo = AgentRepository::new(store.clone());

        repo.update(7, &agent()).await.unwrap();

        let sql = store.last_call().unwrap().sql;
        assert!(sql.starts_with("UPDATE agents SET agent_name = $2"));
        assert!(sql.contains("updated_at = $6"));
        assert!(!sql.contains("uuid"));
        assert!(!sql.contains("created_at"));
    }
}

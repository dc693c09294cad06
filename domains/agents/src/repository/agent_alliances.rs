//! Agent alliance repository

use crate::domain::entities::AgentAlliance;
use chrono::{DateTime, Utc};
use talentlink_store::{args, Args, Entity, EntityRepository, PgRecordStore, RecordStore, Result};

impl Entity for AgentAlliance {
    const TABLE: &'static str = "agent_alliances";
    const LABEL: &'static str = "AgentAllianceRepository";
    const COLUMNS: &'static str = "id, agent1_id, agent2_id, agent1_request, agent2_request, \
                                   created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "agent1_id",
        "agent2_id",
        "agent1_request",
        "agent2_request",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.agent1_id,
            self.agent2_id,
            self.agent1_request,
            self.agent2_request,
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

#[derive(Clone)]
pub struct AgentAllianceRepository<S = PgRecordStore> {
    repo: EntityRepository<AgentAlliance, S>,
}

impl<S: RecordStore> AgentAllianceRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new alliance request
    pub async fn create(&self, alliance: &mut AgentAlliance) -> Result<i64> {
        self.repo.create(alliance).await
    }

    pub async fn update_agent1_request(&self, id: i64, request: bool) -> Result<u64> {
        self.repo
            .update_columns(
                "update_agent1_request",
                id,
                vec![("agent1_request", request.into())],
            )
            .await
    }

    pub async fn update_agent2_request(&self, id: i64, request: bool) -> Result<u64> {
        self.repo
            .update_columns(
                "update_agent2_request",
                id,
                vec![("agent2_request", request.into())],
            )
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<AgentAlliance> {
        self.repo.find_by_id(id).await
    }

    /// Find the alliance between two agents regardless of who requested it
    pub async fn find_by_agent_pair(&self, agent_a: i64, agent_b: i64) -> Result<AgentAlliance> {
        self.repo
            .find_where(
                "find_by_agent_pair",
                "(agent1_id = $1 AND agent2_id = $2) OR (agent1_id = $2 AND agent2_id = $1) \
                 ORDER BY id ASC LIMIT 1",
                args![agent_a, agent_b],
            )
            .await
    }

    /// Every alliance the agent is part of, on either side
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<AgentAlliance>> {
        self.repo
            .select_where(
                "get_by_agent_id",
                "agent1_id = $1 OR agent2_id = $1 ORDER BY id ASC",
                args![agent_id],
            )
            .await
    }

    /// Alliances both sides have accepted
    pub async fn get_accepted_by_agent_id(&self, agent_id: i64) -> Result<Vec<AgentAlliance>> {
        self.repo
            .select_where(
                "get_accepted_by_agent_id",
                "(agent1_id = $1 OR agent2_id = $1) AND agent1_request AND agent2_request \
                 ORDER BY id ASC",
                args![agent_id],
            )
            .await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.repo.delete_by_id(id).await
    }
}

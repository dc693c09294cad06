//! TalentLink persistence composition root
//!
//! Builds one record store and hands a clone of it to every domain's
//! repositories.

use talentlink_agents::AgentsRepositories;
use talentlink_chat::ChatRepositories;
use talentlink_common::Config;
use talentlink_enterprises::EnterprisesRepositories;
use talentlink_job_seekers::JobSeekersRepositories;
use talentlink_store::{PgRecordStore, RecordStore};

/// Every repository of the platform over a shared store
#[derive(Clone)]
pub struct Repositories<S = PgRecordStore> {
    pub agents: AgentsRepositories<S>,
    pub enterprises: EnterprisesRepositories<S>,
    pub job_seekers: JobSeekersRepositories<S>,
    pub chat: ChatRepositories<S>,
}

impl<S: RecordStore + Clone> Repositories<S> {
    pub fn new(store: S) -> Self {
        Self {
            agents: AgentsRepositories::new(store.clone()),
            enterprises: EnterprisesRepositories::new(store.clone()),
            job_seekers: JobSeekersRepositories::new(store.clone()),
            chat: ChatRepositories::new(store),
        }
    }
}

impl Repositories<PgRecordStore> {
    /// Open the database pool described by `config`
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let store = PgRecordStore::connect(&config.database())
            .await
            .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
        Ok(Self::new(store))
    }
}

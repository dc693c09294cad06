//! Repository implementations for Agents domain

pub mod agent_alliances;
pub mod agent_staffs;
pub mod agents;
pub mod notifications;

use talentlink_store::{PgRecordStore, RecordStore};

pub use agent_alliances::AgentAllianceRepository;
pub use agent_staffs::AgentStaffRepository;
pub use agents::AgentRepository;
pub use notifications::{NotificationRepository, NotificationViewRepository};

/// Combined repository access for the Agents domain
#[derive(Clone)]
pub struct AgentsRepositories<S = PgRecordStore> {
    pub agents: AgentRepository<S>,
    pub agent_staffs: AgentStaffRepository<S>,
    pub agent_alliances: AgentAllianceRepository<S>,
    pub notifications: NotificationRepository<S>,
    pub notification_views: NotificationViewRepository<S>,
}

impl<S: RecordStore + Clone> AgentsRepositories<S> {
    pub fn new(store: S) -> Self {
        Self {
            agents: AgentRepository::new(store.clone()),
            agent_staffs: AgentStaffRepository::new(store.clone()),
            agent_alliances: AgentAllianceRepository::new(store.clone()),
            notifications: NotificationRepository::new(store.clone()),
            notification_views: NotificationViewRepository::new(store),
        }
    }
}

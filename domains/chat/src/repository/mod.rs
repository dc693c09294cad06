//! Repository implementations for Chat domain

pub mod chat_groups;
pub mod chat_messages;

use talentlink_store::{PgRecordStore, RecordStore};

pub use chat_groups::ChatGroupRepository;
pub use chat_messages::ChatMessageRepository;

/// Combined repository access for the Chat domain
#[derive(Clone)]
pub struct ChatRepositories<S = PgRecordStore> {
    pub chat_groups: ChatGroupRepository<S>,
    pub chat_messages: ChatMessageRepository<S>,
}

impl<S: RecordStore + Clone> ChatRepositories<S> {
    pub fn new(store: S) -> Self {
        Self {
            chat_groups: ChatGroupRepository::new(store.clone()),
            chat_messages: ChatMessageRepository::new(store),
        }
    }
}

//! Domain entities for the Chat domain
//!
//! Each job seeker has at most one chat group with their agent. Messages
//! are written by agent staff, by the job seeker, or by the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use talentlink_common::{now_utc, Error, Result};

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum ChatUserType {
    Agent = 0,
    JobSeeker = 1,
    System = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageType {
    #[default]
    Text = 0,
    Photo = 1,
}

talentlink_store::small_int_code!(ChatUserType, ChatMessageType);

/// Chat thread between an agent and one of its job seekers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatGroupWithJobSeeker {
    pub id: i64,
    pub uuid: Uuid,
    pub agent_id: i64,
    pub job_seeker_id: i64,
    pub agent_last_watched_at: Option<DateTime<Utc>>,
    pub job_seeker_last_watched_at: Option<DateTime<Utc>>,
    /// Messages are mirrored to the job seeker's LINE account
    pub line_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatGroupWithJobSeeker {
    pub fn new(agent_id: i64, job_seeker_id: i64) -> Self {
        let now = now_utc();
        ChatGroupWithJobSeeker {
            id: 0,
            uuid: Uuid::nil(),
            agent_id,
            job_seeker_id,
            agent_last_watched_at: None,
            job_seeker_last_watched_at: None,
            line_active: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Message in a chat group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessageWithJobSeeker {
    pub id: i64,
    pub uuid: Uuid,
    pub group_id: i64,
    pub user_type: ChatUserType,
    pub message_type: ChatMessageType,
    pub message: String,
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatMessageWithJobSeeker {
    /// Text message; the body may not be blank
    pub fn text(group_id: i64, user_type: ChatUserType, message: String) -> Result<Self> {
        if message.trim().is_empty() {
            return Err(Error::Validation("Message is required".to_string()));
        }
        Ok(Self::build(
            group_id,
            user_type,
            ChatMessageType::Text,
            message,
            String::new(),
        ))
    }

    /// Photo message pointing at an uploaded image
    pub fn photo(group_id: i64, user_type: ChatUserType, photo_url: String) -> Result<Self> {
        if photo_url.trim().is_empty() {
            return Err(Error::Validation("Photo URL is required".to_string()));
        }
        Ok(Self::build(
            group_id,
            user_type,
            ChatMessageType::Photo,
            String::new(),
            photo_url,
        ))
    }

    fn build(
        group_id: i64,
        user_type: ChatUserType,
        message_type: ChatMessageType,
        message: String,
        photo_url: String,
    ) -> Self {
        let now = now_utc();
        ChatMessageWithJobSeeker {
            id: 0,
            uuid: Uuid::nil(),
            group_id,
            user_type,
            message_type,
            message,
            photo_url,
            created_at: now,
            updated_at: now,
        }
    }
}

//! Domain entities for the Agents domain
//!
//! Agencies, the staff members who work for them, alliances between
//! agencies, and platform notifications shown to staff.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use talentlink_common::{now_utc, Error, Result};

/// Maximum agent name length (varchar(200))
const MAX_AGENT_NAME_LENGTH: usize = 200;

/// Maximum staff name length (varchar(100))
const MAX_STAFF_NAME_LENGTH: usize = 100;

/// Maximum notification title length (varchar(200))
const MAX_TITLE_LENGTH: usize = 200;

/// Staff authority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum StaffAuthority {
    Owner = 0,
    Admin = 1,
    #[default]
    Member = 2,
}

/// Audience of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTarget {
    /// Every agent on the platform
    #[default]
    All = 0,
    /// Only the agent named by `target_agent_id`
    Agent = 1,
}

talentlink_store::small_int_code!(StaffAuthority, NotificationTarget);

fn require_length(field: &str, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max {
        return Err(Error::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Recruiting agency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Agent {
    pub id: i64,
    pub uuid: Uuid,
    pub agent_name: String,
    pub office_location: String,
    pub representative: String,
    pub license_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Agent {
    /// Create a new agent (id and uuid are assigned on insert)
    pub fn new(
        agent_name: String,
        office_location: String,
        representative: String,
        license_number: String,
    ) -> Result<Self> {
        require_length("Agent name", &agent_name, MAX_AGENT_NAME_LENGTH)?;

        let now = now_utc();
        Ok(Agent {
            id: 0,
            uuid: Uuid::nil(),
            agent_name,
            office_location,
            representative,
            license_number,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Staff member of an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AgentStaff {
    pub id: i64,
    pub uuid: Uuid,
    pub agent_id: i64,
    pub staff_name: String,
    pub furigana: String,
    pub email: String,
    pub phone_number: String,
    pub authority: StaffAuthority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AgentStaff {
    /// Create a new staff member with validation
    pub fn new(
        agent_id: i64,
        staff_name: String,
        furigana: String,
        email: String,
        phone_number: String,
    ) -> Result<Self> {
        require_length("Staff name", &staff_name, MAX_STAFF_NAME_LENGTH)?;
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        let now = now_utc();
        Ok(AgentStaff {
            id: 0,
            uuid: Uuid::nil(),
            agent_id,
            staff_name,
            furigana,
            email,
            phone_number,
            authority: StaffAuthority::default(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Alliance between two agents
///
/// Visible to both sides only once each has sent its request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AgentAlliance {
    pub id: i64,
    pub agent1_id: i64,
    pub agent2_id: i64,
    pub agent1_request: bool,
    pub agent2_request: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AgentAlliance {
    /// Alliance requested by `requester` towards `partner`
    pub fn request(requester: i64, partner: i64) -> Result<Self> {
        if requester == partner {
            return Err(Error::Validation(
                "An agent cannot ally with itself".to_string(),
            ));
        }

        let now = now_utc();
        Ok(AgentAlliance {
            id: 0,
            agent1_id: requester,
            agent2_id: partner,
            agent1_request: true,
            agent2_request: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Both agents have accepted
    pub fn is_accepted(&self) -> bool {
        self.agent1_request && self.agent2_request
    }

    /// The other agent in the alliance, if `agent_id` is a member
    pub fn partner_of(&self, agent_id: i64) -> Option<i64> {
        if self.agent1_id == agent_id {
            Some(self.agent2_id)
        } else if self.agent2_id == agent_id {
            Some(self.agent1_id)
        } else {
            None
        }
    }
}

/// Platform notification shown to agent staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: i64,
    pub uuid: Uuid,
    pub target: NotificationTarget,
    pub target_agent_id: Option<i64>,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Notification for every agent, or for one agent when `target_agent_id` is set
    pub fn new(title: String, body: String, target_agent_id: Option<i64>) -> Result<Self> {
        require_length("Title", &title, MAX_TITLE_LENGTH)?;

        let target = match target_agent_id {
            Some(_) => NotificationTarget::Agent,
            None => NotificationTarget::All,
        };
        let now = now_utc();
        Ok(Notification {
            id: 0,
            uuid: Uuid::nil(),
            target,
            target_agent_id,
            title,
            body,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Marks a notification as read by one staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NotificationView {
    pub id: i64,
    pub notification_id: i64,
    pub agent_staff_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationView {
    pub fn new(notification_id: i64, agent_staff_id: i64) -> Self {
        let now = now_utc();
        NotificationView {
            id: 0,
            notification_id,
            agent_staff_id,
            created_at: now,
            updated_at: now,
        }
    }
}

//! Domain entities for the Job Seekers domain
//!
//! Job seekers registered with an agent, the industries and occupations
//! they want, the licenses they hold, and the agents they are hidden from
//! when shared across an alliance.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateEmail;

use talentlink_common::{now_utc, Error, Result};

/// Maximum name part length (varchar(50))
const MAX_NAME_LENGTH: usize = 50;

/// Maximum license acquisition time length (varchar(20))
const MAX_ACQUISITION_TIME_LENGTH: usize = 20;

/// Where a job seeker stands in the placement pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum JobSeekerPhase {
    #[default]
    Registered = 0,
    Interviewed = 1,
    Recommended = 2,
    Selecting = 3,
    Offered = 4,
    Accepted = 5,
    Joined = 6,
    Declined = 7,
    Released = 8,
}

impl JobSeekerPhase {
    /// Listing order: seekers closest to a decision first, finished ones last
    pub const PRIORITY: [JobSeekerPhase; 9] = [
        JobSeekerPhase::Offered,
        JobSeekerPhase::Selecting,
        JobSeekerPhase::Recommended,
        JobSeekerPhase::Interviewed,
        JobSeekerPhase::Registered,
        JobSeekerPhase::Accepted,
        JobSeekerPhase::Joined,
        JobSeekerPhase::Declined,
        JobSeekerPhase::Released,
    ];

    /// Codes of [`JobSeekerPhase::PRIORITY`], for binding as a `SMALLINT[]`
    pub fn priority_codes() -> Vec<i16> {
        Self::PRIORITY.iter().map(|phase| *phase as i16).collect()
    }
}

impl TryFrom<i16> for JobSeekerPhase {
    type Error = Error;

    fn try_from(code: i16) -> Result<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|phase| *phase as i16 == code)
            .ok_or_else(|| Error::Validation(format!("Unknown job seeker phase: {code}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Unspecified = 0,
    Male = 1,
    Female = 2,
}

talentlink_store::small_int_code!(JobSeekerPhase, Gender);

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

/// Job seeker registered with an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobSeeker {
    pub id: i64,
    pub uuid: Uuid,
    pub agent_id: i64,
    pub agent_staff_id: Option<i64>,
    pub last_name: String,
    pub first_name: String,
    pub last_furigana: String,
    pub first_furigana: String,
    pub gender: Gender,
    pub birthday: Option<NaiveDate>,
    pub phone_number: String,
    pub email: String,
    pub phase: JobSeekerPhase,
    /// Agreed to the agent's terms
    pub agreement: bool,
    /// Opted in to being shown to allied agents for matching
    pub can_view_matching_job: bool,
    pub interview_date: Option<DateTime<Utc>>,
    pub acceptance_points: String,
    pub last_watched_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobSeeker {
    /// Create a new job seeker with validation
    pub fn new(
        agent_id: i64,
        last_name: String,
        first_name: String,
        phone_number: String,
        email: String,
    ) -> Result<Self> {
        require_length("Last name", &last_name, MAX_NAME_LENGTH)?;
        require_length("First name", &first_name, MAX_NAME_LENGTH)?;
        if !email.is_empty() && !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        let now = now_utc();
        Ok(JobSeeker {
            id: 0,
            uuid: Uuid::nil(),
            agent_id,
            agent_staff_id: None,
            last_name,
            first_name,
            last_furigana: String::new(),
            first_furigana: String::new(),
            gender: Gender::default(),
            birthday: None,
            phone_number,
            email,
            phase: JobSeekerPhase::default(),
            agreement: false,
            can_view_matching_job: false,
            interview_date: None,
            acceptance_points: String::new(),
            last_watched_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// Industry a job seeker wants to work in, by preference rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobSeekerDesiredIndustry {
    pub id: i64,
    pub job_seeker_id: i64,
    pub desired_industry: i16,
    pub desired_rank: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobSeekerDesiredIndustry {
    pub fn new(job_seeker_id: i64, desired_industry: i16, desired_rank: i16) -> Self {
        let now = now_utc();
        JobSeekerDesiredIndustry {
            id: 0,
            job_seeker_id,
            desired_industry,
            desired_rank,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Occupation a job seeker wants, by preference rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobSeekerDesiredOccupation {
    pub id: i64,
    pub job_seeker_id: i64,
    pub desired_occupation: i16,
    pub desired_rank: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobSeekerDesiredOccupation {
    pub fn new(job_seeker_id: i64, desired_occupation: i16, desired_rank: i16) -> Self {
        let now = now_utc();
        JobSeekerDesiredOccupation {
            id: 0,
            job_seeker_id,
            desired_occupation,
            desired_rank,
            created_at: now,
            updated_at: now,
        }
    }
}

/// License held by a job seeker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobSeekerLicense {
    pub id: i64,
    pub job_seeker_id: i64,
    pub license_type: i16,
    /// Free-form year/month, e.g. `2019-04`
    pub acquisition_time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobSeekerLicense {
    pub fn new(job_seeker_id: i64, license_type: i16, acquisition_time: String) -> Result<Self> {
        if acquisition_time.chars().count() > MAX_ACQUISITION_TIME_LENGTH {
            return Err(Error::Validation(format!(
                "Acquisition time must be at most {MAX_ACQUISITION_TIME_LENGTH} characters"
            )));
        }

        let now = now_utc();
        Ok(JobSeekerLicense {
            id: 0,
            job_seeker_id,
            license_type,
            acquisition_time,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Job seeker the owning agent keeps out of an allied agent's view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobSeekerHideToAgent {
    pub id: i64,
    pub job_seeker_id: i64,
    pub agent_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobSeekerHideToAgent {
    pub fn new(job_seeker_id: i64, agent_id: i64) -> Self {
        let now = now_utc();
        JobSeekerHideToAgent {
            id: 0,
            job_seeker_id,
            agent_id,
            created_at: now,
            updated_at: now,
        }
    }
}

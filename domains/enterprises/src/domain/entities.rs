//! Domain entities for the Enterprises domain
//!
//! Client companies managed by agent staff, the billing addresses that carry
//! their contracts, and the job information (listings) published under each
//! billing address together with its detail rows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::ValidateUrl;

use talentlink_common::{now_utc, Error, Result};

/// Maximum company name length (varchar(200))
const MAX_COMPANY_NAME_LENGTH: usize = 200;

/// Maximum job information title length (varchar(200))
const MAX_TITLE_LENGTH: usize = 200;

/// Contract status between the agent and the billed company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum ContractPhase {
    #[default]
    Negotiating = 0,
    Contracted = 1,
    Terminated = 2,
}

/// Whether a listing is accepting candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum RecruitmentState {
    #[default]
    Open = 0,
    Paused = 1,
    Closed = 2,
}

talentlink_store::small_int_code!(ContractPhase, RecruitmentState);

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

/// Client company managed by one staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EnterpriseProfile {
    pub id: i64,
    pub uuid: Uuid,
    pub agent_staff_id: i64,
    pub company_name: String,
    pub corporate_site_url: String,
    pub representative: String,
    pub establishment: String,
    pub post_code: String,
    pub office_location: String,
    pub employee_number: Option<i32>,
    pub capital: String,
    pub is_listed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EnterpriseProfile {
    /// Create a new enterprise profile; the remaining columns start empty
    pub fn new(agent_staff_id: i64, company_name: String) -> Result<Self> {
        require_length("Company name", &company_name, MAX_COMPANY_NAME_LENGTH)?;

        let now = now_utc();
        Ok(EnterpriseProfile {
            id: 0,
            uuid: Uuid::nil(),
            agent_staff_id,
            company_name,
            corporate_site_url: String::new(),
            representative: String::new(),
            establishment: String::new(),
            post_code: String::new(),
            office_location: String::new(),
            employee_number: None,
            capital: String::new(),
            is_listed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set the corporate site, which must be a valid URL when present
    pub fn with_corporate_site_url(mut self, url: String) -> Result<Self> {
        if !url.is_empty() && !url.validate_url() {
            return Err(Error::Validation("Invalid corporate site URL".to_string()));
        }
        self.corporate_site_url = url;
        Ok(self)
    }
}

/// Billing address and contract terms of an enterprise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BillingAddress {
    pub id: i64,
    pub uuid: Uuid,
    pub enterprise_id: i64,
    pub agent_staff_id: i64,
    pub contract_phase: ContractPhase,
    pub contract_date: Option<NaiveDate>,
    pub payment_policy: String,
    pub company_name: String,
    pub address: String,
    pub how_to_recommend: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BillingAddress {
    pub fn new(
        enterprise_id: i64,
        agent_staff_id: i64,
        company_name: String,
        address: String,
    ) -> Result<Self> {
        require_length("Company name", &company_name, MAX_COMPANY_NAME_LENGTH)?;

        let now = now_utc();
        Ok(BillingAddress {
            id: 0,
            uuid: Uuid::nil(),
            enterprise_id,
            agent_staff_id,
            contract_phase: ContractPhase::default(),
            contract_date: None,
            payment_policy: String::new(),
            company_name,
            address,
            how_to_recommend: String::new(),
            title: String::new(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Job listing published under a billing address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobInformation {
    pub id: i64,
    pub uuid: Uuid,
    pub billing_address_id: i64,
    pub title: String,
    pub recruitment_state: RecruitmentState,
    pub expire_at: Option<NaiveDate>,
    pub work_details: String,
    pub number_of_hires: String,
    pub annual_income_min: Option<i32>,
    pub annual_income_max: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobInformation {
    pub fn new(billing_address_id: i64, title: String) -> Result<Self> {
        require_length("Title", &title, MAX_TITLE_LENGTH)?;

        let now = now_utc();
        Ok(JobInformation {
            id: 0,
            uuid: Uuid::nil(),
            billing_address_id,
            title,
            recruitment_state: RecruitmentState::default(),
            expire_at: None,
            work_details: String::new(),
            number_of_hires: String::new(),
            annual_income_min: None,
            annual_income_max: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set the annual income range; the minimum may not exceed the maximum
    pub fn with_annual_income(mut self, min: Option<i32>, max: Option<i32>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(Error::Validation(
                    "Annual income minimum exceeds maximum".to_string(),
                ));
            }
        }
        self.annual_income_min = min;
        self.annual_income_max = max;
        Ok(self)
    }
}

/// Prefecture where the job is located
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobInformationPrefecture {
    pub id: i64,
    pub job_information_id: i64,
    pub prefecture: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobInformationPrefecture {
    pub fn new(job_information_id: i64, prefecture: i16) -> Self {
        let now = now_utc();
        JobInformationPrefecture {
            id: 0,
            job_information_id,
            prefecture,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Language skill a listing requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobInformationRequiredLanguage {
    pub id: i64,
    pub job_information_id: i64,
    pub language_type: i16,
    pub language_level: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobInformationRequiredLanguage {
    pub fn new(job_information_id: i64, language_type: i16, language_level: i16) -> Self {
        let now = now_utc();
        JobInformationRequiredLanguage {
            id: 0,
            job_information_id,
            language_type,
            language_level,
            created_at: now,
            updated_at: now,
        }
    }
}

/// PC tool a listing requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobInformationRequiredPcTool {
    pub id: i64,
    pub job_information_id: i64,
    pub tool: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobInformationRequiredPcTool {
    pub fn new(job_information_id: i64, tool: i16) -> Self {
        let now = now_utc();
        JobInformationRequiredPcTool {
            id: 0,
            job_information_id,
            tool,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Listing the owning agent keeps out of an allied agent's view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobInformationHideToAgent {
    pub id: i64,
    pub job_information_id: i64,
    pub agent_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobInformationHideToAgent {
    pub fn new(job_information_id: i64, agent_id: i64) -> Self {
        let now = now_utc();
        JobInformationHideToAgent {
            id: 0,
            job_information_id,
            agent_id,
            created_at: now,
            updated_at: now,
        }
    }
}

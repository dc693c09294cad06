//! Ownership hierarchy as composable subqueries
//!
//! `job_informations → billing_addresses → enterprise_profiles →
//! agent_staffs → agents`, plus job seekers and agent alliances. Each
//! function returns a `SELECT id ...` subquery for use inside `IN (...)`,
//! parameterized by an already-bound placeholder such as `$1`.

/// Enterprises managed by any staff member of an agent
pub fn enterprise_ids_of_agent(agent: &str) -> String {
    enterprise_ids_where(&format!("= {agent}"))
}

pub fn billing_address_ids_of_enterprise(enterprise: &str) -> String {
    format!("SELECT id FROM billing_addresses WHERE enterprise_id = {enterprise}")
}

pub fn billing_address_ids_of_agent(agent: &str) -> String {
    billing_address_ids_where(&format!("= {agent}"))
}

pub fn job_information_ids_of_enterprise(enterprise: &str) -> String {
    format!(
        "SELECT id FROM job_informations WHERE billing_address_id IN ({})",
        billing_address_ids_of_enterprise(enterprise)
    )
}

pub fn job_information_ids_of_agent(agent: &str) -> String {
    job_information_ids_where(&format!("= {agent}"))
}

/// Job information published by agents allied with `agent`
pub fn job_information_ids_of_allied_agents(agent: &str) -> String {
    job_information_ids_where(&format!("IN ({})", allied_agent_ids(agent)))
}

pub fn job_seeker_ids_of_agent(agent: &str) -> String {
    format!("SELECT id FROM job_seekers WHERE agent_id = {agent}")
}

/// Agents in an alliance with `agent` that both sides have accepted
pub fn allied_agent_ids(agent: &str) -> String {
    format!(
        "SELECT CASE WHEN agent1_id = {agent} THEN agent2_id ELSE agent1_id END \
         FROM agent_alliances \
         WHERE (agent1_id = {agent} OR agent2_id = {agent}) \
         AND agent1_request AND agent2_request"
    )
}

/// Job information hidden from `agent`
pub fn job_information_ids_hidden_to_agent(agent: &str) -> String {
    format!("SELECT job_information_id FROM job_information_hide_to_agents WHERE agent_id = {agent}")
}

/// Job seekers hidden from `agent`
pub fn job_seeker_ids_hidden_to_agent(agent: &str) -> String {
    format!("SELECT job_seeker_id FROM job_seeker_hide_to_agents WHERE agent_id = {agent}")
}

// `agent` predicates below are either `= $n` or `IN (subquery)`

fn staff_ids_where(agent: &str) -> String {
    format!("SELECT id FROM agent_staffs WHERE agent_id {agent}")
}

fn enterprise_ids_where(agent: &str) -> String {
    format!(
        "SELECT id FROM enterprise_profiles WHERE agent_staff_id IN ({})",
        staff_ids_where(agent)
    )
}

fn billing_address_ids_where(agent: &str) -> String {
    format!(
        "SELECT id FROM billing_addresses WHERE enterprise_id IN ({})",
        enterprise_ids_where(agent)
    )
}

fn job_information_ids_where(agent: &str) -> String {
    format!(
        "SELECT id FROM job_informations WHERE billing_address_id IN ({})",
        billing_address_ids_where(agent)
    )
}

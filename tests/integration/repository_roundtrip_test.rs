//! Repository round trips against a real database
//!
//! These tests need a PostgreSQL instance at TEST_DATABASE_URL and are
//! ignored by default. Run with `--ignored` once the database is up.

mod common;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use common::TestApp;
use talentlink_agents::StaffAuthority;
use talentlink_chat::{ChatGroupWithJobSeeker, ChatMessageWithJobSeeker, ChatUserType};
use talentlink_enterprises::{
    ContractPhase, EnterpriseProfile, JobInformationPrefecture, RecruitmentState,
};
use talentlink_job_seekers::{Gender, JobSeekerDesiredIndustry, JobSeekerPhase};

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_agent_round_trip() {
    let app = TestApp::new().await.unwrap();

    let agent = app.create_agent().await.unwrap();
    let found = app.repos.agents.agents.find_by_id(agent.id).await.unwrap();
    assert_eq!(found, agent);

    let by_uuid = app.repos.agents.agents.find_by_uuid(agent.uuid).await.unwrap();
    assert_eq!(by_uuid.id, agent.id);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_job_seeker_round_trip_preserves_every_column() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let repo = &app.repos.job_seekers.job_seekers;

    let mut seeker = talentlink_job_seekers::JobSeeker::new(
        agent.id,
        "Tanaka".to_string(),
        "Taro".to_string(),
        "080-1234-5678".to_string(),
        "tanaka@example.com".to_string(),
    )
    .unwrap();
    seeker.gender = Gender::Male;
    seeker.birthday = NaiveDate::from_ymd_opt(1990, 4, 1);
    seeker.phase = JobSeekerPhase::Interviewed;
    repo.create(&mut seeker).await.unwrap();

    let found = repo.find_by_id(seeker.id).await.unwrap();
    assert_eq!(found, seeker);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_find_by_id_on_missing_row_is_not_found() {
    let app = TestApp::new().await.unwrap();

    let err = app
        .repos
        .enterprises
        .job_informations
        .find_by_id(i64::MAX)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let err = app
        .repos
        .chat
        .chat_groups
        .find_by_uuid(uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_narrow_update_changes_only_target_column() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let job = app
        .create_job_information(agent.id, "Backend engineer")
        .await
        .unwrap();
    let repo = &app.repos.enterprises.job_informations;

    repo.update_recruitment_state(job.id, RecruitmentState::Closed)
        .await
        .unwrap();

    let after = repo.find_by_id(job.id).await.unwrap();
    assert_eq!(after.recruitment_state, RecruitmentState::Closed);
    assert_eq!(after.title, job.title);
    assert_eq!(after.billing_address_id, job.billing_address_id);
    assert_eq!(after.created_at, job.created_at);
    assert!(after.updated_at >= job.updated_at);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_full_update_persists_every_mutable_column() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let staff = app.create_staff(agent.id).await.unwrap();
    let seeker = app
        .create_job_seeker(agent.id, "Tanaka", "Taro", "080-1234-5678")
        .await
        .unwrap();
    let repo = &app.repos.job_seekers.job_seekers;

    let mut edited = seeker.clone();
    edited.last_name = "Suzuki".to_string();
    edited.agent_staff_id = Some(staff.id);
    edited.phase = JobSeekerPhase::Offered;
    edited.agreement = true;
    edited.can_view_matching_job = true;
    edited.acceptance_points = "pts".to_string();
    edited.last_watched_at = Some(seeker.created_at);

    let rows = repo.update(seeker.id, &edited).await.unwrap();
    assert_eq!(rows, 1);

    let after = repo.find_by_id(seeker.id).await.unwrap();
    assert!(after.updated_at >= seeker.updated_at);
    edited.updated_at = after.updated_at;
    assert_eq!(after, edited);
}

/// `created_at` is fixed and `updated_at` never moves backwards across a narrow update
fn assert_narrow_stamps(
    label: &str,
    before: (DateTime<Utc>, DateTime<Utc>),
    after: (DateTime<Utc>, DateTime<Utc>),
) {
    assert_eq!(after.0, before.0, "{label}: created_at changed");
    assert!(after.1 >= before.1, "{label}: updated_at went backwards");
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_narrow_updates_keep_created_at_and_advance_updated_at() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let job = app
        .create_job_information(agent.id, "Accountant")
        .await
        .unwrap();
    let enterprises = &app.repos.enterprises;
    let staffs = &app.repos.agents.agent_staffs;

    let address = enterprises
        .billing_addresses
        .find_by_id(job.billing_address_id)
        .await
        .unwrap();
    enterprises
        .billing_addresses
        .update_contract_phase(address.id, ContractPhase::Contracted)
        .await
        .unwrap();
    let address_after = enterprises
        .billing_addresses
        .find_by_id(address.id)
        .await
        .unwrap();
    assert_eq!(address_after.contract_phase, ContractPhase::Contracted);
    assert_narrow_stamps(
        "billing address",
        (address.created_at, address.updated_at),
        (address_after.created_at, address_after.updated_at),
    );

    enterprises
        .job_informations
        .update_recruitment_state(job.id, RecruitmentState::Paused)
        .await
        .unwrap();
    let job_after = enterprises.job_informations.find_by_id(job.id).await.unwrap();
    assert_eq!(job_after.recruitment_state, RecruitmentState::Paused);
    assert_narrow_stamps(
        "job information",
        (job.created_at, job.updated_at),
        (job_after.created_at, job_after.updated_at),
    );

    let staff = staffs.find_by_id(address.agent_staff_id).await.unwrap();
    staffs
        .update_authority(staff.id, StaffAuthority::Admin)
        .await
        .unwrap();
    let staff_after = staffs.find_by_id(staff.id).await.unwrap();
    assert_eq!(staff_after.authority, StaffAuthority::Admin);
    assert_eq!(staff_after.email, staff.email);
    assert_narrow_stamps(
        "agent staff",
        (staff.created_at, staff.updated_at),
        (staff_after.created_at, staff_after.updated_at),
    );
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_backdating_leaves_updated_at() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let seeker = app
        .create_job_seeker(agent.id, "Sato", "Hanako", "090-0000-0000")
        .await
        .unwrap();
    let repo = &app.repos.job_seekers.job_seekers;
    let backdated = seeker.created_at - Duration::days(30);

    repo.update_created_at(seeker.id, backdated).await.unwrap();

    let after = repo.find_by_id(seeker.id).await.unwrap();
    assert_eq!(after.created_at, backdated);
    assert_eq!(after.updated_at, seeker.updated_at);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_delete_by_parent_leaves_other_parents() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let first = app.create_job_information(agent.id, "First").await.unwrap();
    let second = app.create_job_information(agent.id, "Second").await.unwrap();
    let prefectures = &app.repos.enterprises.job_information_prefectures;

    for (job_id, prefecture) in [(first.id, 13), (first.id, 14), (second.id, 27)] {
        let mut row = JobInformationPrefecture::new(job_id, prefecture);
        prefectures.create(&mut row).await.unwrap();
    }

    let removed = prefectures
        .delete_by_job_information_id(first.id)
        .await
        .unwrap();

    assert_eq!(removed, 2);
    assert!(prefectures
        .get_by_job_information_id(first.id)
        .await
        .unwrap()
        .is_empty());
    let remaining = prefectures
        .get_by_job_information_id(second.id)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].prefecture, 27);

    let by_agent = prefectures.get_by_agent_id(agent.id).await.unwrap();
    assert_eq!(by_agent, remaining);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_detail_rows_by_job_seeker_list() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let a = app
        .create_job_seeker(agent.id, "Ito", "Ken", "")
        .await
        .unwrap();
    let b = app
        .create_job_seeker(agent.id, "Kato", "Yui", "")
        .await
        .unwrap();
    let industries = &app.repos.job_seekers.desired_industries;

    for (seeker_id, rank) in [(a.id, 1), (a.id, 2), (b.id, 1)] {
        let mut row = JobSeekerDesiredIndustry::new(seeker_id, 5, rank);
        industries.create(&mut row).await.unwrap();
    }

    let rows = industries
        .get_by_job_seeker_id_list(&[a.id, b.id])
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(industries.get_by_agent_id(agent.id).await.unwrap(), rows);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_enterprise_hierarchy_lookups() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let other = app.create_agent().await.unwrap();
    let job = app.create_job_information(agent.id, "Designer").await.unwrap();
    app.create_job_information(other.id, "Elsewhere").await.unwrap();
    let enterprises = &app.repos.enterprises;

    let listings = enterprises
        .job_informations
        .get_by_agent_id(agent.id)
        .await
        .unwrap();
    assert_eq!(listings, vec![job.clone()]);

    let addresses = enterprises
        .billing_addresses
        .get_by_agent_id(agent.id)
        .await
        .unwrap();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0].id, job.billing_address_id);

    let profiles: Vec<EnterpriseProfile> = enterprises
        .enterprise_profiles
        .get_by_agent_id(agent.id)
        .await
        .unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, addresses[0].enterprise_id);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_chat_latest_message_per_group() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let seeker = app
        .create_job_seeker(agent.id, "Mori", "Aoi", "")
        .await
        .unwrap();
    let chat = &app.repos.chat;

    let mut group = ChatGroupWithJobSeeker::new(agent.id, seeker.id);
    chat.chat_groups.create(&mut group).await.unwrap();

    for (user_type, body) in [
        (ChatUserType::Agent, "Hello"),
        (ChatUserType::JobSeeker, "Hi there"),
    ] {
        let mut message =
            ChatMessageWithJobSeeker::text(group.id, user_type, body.to_string()).unwrap();
        chat.chat_messages.create(&mut message).await.unwrap();
    }

    let latest = chat
        .chat_messages
        .get_latest_by_group_id_list(&[group.id])
        .await
        .unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].message, "Hi there");

    assert_eq!(
        chat.chat_groups
            .count_unwatched_by_agent_id(agent.id)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        chat.chat_messages
            .count_unread_by_group_id(group.id, None)
            .await
            .unwrap(),
        1
    );

    chat.chat_groups
        .update_agent_last_watched_at(group.id, talentlink_common::now_utc())
        .await
        .unwrap();
    assert_eq!(
        chat.chat_groups
            .count_unwatched_by_agent_id(agent.id)
            .await
            .unwrap(),
        0
    );
}

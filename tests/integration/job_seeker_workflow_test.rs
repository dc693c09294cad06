//! End-to-end job seeker registration workflow
//!
//! Requires a PostgreSQL instance at TEST_DATABASE_URL; ignored by default.

mod common;

use common::TestApp;
use talentlink_job_seekers::{JobSeekerHideToAgent, JobSeekerPhase};

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_register_list_and_agree() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let repo = &app.repos.job_seekers.job_seekers;

    let seeker = app
        .create_job_seeker(agent.id, "Tanaka", "Taro", "080-1234-5678")
        .await
        .unwrap();
    assert!(seeker.id > 0);
    assert!(!seeker.uuid.is_nil());

    let listed = repo.get_by_agent_id(agent.id).await.unwrap();
    assert_eq!(listed.iter().filter(|s| s.id == seeker.id).count(), 1);
    assert_eq!(listed.len(), 1);

    let rows = repo.update_agreement(seeker.id, true).await.unwrap();
    assert_eq!(rows, 1);

    let after = repo.find_by_id(seeker.id).await.unwrap();
    assert!(after.agreement);
    assert!(after.updated_at >= seeker.updated_at);
    assert_eq!(after.created_at, seeker.created_at);
    assert_eq!(after.phase, seeker.phase);
    assert_eq!(after.last_name, seeker.last_name);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_listing_follows_phase_priority() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let repo = &app.repos.job_seekers.job_seekers;

    let registered = app
        .create_job_seeker(agent.id, "Abe", "Rin", "")
        .await
        .unwrap();
    let offered = app
        .create_job_seeker(agent.id, "Ueda", "Sho", "")
        .await
        .unwrap();
    repo.update_phase(offered.id, JobSeekerPhase::Offered)
        .await
        .unwrap();

    let listed = repo.get_by_agent_id(agent.id).await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![offered.id, registered.id]);

    let only_offered = repo
        .get_by_agent_id_and_phase_list(agent.id, &[JobSeekerPhase::Offered])
        .await
        .unwrap();
    assert_eq!(only_offered.len(), 1);
    assert_eq!(only_offered[0].id, offered.id);

    assert_eq!(repo.count_by_agent_id(agent.id).await.unwrap(), 2);
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_alliance_search_respects_opt_in_and_hiding() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let partner = app.create_agent().await.unwrap();
    app.ally(agent.id, partner.id).await.unwrap();
    let repo = &app.repos.job_seekers.job_seekers;

    let own = app
        .create_job_seeker(agent.id, "Tanaka", "Ichiro", "")
        .await
        .unwrap();
    let shared = app
        .create_job_seeker(partner.id, "Tanaka", "Jiro", "")
        .await
        .unwrap();
    let private = app
        .create_job_seeker(partner.id, "Tanaka", "Saburo", "")
        .await
        .unwrap();
    let hidden = app
        .create_job_seeker(partner.id, "Tanaka", "Shiro", "")
        .await
        .unwrap();
    repo.update_can_view_matching_job(shared.id, true)
        .await
        .unwrap();
    repo.update_can_view_matching_job(hidden.id, true)
        .await
        .unwrap();
    let mut hide = JobSeekerHideToAgent::new(hidden.id, agent.id);
    app.repos
        .job_seekers
        .hide_to_agents
        .create(&mut hide)
        .await
        .unwrap();

    let found = repo
        .get_by_agent_id_and_alliance_and_free_word(agent.id, "Tanaka")
        .await
        .unwrap();
    let mut ids: Vec<i64> = found.iter().map(|s| s.id).collect();
    ids.sort_unstable();

    assert_eq!(ids, vec![own.id, shared.id]);
    assert!(!ids.contains(&private.id));
}

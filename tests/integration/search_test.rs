//! Free-word search against a real database
//!
//! Requires a PostgreSQL instance at TEST_DATABASE_URL; ignored by default.

mod common;

use common::TestApp;
use talentlink_enterprises::{JobInformationHideToAgent, RecruitmentState};

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_numeric_free_word_matches_dehyphenated_phone() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let seeker = app
        .create_job_seeker(agent.id, "Tanaka", "Taro", "080-1234-5678")
        .await
        .unwrap();
    app.create_job_seeker(agent.id, "Suzuki", "Jiro", "03-9999-0000")
        .await
        .unwrap();
    let repo = &app.repos.job_seekers.job_seekers;

    let found = repo
        .get_by_agent_id_and_free_word(agent.id, "080")
        .await
        .unwrap();
    // "080" also matches id 80 if the other seeker happens to have it
    assert!(found.iter().any(|s| s.id == seeker.id));
    assert!(found.iter().all(|s| s.id == seeker.id || s.id == 80));

    let by_id = repo
        .get_by_agent_id_and_free_word(agent.id, &seeker.id.to_string())
        .await
        .unwrap();
    assert!(by_id.iter().any(|s| s.id == seeker.id));
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_text_free_word_matches_concatenated_name() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let seeker = app
        .create_job_seeker(agent.id, "Tanaka", "Taro", "")
        .await
        .unwrap();
    app.create_job_seeker(agent.id, "Suzuki", "Jiro", "")
        .await
        .unwrap();
    let repo = &app.repos.job_seekers.job_seekers;

    for word in ["Tanaka", "akaTa", "TanakaTaro"] {
        let found = repo
            .get_by_agent_id_and_free_word(agent.id, word)
            .await
            .unwrap();
        assert_eq!(found.len(), 1, "search for {word}");
        assert_eq!(found[0].id, seeker.id);
    }

    let everyone = repo
        .get_by_agent_id_and_free_word(agent.id, "")
        .await
        .unwrap();
    assert_eq!(everyone.len(), 2);

    let wildcard = repo
        .get_by_agent_id_and_free_word(agent.id, "%")
        .await
        .unwrap();
    assert!(wildcard.is_empty());
}

#[test_log::test(tokio::test)]
#[ignore] // Requires TEST_DATABASE_URL
async fn test_job_information_free_word_and_alliance() {
    let app = TestApp::new().await.unwrap();
    let agent = app.create_agent().await.unwrap();
    let partner = app.create_agent().await.unwrap();
    app.ally(agent.id, partner.id).await.unwrap();
    let repo = &app.repos.enterprises.job_informations;

    let own = app
        .create_job_information(agent.id, "Backend engineer")
        .await
        .unwrap();
    let shared = app
        .create_job_information(partner.id, "Data engineer")
        .await
        .unwrap();
    let closed = app
        .create_job_information(partner.id, "Closed listing")
        .await
        .unwrap();
    let hidden = app
        .create_job_information(partner.id, "Hidden listing")
        .await
        .unwrap();
    repo.update_recruitment_state(closed.id, RecruitmentState::Closed)
        .await
        .unwrap();
    let mut hide = JobInformationHideToAgent::new(hidden.id, agent.id);
    app.repos
        .enterprises
        .job_information_hide_to_agents
        .create(&mut hide)
        .await
        .unwrap();

    let by_title = repo
        .get_by_agent_id_and_free_word(agent.id, "engineer")
        .await
        .unwrap();
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, own.id);

    let by_id = repo
        .get_by_agent_id_and_free_word(agent.id, &own.id.to_string())
        .await
        .unwrap();
    assert_eq!(by_id.len(), 1);

    let allied = repo.get_alliance_by_agent_id(agent.id).await.unwrap();
    let ids: Vec<i64> = allied.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![shared.id]);
}

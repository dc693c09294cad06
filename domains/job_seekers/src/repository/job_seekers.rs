//! Job seeker repository

use crate::domain::entities::{JobSeeker, JobSeekerPhase};
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, hierarchy, Args, Entity, EntityRepository, ExternalId, FreeWord, FreeWordTarget,
    MutableEntity, PgRecordStore, RecordStore, Result, SqlValue,
};
use uuid::Uuid;

/// Numeric input matches the id or the dehyphenated phone number; text
/// matches full name, full furigana or the exact phone number
const FREE_WORD_TARGET: FreeWordTarget = FreeWordTarget {
    id_column: "id",
    text_columns: &[
        &["last_name", "first_name"],
        &["last_furigana", "first_furigana"],
    ],
    phone_column: Some("phone_number"),
};

impl Entity for JobSeeker {
    const TABLE: &'static str = "job_seekers";
    const LABEL: &'static str = "JobSeekerRepository";
    const COLUMNS: &'static str = "id, uuid, agent_id, agent_staff_id, last_name, first_name, \
                                   last_furigana, first_furigana, gender, birthday, phone_number, \
                                   email, phase, agreement, can_view_matching_job, \
                                   interview_date, acceptance_points, last_watched_at, \
                                   created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "agent_id",
        "agent_staff_id",
        "last_name",
        "first_name",
        "last_furigana",
        "first_furigana",
        "gender",
        "birthday",
        "phone_number",
        "email",
        "phase",
        "agreement",
        "can_view_matching_job",
        "interview_date",
        "acceptance_points",
        "last_watched_at",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.agent_id,
            self.agent_staff_id,
            &self.last_name,
            &self.first_name,
            &self.last_furigana,
            &self.first_furigana,
            self.gender,
            self.birthday,
            &self.phone_number,
            &self.email,
            self.phase,
            self.agreement,
            self.can_view_matching_job,
            self.interview_date,
            &self.acceptance_points,
            self.last_watched_at,
            self.created_at,
            self.updated_at
        ]
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn prepare_insert(&mut self, now: DateTime<Utc>) {
        if self.uuid.is_nil() {
            self.uuid = new_uuid();
        }
        self.created_at = now;
        self.updated_at = now;
    }
}

impl ExternalId for JobSeeker {}

impl MutableEntity for JobSeeker {
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("agent_id", self.agent_id.into()),
            ("agent_staff_id", self.agent_staff_id.into()),
            ("last_name", (&self.last_name).into()),
            ("first_name", (&self.first_name).into()),
            ("last_furigana", (&self.last_furigana).into()),
            ("first_furigana", (&self.first_furigana).into()),
            ("gender", self.gender.into()),
            ("birthday", self.birthday.into()),
            ("phone_number", (&self.phone_number).into()),
            ("email", (&self.email).into()),
            ("phase", self.phase.into()),
            ("agreement", self.agreement.into()),
            ("can_view_matching_job", self.can_view_matching_job.into()),
            ("interview_date", self.interview_date.into()),
            ("acceptance_points", (&self.acceptance_points).into()),
            ("last_watched_at", self.last_watched_at.into()),
        ]
    }
}

/// `ORDER BY` placing phases in [`JobSeekerPhase::PRIORITY`] order, newest first within a phase
fn priority_order(args: &mut Args) -> String {
    format!(
        "ORDER BY array_position({}::smallint[], phase) ASC, created_at DESC, id DESC",
        args.bind(JobSeekerPhase::priority_codes())
    )
}

#[derive(Clone)]
pub struct JobSeekerRepository<S = PgRecordStore> {
    repo: EntityRepository<JobSeeker, S>,
}

impl<S: RecordStore> JobSeekerRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new job seeker
    pub async fn create(&self, seeker: &mut JobSeeker) -> Result<i64> {
        self.repo.create(seeker).await
    }

    /// Update personal details
    pub async fn update(&self, id: i64, seeker: &JobSeeker) -> Result<u64> {
        self.repo.update(id, seeker).await
    }

    pub async fn update_phase(&self, id: i64, phase: JobSeekerPhase) -> Result<u64> {
        self.repo
            .update_columns("update_phase", id, vec![("phase", phase.into())])
            .await
    }

    pub async fn update_agreement(&self, id: i64, agreement: bool) -> Result<u64> {
        self.repo
            .update_columns("update_agreement", id, vec![("agreement", agreement.into())])
            .await
    }

    pub async fn update_can_view_matching_job(&self, id: i64, can_view: bool) -> Result<u64> {
        self.repo
            .update_columns(
                "update_can_view_matching_job",
                id,
                vec![("can_view_matching_job", can_view.into())],
            )
            .await
    }

    /// Assign the job seeker to a staff member, or unassign with `None`
    pub async fn update_agent_staff_id(&self, id: i64, agent_staff_id: Option<i64>) -> Result<u64> {
        self.repo
            .update_columns(
                "update_agent_staff_id",
                id,
                vec![("agent_staff_id", agent_staff_id.into())],
            )
            .await
    }

    pub async fn update_last_watched_at(&self, id: i64, watched_at: DateTime<Utc>) -> Result<u64> {
        self.repo
            .update_columns(
                "update_last_watched_at",
                id,
                vec![("last_watched_at", watched_at.into())],
            )
            .await
    }

    pub async fn update_acceptance_points(&self, id: i64, points: &str) -> Result<u64> {
        self.repo
            .update_columns(
                "update_acceptance_points",
                id,
                vec![("acceptance_points", points.into())],
            )
            .await
    }

    /// Backdate registration, e.g. for imported records. Leaves `updated_at` alone.
    pub async fn update_created_at(&self, id: i64, created_at: DateTime<Utc>) -> Result<u64> {
        self.repo
            .update_columns_untouched(
                "update_created_at",
                id,
                vec![("created_at", created_at.into())],
            )
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<JobSeeker> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<JobSeeker> {
        self.repo.find_by_uuid(uuid).await
    }

    /// Every job seeker of the agent in phase-priority order
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<JobSeeker>> {
        let mut args = args![agent_id];
        let clause = format!("agent_id = $1 {}", priority_order(&mut args));
        self.repo
            .select_where("get_by_agent_id", &clause, args)
            .await
    }

    pub async fn get_by_agent_staff_id(&self, agent_staff_id: i64) -> Result<Vec<JobSeeker>> {
        self.repo
            .select_where(
                "get_by_agent_staff_id",
                "agent_staff_id = $1 ORDER BY id ASC",
                args![agent_staff_id],
            )
            .await
    }

    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<JobSeeker>> {
        self.repo.get_by_id_list(ids).await
    }

    /// Job seekers of the agent in any of `phases`. Empty input never reaches the store.
    pub async fn get_by_agent_id_and_phase_list(
        &self,
        agent_id: i64,
        phases: &[JobSeekerPhase],
    ) -> Result<Vec<JobSeeker>> {
        if phases.is_empty() {
            return Ok(Vec::new());
        }
        let codes = phases.iter().map(|phase| *phase as i16).collect::<Vec<_>>();
        let mut args = args![agent_id, codes];
        let clause = format!(
            "agent_id = $1 AND phase = ANY($2) {}",
            priority_order(&mut args)
        );
        self.repo
            .select_where("get_by_agent_id_and_phase_list", &clause, args)
            .await
    }

    /// Job seekers of the agent matching a free word.
    ///
    /// Numeric input matches the id or a dehyphenated phone number substring;
    /// other input matches full name, full furigana or the exact phone number.
    pub async fn get_by_agent_id_and_free_word(
        &self,
        agent_id: i64,
        free_word: &str,
    ) -> Result<Vec<JobSeeker>> {
        let word = FreeWord::parse(free_word);
        tracing::debug!(agent_id, free_word = ?word, "Searching job seekers");

        let mut args = Args::new();
        let scope = format!("agent_id = {}", args.bind(agent_id));
        let clause = Self::search_clause(scope, &word, &mut args);
        self.repo
            .select_where("get_by_agent_id_and_free_word", &clause, args)
            .await
    }

    /// Free-word search over the agent's own job seekers plus those of allied
    /// agents who opted in to matching and are not hidden to the agent
    pub async fn get_by_agent_id_and_alliance_and_free_word(
        &self,
        agent_id: i64,
        free_word: &str,
    ) -> Result<Vec<JobSeeker>> {
        let word = FreeWord::parse(free_word);
        tracing::debug!(agent_id, free_word = ?word, "Searching job seekers across alliances");

        let mut args = Args::new();
        let agent = args.bind(agent_id);
        let scope = format!(
            "(agent_id = {agent} OR (agent_id IN ({}) AND can_view_matching_job \
             AND id NOT IN ({})))",
            hierarchy::allied_agent_ids(&agent),
            hierarchy::job_seeker_ids_hidden_to_agent(&agent),
        );
        let clause = Self::search_clause(scope, &word, &mut args);
        self.repo
            .select_where("get_by_agent_id_and_alliance_and_free_word", &clause, args)
            .await
    }

    fn search_clause(scope: String, word: &FreeWord<'_>, args: &mut Args) -> String {
        let mut clause = scope;
        if let Some(condition) = FREE_WORD_TARGET.condition(word, args) {
            clause.push_str(" AND ");
            clause.push_str(&condition);
        }
        clause.push(' ');
        clause.push_str(&priority_order(args));
        clause
    }

    pub async fn count_by_agent_id(&self, agent_id: i64) -> Result<i64> {
        self.repo
            .count_where("count_by_agent_id", "agent_id = $1", args![agent_id])
            .await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentlink_store::{CallKind, MockRecordStore};

    fn seeker() -> JobSeeker {
        JobSeeker::new(
            1,
            "Tanaka".to_string(),
            "Taro".to_string(),
            "080-1234-5678".to_string(),
            "tanaka@example.com".to_string(),
        )
        .unwrap()
    }

    fn repo() -> (MockRecordStore, JobSeekerRepository<MockRecordStore>) {
        let store = MockRecordStore::new();
        (store.clone(), JobSeekerRepository::new(store))
    }

    #[test]
    fn test_insert_columns_match_insert_args() {
        assert_eq!(seeker().insert_args().len(), JobSeeker::INSERT_COLUMNS.len());
    }

    #[tokio::test]
    async fn test_create_assigns_id_uuid_and_timestamps() {
        let (store, repo) = repo();
        let mut record = seeker();

        let id = repo.create(&mut record).await.unwrap();

        assert_eq!(record.id, id);
        assert!(!record.uuid.is_nil());
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.last_call().unwrap().kind, CallKind::Insert);
    }

    #[tokio::test]
    async fn test_update_phase_touches_only_phase() {
        let (store, repo) = repo();

        repo.update_phase(5, JobSeekerPhase::Offered).await.unwrap();

        let call = store.last_call().unwrap();
        assert_eq!(
            call.sql,
            "UPDATE job_seekers SET phase = $2, updated_at = $3 WHERE id = $1"
        );
        assert_eq!(call.args.get(1), Some(&SqlValue::SmallInt(Some(4))));
    }

    #[tokio::test]
    async fn test_unassigning_staff_binds_null() {
        let (store, repo) = repo();

        repo.update_agent_staff_id(5, None).await.unwrap();

        let call = store.last_call().unwrap();
        assert_eq!(call.args.get(1), Some(&SqlValue::BigInt(None)));
    }

    #[tokio::test]
    async fn test_update_created_at_does_not_touch_updated_at() {
        let (store, repo) = repo();
        let backdated = DateTime::<Utc>::UNIX_EPOCH;

        repo.update_created_at(5, backdated).await.unwrap();

        let call = store.last_call().unwrap();
        assert_eq!(call.sql, "UPDATE job_seekers SET created_at = $2 WHERE id = $1");
        assert_eq!(call.op.to_string(), "JobSeekerRepository.update_created_at");
        assert_eq!(call.args.get(1), Some(&SqlValue::Timestamp(Some(backdated))));
    }

    #[tokio::test]
    async fn test_update_acceptance_points_is_labelled_correctly() {
        let (store, repo) = repo();

        repo.update_acceptance_points(5, "Strong communicator")
            .await
            .unwrap();

        let call = store.last_call().unwrap();
        assert_eq!(call.op.method, "update_acceptance_points");
        assert!(call.sql.starts_with("UPDATE job_seekers SET acceptance_points = $2"));
    }

    #[tokio::test]
    async fn test_full_update_writes_every_mutable_column() {
        let (store, repo) = repo();
        let mut record = seeker();
        record.phase = JobSeekerPhase::Offered;
        record.agreement = true;
        record.acceptance_points = "pts".to_string();

        repo.update(5, &record).await.unwrap();

        let call = store.last_call().unwrap();
        assert_eq!(
            call.sql,
            "UPDATE job_seekers SET agent_id = $2, agent_staff_id = $3, last_name = $4, \
             first_name = $5, last_furigana = $6, first_furigana = $7, gender = $8, \
             birthday = $9, phone_number = $10, email = $11, phase = $12, agreement = $13, \
             can_view_matching_job = $14, interview_date = $15, acceptance_points = $16, \
             last_watched_at = $17, updated_at = $18 WHERE id = $1"
        );
        assert_eq!(
            call.args.get(11),
            Some(&SqlValue::SmallInt(Some(JobSeekerPhase::Offered as i16)))
        );
        assert_eq!(call.args.get(12), Some(&SqlValue::Bool(Some(true))));
        assert_eq!(call.args.get(15), Some(&SqlValue::Text(Some("pts".to_string()))));
    }

    #[tokio::test]
    async fn test_get_by_agent_id_orders_by_phase_priority() {
        let (store, repo) = repo();

        repo.get_by_agent_id(1).await.unwrap();

        let call = store.last_call().unwrap();
        assert!(call.sql.ends_with(
            "WHERE agent_id = $1 ORDER BY array_position($2::smallint[], phase) ASC, \
             created_at DESC, id DESC"
        ));
        assert_eq!(
            call.args.get(1),
            Some(&SqlValue::SmallIntArray(JobSeekerPhase::priority_codes()))
        );
    }

    #[tokio::test]
    async fn test_empty_phase_list_never_reaches_store() {
        let (store, repo) = repo();

        let rows = repo.get_by_agent_id_and_phase_list(1, &[]).await.unwrap();

        assert!(rows.is_empty());
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_phase_list_binds_codes_as_array() {
        let (store, repo) = repo();

        repo.get_by_agent_id_and_phase_list(
            1,
            &[JobSeekerPhase::Selecting, JobSeekerPhase::Offered],
        )
        .await
        .unwrap();

        let call = store.last_call().unwrap();
        assert!(call.sql.contains("agent_id = $1 AND phase = ANY($2)"));
        assert_eq!(call.args.get(1), Some(&SqlValue::SmallIntArray(vec![3, 4])));
    }

    #[tokio::test]
    async fn test_numeric_free_word_searches_id_and_phone() {
        let (store, repo) = repo();

        repo.get_by_agent_id_and_free_word(1, "080").await.unwrap();

        let call = store.last_call().unwrap();
        assert!(call
            .sql
            .contains("agent_id = $1 AND (id = $2 OR REPLACE(phone_number, '-', '') LIKE $3)"));
        assert_eq!(call.args.get(2), Some(&SqlValue::Text(Some("%080%".to_string()))));
    }

    #[tokio::test]
    async fn test_text_free_word_searches_names() {
        let (store, repo) = repo();

        repo.get_by_agent_id_and_free_word(1, "Tanaka").await.unwrap();

        let call = store.last_call().unwrap();
        assert!(call.sql.contains("CONCAT(last_name, first_name) LIKE $2"));
        assert!(call.sql.contains("phone_number = $3"));
        assert!(call.sql.contains("array_position($4::smallint[], phase)"));
    }

    #[tokio::test]
    async fn test_alliance_search_includes_opted_in_allies_only() {
        let (store, repo) = repo();

        repo.get_by_agent_id_and_alliance_and_free_word(1, "")
            .await
            .unwrap();

        let call = store.last_call().unwrap();
        assert!(call.sql.contains("(agent_id = $1 OR (agent_id IN (SELECT CASE"));
        assert!(call.sql.contains("AND can_view_matching_job AND id NOT IN (\
                                   SELECT job_seeker_id FROM job_seeker_hide_to_agents \
                                   WHERE agent_id = $1)"));
        assert_eq!(call.args.len(), 2);
    }

    #[tokio::test]
    async fn test_count_by_agent_id() {
        let (store, repo) = repo();
        store.set_count(4);

        assert_eq!(repo.count_by_agent_id(1).await.unwrap(), 4);
        assert_eq!(
            store.last_call().unwrap().sql,
            "SELECT COUNT(*) FROM job_seekers WHERE agent_id = $1"
        );
    }
}

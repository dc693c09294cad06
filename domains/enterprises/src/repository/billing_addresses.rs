//! Billing address repository

use crate::domain::entities::{BillingAddress, ContractPhase};
use chrono::{DateTime, Utc};
use talentlink_common::new_uuid;
use talentlink_store::{
    args, hierarchy, Args, Entity, EntityRepository, ExternalId, MutableEntity, PgRecordStore,
    RecordStore, Result, SqlValue,
};
use uuid::Uuid;

impl Entity for BillingAddress {
    const TABLE: &'static str = "billing_addresses";
    const LABEL: &'static str = "BillingAddressRepository";
    const COLUMNS: &'static str = "id, uuid, enterprise_id, agent_staff_id, contract_phase, \
                                   contract_date, payment_policy, company_name, address, \
                                   how_to_recommend, title, created_at, updated_at";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "uuid",
        "enterprise_id",
        "agent_staff_id",
        "contract_phase",
        "contract_date",
        "payment_policy",
        "company_name",
        "address",
        "how_to_recommend",
        "title",
        "created_at",
        "updated_at",
    ];

    fn insert_args(&self) -> Args {
        args![
            self.uuid,
            self.enterprise_id,
            self.agent_staff_id,
            self.contract_phase,
            self.contract_date,
            &self.payment_policy,
            &self.company_name,
            &self.address,
            &self.how_to_recommend,
            &self.title,
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

impl ExternalId for BillingAddress {}

impl MutableEntity for BillingAddress {
    fn mutable_columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("enterprise_id", self.enterprise_id.into()),
            ("agent_staff_id", self.agent_staff_id.into()),
            ("contract_phase", self.contract_phase.into()),
            ("contract_date", self.contract_date.into()),
            ("payment_policy", (&self.payment_policy).into()),
            ("company_name", (&self.company_name).into()),
            ("address", (&self.address).into()),
            ("how_to_recommend", (&self.how_to_recommend).into()),
            ("title", (&self.title).into()),
        ]
    }
}

#[derive(Clone)]
pub struct BillingAddressRepository<S = PgRecordStore> {
    repo: EntityRepository<BillingAddress, S>,
}

impl<S: RecordStore> BillingAddressRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: EntityRepository::new(store),
        }
    }

    /// Create a new billing address
    pub async fn create(&self, address: &mut BillingAddress) -> Result<i64> {
        self.repo.create(address).await
    }

    /// Update address and contract terms (the phase is changed separately)
    pub async fn update(&self, id: i64, address: &BillingAddress) -> Result<u64> {
        self.repo.update(id, address).await
    }

    pub async fn update_contract_phase(&self, id: i64, phase: ContractPhase) -> Result<u64> {
        self.repo
            .update_columns(
                "update_contract_phase",
                id,
                vec![("contract_phase", phase.into())],
            )
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<BillingAddress> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_by_uuid(&self, uuid: Uuid) -> Result<BillingAddress> {
        self.repo.find_by_uuid(uuid).await
    }

    pub async fn get_by_enterprise_id(&self, enterprise_id: i64) -> Result<Vec<BillingAddress>> {
        self.repo
            .select_where(
                "get_by_enterprise_id",
                "enterprise_id = $1 ORDER BY id ASC",
                args![enterprise_id],
            )
            .await
    }

    /// Billing addresses of every enterprise the agent's staff manage
    pub async fn get_by_agent_id(&self, agent_id: i64) -> Result<Vec<BillingAddress>> {
        let clause = format!(
            "id IN ({}) ORDER BY id ASC",
            hierarchy::billing_address_ids_of_agent("$1")
        );
        self.repo
            .select_where("get_by_agent_id", &clause, args![agent_id])
            .await
    }

    pub async fn get_by_id_list(&self, ids: &[i64]) -> Result<Vec<BillingAddress>> {
        self.repo.get_by_id_list(ids).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64> {
        self.repo.delete_by_id(id).await
    }
}

//! Contract operations for the Dashboard.

use jiff::civil::Date;
use log::debug;
use tokio::task;

use super::Dashboard;
use crate::{
    db::Database,
    engine::StatusReport,
    error::{CockpitError, Result},
    models::{Contract, ContractFilter},
    params::{ContractId, CreateContract, DeleteContract, ListContracts, UpdateContract},
};

impl Dashboard {
    /// Validates and stores a new contract.
    pub async fn create_contract(&self, params: &CreateContract) -> Result<Contract> {
        let draft = params.validate()?;
        let db_path = self.db_path.clone();

        let contract = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_contract(&draft)
        })
        .await
        .map_err(CockpitError::join)??;

        debug!("Created contract {} ({})", contract.id, contract.name);
        Ok(contract)
    }

    /// Retrieves a contract by its id.
    pub async fn get_contract(&self, params: &ContractId) -> Result<Option<Contract>> {
        let id = params.parse()?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_contract(id)
        })
        .await
        .map_err(CockpitError::join)?
    }

    /// Lists one page of contracts.
    pub async fn list_contracts(&self, params: &ListContracts) -> Result<Vec<Contract>> {
        let filter = ContractFilter::from(params);
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_contracts(&filter)
        })
        .await
        .map_err(CockpitError::join)?
    }

    /// Every stored contract.
    pub async fn list_all_contracts(&self) -> Result<Vec<Contract>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_all_contracts()
        })
        .await
        .map_err(CockpitError::join)?
    }

    /// Applies a partial update. The merged record must pass the same
    /// validation as a new contract.
    ///
    /// # Errors
    ///
    /// * `CockpitError::InvalidInput` - no field set, or the merged record is
    ///   invalid
    /// * `CockpitError::ContractNotFound` - unknown id
    pub async fn update_contract(&self, params: &UpdateContract) -> Result<Contract> {
        let id = crate::params::parse_contract_id(&params.id)?;
        if !params.has_changes() {
            return Err(CockpitError::invalid_input("update").with_reason("no fields to update"));
        }
        params.validated_status()?;
        let params = params.clone();
        let db_path = self.db_path.clone();

        let contract = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_contract(id, &params)
        })
        .await
        .map_err(CockpitError::join)??;

        debug!("Updated contract {}", contract.id);
        Ok(contract)
    }

    /// Permanently deletes a contract and returns it.
    ///
    /// # Errors
    ///
    /// * `CockpitError::InvalidInput` - `confirmed` is false
    /// * `CockpitError::ContractNotFound` - unknown id
    pub async fn delete_contract(&self, params: &DeleteContract) -> Result<Contract> {
        let id = crate::params::parse_contract_id(&params.id)?;
        if !params.confirmed {
            return Err(CockpitError::invalid_input("confirmed")
                .with_reason("deletion is permanent and must be explicitly confirmed"));
        }
        let db_path = self.db_path.clone();

        let contract = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_contract(id)
        })
        .await
        .map_err(CockpitError::join)??;

        debug!("Deleted contract {} ({})", contract.id, contract.name);
        Ok(contract)
    }

    /// Derived status of one contract on `today`.
    pub async fn contract_status(&self, params: &ContractId, today: Date) -> Result<StatusReport> {
        self.require_contract(params)
            .await
            .map(|contract| contract.status_report(today))
    }

    /// Like [`Dashboard::get_contract`], but an unknown id is an error.
    pub async fn require_contract(&self, params: &ContractId) -> Result<Contract> {
        self.get_contract(params)
            .await?
            .ok_or_else(|| CockpitError::ContractNotFound {
                id: params.id.trim().to_string(),
            })
    }
}

//! Contract CRUD operations and queries.

use std::str::FromStr;

use jiff::{Timestamp, civil::Date};
use rusqlite::{OptionalExtension, Row, TransactionBehavior, params, types::Type};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{CockpitError, DatabaseResultExt, Result},
    models::{Contract, ContractFilter, DEFAULT_CONTRACT_STATUS},
    params::{ContractDraft, UpdateContract},
};

const CONTRACT_COLUMNS: &str = "id, name, supplier, amount, start_date, end_date, notice_period_days, sharepoint_file_url, status, created_at, updated_at";
const INSERT_CONTRACT_SQL: &str = "INSERT INTO contracts (id, name, supplier, amount, start_date, end_date, notice_period_days, sharepoint_file_url, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_CONTRACT_SQL: &str = "UPDATE contracts SET name = ?1, supplier = ?2, amount = ?3, start_date = ?4, end_date = ?5, notice_period_days = ?6, sharepoint_file_url = ?7, status = ?8, updated_at = ?9 WHERE id = ?10";
const DELETE_CONTRACT_SQL: &str = "DELETE FROM contracts WHERE id = ?1";

impl super::Database {
    /// Inserts a validated contract with a fresh id and the default status.
    pub fn create_contract(&mut self, draft: &ContractDraft) -> Result<Contract> {
        let now = Timestamp::now();
        let contract = Contract {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            supplier: draft.supplier.clone(),
            amount: draft.amount,
            start_date: draft.start_date,
            end_date: draft.end_date,
            notice_period_days: draft.notice_period_days,
            sharepoint_file_url: draft.sharepoint_file_url.clone(),
            status: DEFAULT_CONTRACT_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        };

        let now_str = now.to_string();
        self.connection
            .execute(
                INSERT_CONTRACT_SQL,
                params![
                    contract.id.to_string(),
                    &contract.name,
                    &contract.supplier,
                    contract.amount.to_string(),
                    contract.start_date.to_string(),
                    contract.end_date.to_string(),
                    contract.notice_period_days,
                    contract.sharepoint_file_url.as_deref(),
                    &contract.status,
                    &now_str,
                    &now_str,
                ],
            )
            .db_context("Failed to insert contract")?;

        Ok(contract)
    }

    /// Retrieves a contract by its id.
    pub fn get_contract(&self, id: Uuid) -> Result<Option<Contract>> {
        let query = format!("SELECT {CONTRACT_COLUMNS} FROM contracts WHERE id = ?1");
        self.connection
            .query_row(&query, params![id.to_string()], contract_from_row)
            .optional()
            .db_context("Failed to query contract")
    }

    /// Lists contracts ordered by end date, then name.
    pub fn list_contracts(&self, filter: &ContractFilter) -> Result<Vec<Contract>> {
        let mut query = format!("SELECT {CONTRACT_COLUMNS} FROM contracts");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref status) = filter.status {
            query.push_str(" WHERE status = ?");
            params_vec.push(Box::new(status.clone()));
        }

        // SQLite treats a negative LIMIT as "no limit"
        query.push_str(" ORDER BY end_date ASC, name ASC LIMIT ? OFFSET ?");
        params_vec.push(Box::new(i64::try_from(filter.limit).unwrap_or(-1)));
        params_vec.push(Box::new(i64::try_from(filter.skip).unwrap_or(i64::MAX)));

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let contracts = stmt
            .query_map(&params_refs[..], contract_from_row)
            .db_context("Failed to query contracts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read contract row");
        contracts
    }

    /// Every stored contract, in listing order. This is the contract feed the
    /// timeline is built from.
    pub fn list_all_contracts(&self) -> Result<Vec<Contract>> {
        self.list_contracts(&ContractFilter::all())
    }

    /// Applies a partial update to a contract and returns the stored record.
    ///
    /// The read, the merge with `changes`, the validation and the write run in
    /// one immediate transaction, so concurrent writers cannot interleave with
    /// it and a field changed elsewhere is never written back stale.
    pub fn update_contract(&mut self, id: Uuid, changes: &UpdateContract) -> Result<Contract> {
        let status = changes.validated_status()?;
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let query = format!("SELECT {CONTRACT_COLUMNS} FROM contracts WHERE id = ?1");
        let current = tx
            .query_row(&query, params![id.to_string()], contract_from_row)
            .optional()
            .db_context("Failed to query contract")?
            .ok_or_else(|| CockpitError::ContractNotFound { id: id.to_string() })?;

        let draft = changes.apply_to(&current)?;

        tx.execute(
            UPDATE_CONTRACT_SQL,
            params![
                &draft.name,
                &draft.supplier,
                draft.amount.to_string(),
                draft.start_date.to_string(),
                draft.end_date.to_string(),
                draft.notice_period_days,
                draft.sharepoint_file_url.as_deref(),
                status.as_deref().unwrap_or(&current.status),
                Timestamp::now().to_string(),
                id.to_string(),
            ],
        )
        .db_context("Failed to update contract")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_contract(id)?
            .ok_or_else(|| CockpitError::ContractNotFound { id: id.to_string() })
    }

    /// Deletes a contract and returns the record as it was.
    pub fn delete_contract(&mut self, id: Uuid) -> Result<Contract> {
        let contract = self
            .get_contract(id)?
            .ok_or_else(|| CockpitError::ContractNotFound { id: id.to_string() })?;

        self.connection
            .execute(DELETE_CONTRACT_SQL, params![id.to_string()])
            .db_context("Failed to delete contract")?;

        Ok(contract)
    }
}

fn contract_from_row(row: &Row<'_>) -> rusqlite::Result<Contract> {
    Ok(Contract {
        id: parse_column(row, 0, |s| Uuid::parse_str(s))?,
        name: row.get(1)?,
        supplier: row.get(2)?,
        amount: parse_column(row, 3, Decimal::from_str)?,
        start_date: parse_column(row, 4, Date::from_str)?,
        end_date: parse_column(row, 5, Date::from_str)?,
        notice_period_days: row.get(6)?,
        sharepoint_file_url: row.get(7)?,
        status: row.get(8)?,
        created_at: parse_column(row, 9, Timestamp::from_str)?,
        updated_at: parse_column(row, 10, Timestamp::from_str)?,
    })
}

/// Reads a text column and parses it, reporting parse failures as column
/// conversion errors.
fn parse_column<T, E, F>(row: &Row<'_>, idx: usize, parse: F) -> rusqlite::Result<T>
where
    F: FnOnce(&str) -> std::result::Result<T, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    let text: String = row.get(idx)?;
    parse(&text).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

//! Parameter structures for dashboard operations
//!
//! These structures are shared by every interface (CLI, MCP) without
//! framework-specific derives beyond serde and optional JSON schema
//! generation. They carry raw user input: dates and amounts arrive as
//! strings and are parsed and validated here, which makes this module the
//! contract-creation validation layer. Nothing past it re-checks the
//! invariants it enforces.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  (validated)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these types (`#[serde(transparent)]` for MCP,
//! `From<Args>` for clap) and hand them to the
//! [`Dashboard`](crate::Dashboard).

use std::str::FromStr;

use jiff::civil::Date;
use rust_decimal::Decimal;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{CockpitError, Result},
    models::{Contract, ContractFilter, DEFAULT_LIST_LIMIT},
};

/// Longest accepted contract name or supplier.
pub const MAX_NAME_LEN: usize = 255;

/// Parameters for operations addressing one contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ContractId {
    /// UUID of the contract
    pub id: String,
}

impl ContractId {
    pub fn parse(&self) -> Result<Uuid> {
        parse_contract_id(&self.id)
    }
}

/// Parameters for creating a contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateContract {
    /// Contract name (required, 1-255 characters)
    pub name: String,
    /// Supplier name (required, 1-255 characters)
    pub supplier: String,
    /// Non-negative decimal amount, e.g. "1200.00"
    pub amount: String,
    /// First day of the contract, YYYY-MM-DD
    pub start_date: String,
    /// Last day of the contract, YYYY-MM-DD; must be after start_date
    pub end_date: String,
    /// Notice period in days (>= 0)
    pub notice_period_days: i64,
    /// Optional link to the signed document
    pub sharepoint_file_url: Option<String>,
}

impl CreateContract {
    /// Parse and validate every field.
    ///
    /// # Errors
    ///
    /// * `CockpitError::InvalidInput` - empty or overlong name/supplier,
    ///   malformed or negative amount, malformed dates, `end_date` not after
    ///   `start_date`, negative notice period
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cockpit_core::params::CreateContract;
    ///
    /// let params = CreateContract {
    ///     name: "Firewall support".to_string(),
    ///     supplier: "Acme".to_string(),
    ///     amount: "1200.00".to_string(),
    ///     start_date: "2025-01-01".to_string(),
    ///     end_date: "2025-12-31".to_string(),
    ///     notice_period_days: 90,
    ///     sharepoint_file_url: None,
    /// };
    /// let draft = params.validate()?;
    /// assert_eq!(draft.notice_period_days, 90);
    ///
    /// let backwards = CreateContract {
    ///     end_date: "2024-12-31".to_string(),
    ///     ..params
    /// };
    /// assert!(backwards.validate().is_err());
    /// # cockpit_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<ContractDraft> {
        ContractDraft {
            name: self.name.trim().to_string(),
            supplier: self.supplier.trim().to_string(),
            amount: parse_amount(&self.amount)?,
            start_date: parse_date("start_date", &self.start_date)?,
            end_date: parse_date("end_date", &self.end_date)?,
            notice_period_days: parse_notice_days(self.notice_period_days)?,
            sharepoint_file_url: normalize_url(self.sharepoint_file_url.as_deref()),
        }
        .checked()
    }
}

/// Parameters for a partial contract update. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateContract {
    /// UUID of the contract to update
    pub id: String,
    pub name: Option<String>,
    pub supplier: Option<String>,
    /// Non-negative decimal amount
    pub amount: Option<String>,
    /// YYYY-MM-DD
    pub start_date: Option<String>,
    /// YYYY-MM-DD
    pub end_date: Option<String>,
    pub notice_period_days: Option<i64>,
    /// New document link; an empty string removes it
    pub sharepoint_file_url: Option<String>,
    /// Free-text administrative status
    pub status: Option<String>,
}

impl UpdateContract {
    /// Whether any field besides the id is set.
    pub fn has_changes(&self) -> bool {
        self.name.is_some()
            || self.supplier.is_some()
            || self.amount.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.notice_period_days.is_some()
            || self.sharepoint_file_url.is_some()
            || self.status.is_some()
    }

    /// Merge the update over `current` and validate the result with the same
    /// rules as creation.
    pub fn apply_to(&self, current: &Contract) -> Result<ContractDraft> {
        let mut draft = ContractDraft::from(current);
        if let Some(name) = &self.name {
            draft.name = name.trim().to_string();
        }
        if let Some(supplier) = &self.supplier {
            draft.supplier = supplier.trim().to_string();
        }
        if let Some(amount) = &self.amount {
            draft.amount = parse_amount(amount)?;
        }
        if let Some(start) = &self.start_date {
            draft.start_date = parse_date("start_date", start)?;
        }
        if let Some(end) = &self.end_date {
            draft.end_date = parse_date("end_date", end)?;
        }
        if let Some(days) = self.notice_period_days {
            draft.notice_period_days = parse_notice_days(days)?;
        }
        if let Some(url) = &self.sharepoint_file_url {
            draft.sharepoint_file_url = normalize_url(Some(url));
        }
        draft.checked()
    }

    /// The new free-text status, if set. Must not be blank.
    pub fn validated_status(&self) -> Result<Option<String>> {
        match self.status.as_deref().map(str::trim) {
            Some("") => Err(CockpitError::invalid_input("status").with_reason("must not be empty")),
            other => Ok(other.map(String::from)),
        }
    }

    /// Human-readable list of the fields this update touches.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to '{}'", name.trim()));
        }
        if let Some(supplier) = &self.supplier {
            changes.push(format!("Supplier set to '{}'", supplier.trim()));
        }
        if let Some(amount) = &self.amount {
            changes.push(format!("Amount set to {}", amount.trim()));
        }
        if let Some(start) = &self.start_date {
            changes.push(format!("Start date set to {}", start.trim()));
        }
        if let Some(end) = &self.end_date {
            changes.push(format!("End date set to {}", end.trim()));
        }
        if let Some(days) = self.notice_period_days {
            changes.push(format!("Notice period set to {days} days"));
        }
        if let Some(url) = &self.sharepoint_file_url {
            if url.trim().is_empty() {
                changes.push("Removed document link".to_string());
            } else {
                changes.push("Updated document link".to_string());
            }
        }
        if let Some(status) = &self.status {
            changes.push(format!("Status set to '{}'", status.trim()));
        }
        changes
    }
}

/// Parameters for listing contracts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListContracts {
    /// Number of contracts to skip
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of contracts to return (default 100)
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Only contracts whose free-text status equals this value
    pub status: Option<String>,
}

fn default_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for ListContracts {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
            status: None,
        }
    }
}

impl From<&ListContracts> for ContractFilter {
    fn from(params: &ListContracts) -> Self {
        ContractFilter {
            status: params.status.clone(),
            skip: params.skip,
            limit: params.limit,
        }
    }
}

/// Parameters for permanently deleting a contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteContract {
    /// UUID of the contract to delete
    pub id: String,
    /// Must be true; guards against accidental deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for operations addressing one ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TicketId {
    /// Helpdesk ticket number
    pub id: u64,
}

/// Parameters for the closed-ticket histogram.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TicketStatsQuery {
    /// First day, YYYY-MM-DD (default: 30 days before end_date)
    pub start_date: Option<String>,
    /// Last day, YYYY-MM-DD (default: today)
    pub end_date: Option<String>,
    /// Count tickets carrying the project tag too (excluded by default)
    #[serde(default)]
    pub include_projects: bool,
}

impl TicketStatsQuery {
    /// Parsed `(start, end)` bounds, either may be absent.
    pub fn bounds(&self) -> Result<(Option<Date>, Option<Date>)> {
        let start = self
            .start_date
            .as_deref()
            .map(|s| parse_date("start_date", s))
            .transpose()?;
        let end = self
            .end_date
            .as_deref()
            .map(|s| parse_date("end_date", s))
            .transpose()?;
        Ok((start, end))
    }
}

/// Parameters for building the timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TimelineOptions {
    /// Assign non-overlapping stacking lanes instead of leaving every item in
    /// group 0
    #[serde(default)]
    pub stack: bool,
}

/// Validated contract fields, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractDraft {
    pub name: String,
    pub supplier: String,
    pub amount: Decimal,
    pub start_date: Date,
    pub end_date: Date,
    pub notice_period_days: u32,
    pub sharepoint_file_url: Option<String>,
}

impl ContractDraft {
    /// Cross-field and length checks shared by create and update.
    fn checked(self) -> Result<Self> {
        validate_label("name", &self.name)?;
        validate_label("supplier", &self.supplier)?;
        if self.end_date <= self.start_date {
            return Err(CockpitError::invalid_input("end_date").with_reason(format!(
                "{} must be after start date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(self)
    }
}

impl From<&Contract> for ContractDraft {
    fn from(contract: &Contract) -> Self {
        ContractDraft {
            name: contract.name.clone(),
            supplier: contract.supplier.clone(),
            amount: contract.amount,
            start_date: contract.start_date,
            end_date: contract.end_date,
            notice_period_days: contract.notice_period_days,
            sharepoint_file_url: contract.sharepoint_file_url.clone(),
        }
    }
}

/// Parses a contract UUID.
pub fn parse_contract_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id.trim())
        .map_err(|e| CockpitError::invalid_input("id").with_reason(format!("'{id}': {e}")))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        CockpitError::invalid_input(field).with_reason(format!("'{value}' is not a YYYY-MM-DD date: {e}"))
    })
}

fn parse_amount(value: &str) -> Result<Decimal> {
    let amount = Decimal::from_str(value.trim()).map_err(|e| {
        CockpitError::invalid_input("amount").with_reason(format!("'{value}' is not a decimal: {e}"))
    })?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CockpitError::invalid_input("amount").with_reason("must not be negative"));
    }
    Ok(amount)
}

fn parse_notice_days(days: i64) -> Result<u32> {
    u32::try_from(days).map_err(|_| {
        CockpitError::invalid_input("notice_period_days")
            .with_reason(format!("{days} is not a non-negative number of days"))
    })
}

fn validate_label(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CockpitError::invalid_input(field).with_reason("must not be empty"));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(CockpitError::invalid_input(field)
            .with_reason(format!("must be at most {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

fn normalize_url(url: Option<&str>) -> Option<String> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(String::from)
}

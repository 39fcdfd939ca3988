//! Result wrapper types for displaying operation outcomes.
//!
//! Wraps the results of create, update and delete operations with consistent
//! messaging and resource display.

use std::fmt;

use super::models::ContractView;
use crate::models::Contract;

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<ContractView> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created contract with ID: {}", self.resource.contract.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Tracks the list of changes so the user sees what was modified.
///
/// # Examples
///
/// ```rust
/// use cockpit_core::{
///     display::{ContractView, UpdateResult},
///     models::Contract,
/// };
/// use jiff::{Timestamp, civil::date};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let contract = Contract {
///     id: Uuid::nil(),
///     name: "Licences".to_string(),
///     supplier: "Contoso".to_string(),
///     amount: Decimal::ZERO,
///     start_date: date(2025, 1, 1),
///     end_date: date(2025, 12, 31),
///     notice_period_days: 30,
///     sharepoint_file_url: None,
///     status: "active".to_string(),
///     created_at: Timestamp::UNIX_EPOCH,
///     updated_at: Timestamp::UNIX_EPOCH,
/// };
///
/// let view = ContractView::new(contract, date(2025, 6, 1));
/// let result = UpdateResult::with_changes(view, vec!["Notice period set to 30 days".to_string()]);
/// assert!(result.to_string().contains("Changes made:"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<ContractView> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated contract with ID: {}", self.resource.contract.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Contract> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted contract '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

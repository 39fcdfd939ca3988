//! Contract model definition and its date-derived properties.

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContractStatus, TimelineColor};
use crate::engine::status::{self, StatusReport};

/// Default free-text status assigned to new contracts.
pub const DEFAULT_CONTRACT_STATUS: &str = "active";

/// A supplier contract as persisted by the contract store.
///
/// Invariants enforced at creation time by the store: `end_date > start_date`,
/// `amount >= 0`, non-empty `name` and `supplier`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    /// Unique identifier of the contract
    pub id: Uuid,

    /// Human-readable contract name
    pub name: String,

    /// Supplier party
    pub supplier: String,

    /// Contract amount
    pub amount: Decimal,

    /// First day of the contract
    pub start_date: Date,

    /// Last day of the contract
    pub end_date: Date,

    /// Length of the notice window before `end_date`, in days
    pub notice_period_days: u32,

    /// Link to the signed document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharepoint_file_url: Option<String>,

    /// Free-text status set by an administrator, independent of
    /// [`Contract::computed_status`]
    pub status: String,

    /// Timestamp when the contract was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the contract was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Contract {
    /// First day of the notice window.
    pub fn notice_start_date(&self) -> Date {
        status::notice_start_date(self.end_date, self.notice_period_days)
    }

    /// Signed number of days from `today` to the end date. Negative once expired.
    pub fn days_until_end(&self, today: Date) -> i64 {
        status::days_until(self.end_date, today)
    }

    pub fn is_expired(&self, today: Date) -> bool {
        status::is_expired(self.end_date, today)
    }

    pub fn is_in_notice_period(&self, today: Date) -> bool {
        status::is_in_notice_period(self.end_date, self.notice_period_days, today)
    }

    pub fn computed_status(&self, today: Date) -> ContractStatus {
        self.status_report(today).status
    }

    pub fn timeline_color(&self, today: Date) -> TimelineColor {
        self.status_report(today).color
    }

    /// All derived properties at once.
    pub fn status_report(&self, today: Date) -> StatusReport {
        status::derive_status(self, today)
    }
}

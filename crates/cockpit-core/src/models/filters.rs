//! Filter types for querying contracts and tickets.

use super::StatsRange;

/// Default page size when listing contracts.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Filter options for listing contracts.
#[derive(Debug, Clone)]
pub struct ContractFilter {
    /// Exact match on the free-text status
    pub status: Option<String>,

    /// Number of contracts to skip
    pub skip: usize,

    /// Maximum number of contracts to return
    pub limit: usize,
}

impl Default for ContractFilter {
    fn default() -> Self {
        Self {
            status: None,
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ContractFilter {
    /// A filter that returns every contract.
    pub fn all() -> Self {
        Self {
            limit: usize::MAX,
            ..Default::default()
        }
    }
}

/// Query for closed tickets, as handed to a
/// [`TicketSource`](crate::tickets::TicketSource).
#[derive(Debug, Clone)]
pub struct ClosedTicketQuery {
    /// Inclusive range on the UTC closure date
    pub range: StatsRange,

    /// Tickets carrying this tag are left out
    pub exclude_tag: Option<String>,
}

//! Async facade over the contract store, the ticket source and the engines.
//!
//! [`Dashboard`] is what the CLI and MCP server talk to. It never holds a
//! database connection: each operation opens the store on a blocking task,
//! does its work and drops it, so a `Dashboard` is cheap to share.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │  Store, tickets │
//! │ (display-ready  │───▶│ (contract_ops,  │───▶│  and engines    │
//! │  wrappers)      │    │  view_ops)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! "Today" is always an argument. Callers pick the reference day once per
//! request and every derived value in that response agrees on it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cockpit_core::{DashboardBuilder, params::{CreateContract, TimelineOptions}};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = DashboardBuilder::new()
//!     .with_database_path(Some("/tmp/cockpit.db"))
//!     .with_ticket_file(Some("/tmp/tickets.json"))
//!     .build()
//!     .await?;
//!
//! dashboard
//!     .create_contract(&CreateContract {
//!         name: "Firewall support".to_string(),
//!         supplier: "Acme".to_string(),
//!         amount: "1200.00".to_string(),
//!         start_date: "2025-01-01".to_string(),
//!         end_date: "2025-12-31".to_string(),
//!         notice_period_days: 90,
//!         sharepoint_file_url: None,
//!     })
//!     .await?;
//!
//! let items = dashboard
//!     .timeline(&TimelineOptions { stack: true }, date(2025, 6, 1))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

pub mod builder;
pub mod contract_ops;
pub mod handlers;
pub mod view_ops;

#[cfg(test)]
mod tests;

pub use builder::DashboardBuilder;

use crate::tickets::TicketSource;

/// Tag marking project tickets unless configured otherwise.
pub const DEFAULT_PROJECT_TAG: &str = "#Projet";

/// Main dashboard interface.
#[derive(Clone)]
pub struct Dashboard {
    pub(crate) db_path: PathBuf,
    pub(crate) tickets: Option<Arc<dyn TicketSource>>,
    pub(crate) project_tag: String,
}

impl Dashboard {
    pub(crate) fn new(
        db_path: PathBuf,
        tickets: Option<Arc<dyn TicketSource>>,
        project_tag: String,
    ) -> Self {
        Self {
            db_path,
            tickets,
            project_tag,
        }
    }

    /// Location of the contract store.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Tag identifying project tickets.
    pub fn project_tag(&self) -> &str {
        &self.project_tag
    }

    /// Whether a ticket source is configured.
    pub fn has_ticket_source(&self) -> bool {
        self.tickets.is_some()
    }
}

//! Core library for the Cockpit IT dashboard.
//!
//! Turns supplier contracts and helpdesk tickets into dashboard data: the
//! lifecycle status of each contract, a shared timeline of contract deadlines
//! and project tickets, and a daily histogram of closed tickets.
//!
//! - [`engine`]: the pure computations. They take "today" as an argument and
//!   never fail.
//! - [`db`]: the SQLite contract store.
//! - [`tickets`]: the helpdesk collaborator ([`TicketSource`]) and its JSON
//!   export implementation.
//! - [`csrf`]: the single-use state token store used by the SSO handshake.
//! - [`dashboard`]: the async facade the CLI and MCP server call.
//! - [`display`]: markdown rendering of results.
//!
//! # Quick Start
//!
//! ```rust
//! use cockpit_core::{
//!     DashboardBuilder,
//!     models::ContractStatus,
//!     params::{ContractId, CreateContract},
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = DashboardBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let contract = dashboard
//!     .create_contract(&CreateContract {
//!         name: "Firewall support".to_string(),
//!         supplier: "Acme".to_string(),
//!         amount: "1200.00".to_string(),
//!         start_date: "2024-07-01".to_string(),
//!         end_date: "2025-06-30".to_string(),
//!         notice_period_days: 60,
//!         sharepoint_file_url: None,
//!     })
//!     .await?;
//!
//! let report = dashboard
//!     .contract_status(&ContractId { id: contract.id.to_string() }, date(2025, 6, 15))
//!     .await?;
//! assert_eq!(report.status, ContractStatus::InNotice);
//! # Ok(())
//! # }
//! ```

pub mod csrf;
pub mod dashboard;
pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod tickets;

pub use csrf::{CsrfGuard, MemoryStateStore, StateStore};
pub use dashboard::{Dashboard, DashboardBuilder};
pub use db::Database;
pub use display::{ContractView, Contracts, CreateResult, DeleteResult, Tickets, TimelineView, UpdateResult};
pub use engine::{StatusReport, aggregate_daily_counts, build_timeline, derive_status, stack_items};
pub use error::{CockpitError, Result};
pub use models::{
    Contract, ContractStatus, DailyCount, StatsRange, Ticket, TicketStats, TimelineColor,
    TimelineItem, TimelineItemType,
};
pub use tickets::{TicketFile, TicketSource};

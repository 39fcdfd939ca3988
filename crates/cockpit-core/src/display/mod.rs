//! Markdown presentation of dashboard results.
//!
//! Domain models get direct `Display` implementations; collections and
//! operation outcomes go through newtype wrappers. Everything renders
//! markdown, which the CLI pipes through its terminal renderer and the MCP
//! server returns as text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Contract, ...) │───▶│ (ContractView,  │───▶│ (Terminal/MCP)  │
//! │                 │    │  Contracts ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Contracts`], [`Tickets`], [`TimelineView`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`datetime`]: [`LocalDateTime`], [`TicketTime`]
//! - [`models`]: [`ContractView`] and the model `Display` impls

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Contracts, Tickets, TimelineView};
pub use datetime::{LocalDateTime, TicketTime};
pub use models::ContractView;
pub use results::{CreateResult, DeleteResult, UpdateResult};

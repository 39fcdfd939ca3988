//! Data models for contracts, tickets, timeline items and ticket statistics.
//!
//! Contracts and tickets are records owned by their external stores; this
//! crate only reads them and derives values from them. Timeline items and
//! daily counts are transient outputs built fresh per request. Display
//! implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use cockpit_core::models::{Contract, ContractStatus, TimelineColor};
//! use jiff::{Timestamp, civil::date};
//! use rust_decimal::Decimal;
//! use uuid::Uuid;
//!
//! let contract = Contract {
//!     id: Uuid::new_v4(),
//!     name: "Firewall support".to_string(),
//!     supplier: "Acme".to_string(),
//!     amount: Decimal::new(120_000, 2),
//!     start_date: date(2024, 7, 1),
//!     end_date: date(2025, 6, 30),
//!     notice_period_days: 60,
//! #   sharepoint_file_url: None,
//! #   status: "active".to_string(),
//! #   created_at: Timestamp::UNIX_EPOCH,
//! #   updated_at: Timestamp::UNIX_EPOCH,
//! };
//!
//! let today = date(2025, 6, 15);
//! assert_eq!(contract.notice_start_date(), date(2025, 5, 1));
//! assert_eq!(contract.computed_status(today), ContractStatus::InNotice);
//! assert_eq!(contract.timeline_color(today), TimelineColor::Red);
//! ```

pub mod contract;
pub mod filters;
pub mod stats;
pub mod status;
pub mod ticket;
pub mod timeline;


pub use contract::{Contract, DEFAULT_CONTRACT_STATUS};
pub use filters::{ClosedTicketQuery, ContractFilter, DEFAULT_LIST_LIMIT};
pub use stats::{DEFAULT_STATS_WINDOW_DAYS, DailyCount, StatsRange, TicketStats};
pub use status::{ContractStatus, TimelineColor};
pub use ticket::{DEFAULT_PRIORITY, Ticket, utc_date};
pub use timeline::{
    ContractMilestoneMeta, ContractNoticeMeta, TicketMeta, TimelineItem, TimelineItemType,
    TimelineMeta,
};

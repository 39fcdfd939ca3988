//! Pure temporal-state and timeline-composition engines.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐
//! │  status          │───▶│  timeline        │───▶ [TimelineItem]
//! │ (contract dates) │    │ (contracts +     │
//! └──────────────────┘    │  tickets)        │
//!                         └──────────────────┘
//! ┌──────────────────┐
//! │  stats           │───▶ [DailyCount]
//! │ (closed tickets) │
//! └──────────────────┘
//! ```
//!
//! All three take "today" as an explicit argument where they need it, hold no
//! state between calls and never fail. They are safe to call concurrently on
//! independent inputs. [`stacking`] is an optional consumer-side pass over a
//! built timeline.

pub mod stacking;
pub mod stats;
pub mod status;
pub mod timeline;

pub use stacking::stack_items;
pub use stats::aggregate_daily_counts;
pub use status::{StatusReport, derive_status};
pub use timeline::build_timeline;

//! Timeline item types produced by the timeline projector.
//!
//! Items are transient: built per request, serialized, discarded. Each item
//! carries a type-specific metadata payload; the item's `type` is derived
//! from that payload so the two can never disagree.

use std::fmt;

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use uuid::Uuid;

use super::TimelineColor;

/// Kind of a timeline item, serialized as `contract-milestone`,
/// `contract-notice` or `ticket`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineItemType {
    ContractMilestone,
    ContractNotice,
    Ticket,
}

impl TimelineItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineItemType::ContractMilestone => "contract-milestone",
            TimelineItemType::ContractNotice => "contract-notice",
            TimelineItemType::Ticket => "ticket",
        }
    }
}

impl fmt::Display for TimelineItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a contract end-date milestone.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContractMilestoneMeta {
    pub contract_id: Uuid,
    pub supplier: String,
    /// Sent as a JSON number for chart consumers
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub sharepoint_url: Option<String>,
}

/// Payload of a contract notice-period bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContractNoticeMeta {
    pub contract_id: Uuid,
    pub supplier: String,
    pub notice_days: u32,
}

/// Payload of a ticket bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TicketMeta {
    pub ticket_id: u64,
    pub state: String,
    pub priority: String,
    pub tags: Vec<String>,
}

/// Type-specific metadata of a timeline item.
///
/// Serialized untagged, i.e. as the plain payload object; the discriminant is
/// carried by the item's `type` field instead.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TimelineMeta {
    ContractMilestone(ContractMilestoneMeta),
    ContractNotice(ContractNoticeMeta),
    Ticket(TicketMeta),
}

impl TimelineMeta {
    pub fn item_type(&self) -> TimelineItemType {
        match self {
            TimelineMeta::ContractMilestone(_) => TimelineItemType::ContractMilestone,
            TimelineMeta::ContractNotice(_) => TimelineItemType::ContractNotice,
            TimelineMeta::Ticket(_) => TimelineItemType::Ticket,
        }
    }
}

/// A single renderable point or interval on the shared calendar view.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    /// Unique across sources: `contract-milestone-<id>`,
    /// `contract-notice-<id>` or `ticket-<id>`
    pub id: String,

    pub title: String,

    pub start: Date,

    /// Absent for point items (milestones)
    pub end: Option<Date>,

    pub color: TimelineColor,

    /// Visual stacking lane. Always 0 out of the projector.
    pub group: u32,

    pub metadata: TimelineMeta,
}

impl TimelineItem {
    pub fn item_type(&self) -> TimelineItemType {
        self.metadata.item_type()
    }

    /// Last day the item occupies; the start day for point items.
    pub fn last_day(&self) -> Date {
        self.end.unwrap_or(self.start)
    }
}

impl Serialize for TimelineItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut item = serializer.serialize_struct("TimelineItem", 8)?;
        item.serialize_field("id", &self.id)?;
        item.serialize_field("type", &self.item_type())?;
        item.serialize_field("title", &self.title)?;
        item.serialize_field("start", &self.start)?;
        item.serialize_field("end", &self.end)?;
        item.serialize_field("color", &self.color)?;
        item.serialize_field("group", &self.group)?;
        item.serialize_field("metadata", &self.metadata)?;
        item.end()
    }
}

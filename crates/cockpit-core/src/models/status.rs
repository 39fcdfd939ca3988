//! Computed contract status and timeline color enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Lifecycle status derived from a contract's dates.
///
/// Transitions happen only as "today" advances: `Active` → `InNotice` →
/// `Expired`. `Expired` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Before the notice window opens
    Active,

    /// Inside the notice window, up to and including the end date
    InNotice,

    /// Strictly after the end date
    Expired,
}

impl FromStr for ContractStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ContractStatus::Active),
            "in_notice" | "innotice" | "notice" => Ok(ContractStatus::InNotice),
            "expired" => Ok(ContractStatus::Expired),
            _ => Err(format!("Invalid contract status: {s}")),
        }
    }
}

impl ContractStatus {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::InNotice => "in_notice",
            ContractStatus::Expired => "expired",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use cockpit_core::models::ContractStatus;
    ///
    /// assert_eq!(ContractStatus::Active.with_icon(), "● Active");
    /// assert_eq!(ContractStatus::InNotice.with_icon(), "◐ In notice");
    /// assert_eq!(ContractStatus::Expired.with_icon(), "○ Expired");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ContractStatus::Active => "● Active",
            ContractStatus::InNotice => "◐ In notice",
            ContractStatus::Expired => "○ Expired",
        }
    }
}

/// Display color of a timeline item.
///
/// Serialized as its hex code, which is what timeline consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineColor {
    /// Expired contracts
    Gray,
    /// In notice with 30 days or less left
    Red,
    /// In notice with more than 30 days left
    Orange,
    /// Active contracts
    Green,
    /// Helpdesk tickets
    Blue,
}

impl TimelineColor {
    /// Hex code of the color, uppercase with leading `#`.
    pub fn hex(&self) -> &'static str {
        match self {
            TimelineColor::Gray => "#6B7280",
            TimelineColor::Red => "#EF4444",
            TimelineColor::Orange => "#F59E0B",
            TimelineColor::Green => "#10B981",
            TimelineColor::Blue => "#3B82F6",
        }
    }
}

impl Serialize for TimelineColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

#![allow(dead_code)]

use cockpit_core::{Dashboard, DashboardBuilder, models::Contract, models::Ticket};
use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use tempfile::TempDir;
use uuid::Uuid;

/// Helper function to create a test dashboard without a ticket source
pub async fn create_test_dashboard() -> (TempDir, Dashboard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let dashboard = DashboardBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create dashboard");
    (temp_dir, dashboard)
}

/// An in-memory contract, never persisted.
pub fn contract(name: &str, end_date: Date, notice_period_days: u32) -> Contract {
    Contract {
        id: Uuid::new_v4(),
        name: name.to_string(),
        supplier: "Acme".to_string(),
        amount: Decimal::new(100_000, 2),
        start_date: end_date.saturating_sub(jiff::Span::new().days(365)),
        end_date,
        notice_period_days,
        sharepoint_file_url: None,
        status: "active".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A ticket created at `created`, closed at `closed` when given.
pub fn ticket(id: u64, created: &str, closed: Option<&str>, tags: &[&str]) -> Ticket {
    let created_at: Timestamp = created.parse().expect("valid created_at");
    let close_at: Option<Timestamp> = closed.map(|c| c.parse().expect("valid close_at"));
    Ticket {
        id,
        title: format!("Ticket {id}"),
        state: if close_at.is_some() { "closed" } else { "open" }.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at,
        updated_at: close_at.unwrap_or(created_at),
        close_at,
        priority: "normal".to_string(),
    }
}

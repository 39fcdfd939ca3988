//! Tests for the dashboard module.

use std::io::Write;

use jiff::civil::date;
use tempfile::{NamedTempFile, TempDir};

use super::*;
use crate::{
    error::CockpitError,
    models::{ContractStatus, TimelineColor, TimelineItemType},
    params::{
        ContractId, CreateContract, DeleteContract, ListContracts, TicketId, TicketStatsQuery,
        TimelineOptions, UpdateContract,
    },
};

const TICKETS: &str = r##"[
    {"id": 1, "title": "Reset password", "state": "closed", "tags": [],
     "created_at": "2025-01-01T08:00:00Z", "updated_at": "2025-01-01T09:00:00Z",
     "close_at": "2025-01-01T09:00:00Z"},
    {"id": 2, "title": "VPN down", "state": "closed", "tags": ["network"],
     "created_at": "2025-01-01T10:00:00Z", "updated_at": "2025-01-01T23:59:59Z",
     "close_at": "2025-01-01T23:59:59Z"},
    {"id": 3, "title": "Printer", "state": "closed",
     "created_at": "2025-01-02T10:00:00Z", "updated_at": "2025-01-03T11:00:00Z",
     "close_at": "2025-01-03T11:00:00Z"},
    {"id": 4, "title": "Office move", "state": "closed", "tags": ["#Projet"],
     "created_at": "2024-12-20T10:00:00Z", "updated_at": "2025-01-03T12:00:00Z",
     "close_at": "2025-01-03T12:00:00Z"},
    {"id": 5, "title": "New ERP", "state": "open", "tags": ["#Projet"],
     "created_at": "2025-01-02T10:00:00Z", "updated_at": "2025-01-02T10:00:00Z"}
]"##;

/// Helper holding the temp files alive for the duration of a test.
struct Fixture {
    _dir: TempDir,
    _tickets: Option<NamedTempFile>,
    dashboard: Dashboard,
}

async fn create_test_dashboard(tickets: Option<&str>) -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let ticket_file = tickets.map(|json| {
        let mut file = NamedTempFile::new().expect("Failed to create ticket file");
        file.write_all(json.as_bytes()).expect("Failed to write tickets");
        file
    });

    let dashboard = DashboardBuilder::new()
        .with_database_path(Some(dir.path().join("test.db")))
        .with_ticket_file(ticket_file.as_ref().map(|f| f.path()))
        .build()
        .await
        .expect("Failed to create dashboard");

    Fixture {
        _dir: dir,
        _tickets: ticket_file,
        dashboard,
    }
}

fn contract_params(name: &str, end_date: &str, notice_period_days: i64) -> CreateContract {
    CreateContract {
        name: name.to_string(),
        supplier: "Acme".to_string(),
        amount: "1000.00".to_string(),
        start_date: "2024-01-01".to_string(),
        end_date: end_date.to_string(),
        notice_period_days,
        sharepoint_file_url: None,
    }
}

fn id_of(contract: &crate::models::Contract) -> ContractId {
    ContractId {
        id: contract.id.to_string(),
    }
}

#[tokio::test]
async fn test_build_creates_missing_parent_directories() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("data").join("cockpit").join("cockpit.db");

    let dashboard = DashboardBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create dashboard");

    assert!(db_path.exists());
    assert_eq!(dashboard.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_create_and_show_contract() {
    let fx = create_test_dashboard(None).await;
    let created = fx
        .dashboard
        .create_contract(&contract_params("Backup", "2025-06-30", 60))
        .await
        .expect("Failed to create contract");

    assert_eq!(created.status, "active");
    assert_eq!(created.created_at, created.updated_at);

    let view = fx
        .dashboard
        .show_contract_view(&id_of(&created), date(2025, 6, 15))
        .await
        .expect("Failed to show contract");
    assert_eq!(view.contract, created);
    assert_eq!(view.report.status, ContractStatus::InNotice);
    assert_eq!(view.report.color, TimelineColor::Red);
}

#[tokio::test]
async fn test_invalid_contract_is_not_stored() {
    let fx = create_test_dashboard(None).await;
    let result = fx
        .dashboard
        .create_contract(&contract_params("Backwards", "2023-12-31", 10))
        .await;

    assert!(matches!(result, Err(CockpitError::InvalidInput { .. })));
    assert!(fx.dashboard.list_all_contracts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_contracts_order_paging_and_status_filter() {
    let fx = create_test_dashboard(None).await;
    for (name, end) in [("Zulu", "2025-03-01"), ("Alpha", "2025-09-01"), ("Mike", "2025-03-01")] {
        fx.dashboard
            .create_contract(&contract_params(name, end, 0))
            .await
            .unwrap();
    }

    let all = fx
        .dashboard
        .list_contracts(&ListContracts::default())
        .await
        .unwrap();
    let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Mike", "Zulu", "Alpha"]);

    let page = fx
        .dashboard
        .list_contracts(&ListContracts {
            skip: 1,
            limit: 1,
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Zulu");

    fx.dashboard
        .update_contract(&UpdateContract {
            id: all[2].id.to_string(),
            status: Some("renegotiating".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let filtered = fx
        .dashboard
        .list_contracts(&ListContracts {
            status: Some("renegotiating".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Alpha");
}

#[tokio::test]
async fn test_update_contract_partial_and_revalidated() {
    let fx = create_test_dashboard(None).await;
    let created = fx
        .dashboard
        .create_contract(&CreateContract {
            sharepoint_file_url: Some("https://files.example/a.pdf".to_string()),
            ..contract_params("Backup", "2025-06-30", 60)
        })
        .await
        .unwrap();

    let updated = fx
        .dashboard
        .update_contract_result(
            &UpdateContract {
                id: created.id.to_string(),
                notice_period_days: Some(10),
                sharepoint_file_url: Some(String::new()),
                ..Default::default()
            },
            date(2025, 6, 15),
        )
        .await
        .unwrap();
    let contract = &updated.resource.contract;
    assert_eq!(contract.notice_period_days, 10);
    assert_eq!(contract.sharepoint_file_url, None);
    assert_eq!(contract.name, "Backup");
    assert_eq!(updated.resource.report.status, ContractStatus::Active);
    assert_eq!(updated.changes.len(), 2);

    // Moving the end before the stored start must fail
    let invalid = fx
        .dashboard
        .update_contract(&UpdateContract {
            id: created.id.to_string(),
            end_date: Some("2023-06-30".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(invalid, Err(CockpitError::InvalidInput { .. })));

    let unchanged = fx.dashboard.require_contract(&id_of(&created)).await.unwrap();
    assert_eq!(unchanged.end_date, date(2025, 6, 30));
}

#[tokio::test]
async fn test_update_rejects_empty_and_unknown() {
    let fx = create_test_dashboard(None).await;
    let empty = fx
        .dashboard
        .update_contract(&UpdateContract {
            id: uuid::Uuid::new_v4().to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(empty, Err(CockpitError::InvalidInput { .. })));

    let unknown = fx
        .dashboard
        .update_contract(&UpdateContract {
            id: uuid::Uuid::new_v4().to_string(),
            name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(unknown, Err(CockpitError::ContractNotFound { .. })));
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let fx = create_test_dashboard(None).await;
    let created = fx
        .dashboard
        .create_contract(&contract_params("Backup", "2025-06-30", 60))
        .await
        .unwrap();

    let refused = fx
        .dashboard
        .delete_contract(&DeleteContract {
            id: created.id.to_string(),
            confirmed: false,
        })
        .await;
    assert!(matches!(refused, Err(CockpitError::InvalidInput { .. })));

    let deleted = fx
        .dashboard
        .delete_contract_result(&DeleteContract {
            id: created.id.to_string(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert_eq!(deleted.resource, created);
    assert!(fx.dashboard.get_contract(&id_of(&created)).await.unwrap().is_none());

    let again = fx
        .dashboard
        .delete_contract(&DeleteContract {
            id: created.id.to_string(),
            confirmed: true,
        })
        .await;
    assert!(matches!(again, Err(CockpitError::ContractNotFound { .. })));
}

#[tokio::test]
async fn test_contract_status_unknown_id() {
    let fx = create_test_dashboard(None).await;
    let result = fx
        .dashboard
        .contract_status(
            &ContractId {
                id: uuid::Uuid::nil().to_string(),
            },
            date(2025, 1, 1),
        )
        .await;
    assert!(matches!(result, Err(CockpitError::ContractNotFound { .. })));

    let malformed = fx
        .dashboard
        .contract_status(
            &ContractId {
                id: "42".to_string(),
            },
            date(2025, 1, 1),
        )
        .await;
    assert!(matches!(malformed, Err(CockpitError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_timeline_combines_contracts_and_project_tickets() {
    let fx = create_test_dashboard(Some(TICKETS)).await;
    fx.dashboard
        .create_contract(&contract_params("Backup", "2025-06-30", 60))
        .await
        .unwrap();

    let today = date(2025, 6, 15);
    let items = fx
        .dashboard
        .timeline(&TimelineOptions::default(), today)
        .await
        .unwrap();

    let types: Vec<_> = items.iter().map(|i| i.item_type()).collect();
    assert_eq!(
        types,
        vec![
            TimelineItemType::ContractMilestone,
            TimelineItemType::ContractNotice,
            TimelineItemType::Ticket,
            TimelineItemType::Ticket,
        ]
    );
    assert!(items.iter().all(|i| i.group == 0));

    // Open project ticket runs until today
    let open = items.iter().find(|i| i.id == "ticket-5").unwrap();
    assert_eq!(open.start, date(2025, 1, 2));
    assert_eq!(open.end, Some(today));

    let stacked = fx
        .dashboard
        .timeline(&TimelineOptions { stack: true }, today)
        .await
        .unwrap();
    assert_eq!(stacked.len(), items.len());
    assert!(stacked.iter().any(|i| i.group > 0));
}

#[tokio::test]
async fn test_ticket_stats_excludes_projects_by_default() {
    let fx = create_test_dashboard(Some(TICKETS)).await;
    let query = TicketStatsQuery {
        start_date: Some("2025-01-01".to_string()),
        end_date: Some("2025-01-31".to_string()),
        include_projects: false,
    };

    let stats = fx
        .dashboard
        .ticket_stats(&query, date(2025, 6, 1))
        .await
        .unwrap();
    let counts: Vec<_> = stats.counts.iter().map(|c| (c.date, c.count)).collect();
    assert_eq!(counts, vec![(date(2025, 1, 1), 2), (date(2025, 1, 3), 1)]);

    let with_projects = fx
        .dashboard
        .ticket_stats(
            &TicketStatsQuery {
                include_projects: true,
                ..query
            },
            date(2025, 6, 1),
        )
        .await
        .unwrap();
    assert_eq!(with_projects.total(), 4);
}

#[tokio::test]
async fn test_ticket_stats_default_window_and_bad_range() {
    let fx = create_test_dashboard(Some(TICKETS)).await;

    let stats = fx
        .dashboard
        .ticket_stats(&TicketStatsQuery::default(), date(2025, 1, 31))
        .await
        .unwrap();
    assert_eq!(stats.range.start, date(2025, 1, 1));
    assert_eq!(stats.total(), 3);

    let backwards = fx
        .dashboard
        .ticket_stats(
            &TicketStatsQuery {
                start_date: Some("2025-02-01".to_string()),
                end_date: Some("2025-01-01".to_string()),
                include_projects: false,
            },
            date(2025, 6, 1),
        )
        .await;
    assert!(matches!(backwards, Err(CockpitError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_unreadable_ticket_source_degrades() {
    let dir = TempDir::new().unwrap();
    let dashboard = DashboardBuilder::new()
        .with_database_path(Some(dir.path().join("test.db")))
        .with_ticket_file(Some(dir.path().join("missing.json")))
        .build()
        .await
        .unwrap();
    dashboard
        .create_contract(&contract_params("Backup", "2025-06-30", 60))
        .await
        .unwrap();

    let items = dashboard
        .timeline(&TimelineOptions::default(), date(2025, 1, 1))
        .await
        .unwrap();
    assert_eq!(items.len(), 2);

    let stats = dashboard
        .ticket_stats(&TicketStatsQuery::default(), date(2025, 1, 31))
        .await
        .unwrap();
    assert!(stats.counts.is_empty());

    // Direct ticket queries still report the failure
    assert!(dashboard.project_tickets().await.is_err());
}

#[tokio::test]
async fn test_tickets_without_source() {
    let fx = create_test_dashboard(None).await;
    assert!(!fx.dashboard.has_ticket_source());
    assert!(fx.dashboard.project_tickets().await.unwrap().is_empty());

    let missing = fx.dashboard.show_ticket(&TicketId { id: 1 }).await;
    assert!(matches!(missing, Err(CockpitError::TicketNotFound { id: 1 })));
}

#[tokio::test]
async fn test_show_ticket_and_projects() {
    let fx = create_test_dashboard(Some(TICKETS)).await;
    let ticket = fx.dashboard.show_ticket(&TicketId { id: 3 }).await.unwrap();
    assert_eq!(ticket.title, "Printer");

    let projects = fx.dashboard.project_tickets_view().await.unwrap();
    assert_eq!(projects.len(), 2);
}

#[tokio::test]
async fn test_blank_project_tag_rejected() {
    let dir = TempDir::new().unwrap();
    let result = DashboardBuilder::new()
        .with_database_path(Some(dir.path().join("test.db")))
        .with_project_tag(Some("  "))
        .build()
        .await;
    assert!(matches!(result, Err(CockpitError::Configuration { .. })));
}

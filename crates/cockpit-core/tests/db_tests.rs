use cockpit_core::{
    CockpitError, Database,
    models::ContractFilter,
    params::{CreateContract, UpdateContract},
};
use jiff::civil::date;
use rusqlite::Connection;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn draft(name: &str, end_date: &str) -> cockpit_core::params::ContractDraft {
    CreateContract {
        name: name.to_string(),
        supplier: "Contoso".to_string(),
        amount: "2500.10".to_string(),
        start_date: "2025-01-01".to_string(),
        end_date: end_date.to_string(),
        notice_period_days: 30,
        sharepoint_file_url: Some("https://files.example/c.pdf".to_string()),
    }
    .validate()
    .expect("valid draft")
}

#[test]
fn test_database_initialization_is_idempotent() {
    let (temp_file, _db) = create_test_db();
    let _again = Database::new(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_create_and_get_contract_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_contract(&draft("Licences", "2025-12-31"))
        .expect("Failed to create contract");
    let fetched = db
        .get_contract(created.id)
        .expect("Failed to get contract")
        .expect("Contract should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.amount.to_string(), "2500.10");
    assert_eq!(fetched.end_date, date(2025, 12, 31));
    assert_eq!(fetched.status, "active");
}

#[test]
fn test_get_missing_contract_is_none() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_contract(uuid::Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn test_list_all_contracts_ignores_paging() {
    let (_temp_file, mut db) = create_test_db();
    for i in 0..5 {
        db.create_contract(&draft(&format!("C{i}"), "2025-12-31"))
            .unwrap();
    }

    let page = db
        .list_contracts(&ContractFilter {
            limit: 2,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(db.list_all_contracts().unwrap().len(), 5);
}

#[test]
fn test_update_keeps_status_unless_given() {
    let (_temp_file, mut db) = create_test_db();
    let created = db.create_contract(&draft("Licences", "2025-12-31")).unwrap();

    let changes = UpdateContract {
        name: Some("Licences renewed".to_string()),
        end_date: Some("2026-12-31".to_string()),
        sharepoint_file_url: Some(String::new()),
        ..Default::default()
    };
    let updated = db.update_contract(created.id, &changes).unwrap();
    assert_eq!(updated.name, "Licences renewed");
    assert_eq!(updated.end_date, date(2026, 12, 31));
    assert_eq!(updated.supplier, "Contoso");
    assert_eq!(updated.status, "active");
    assert_eq!(updated.sharepoint_file_url, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let archived = db
        .update_contract(
            created.id,
            &UpdateContract {
                status: Some("archived".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(archived.status, "archived");
    assert_eq!(archived.name, "Licences renewed");
}

#[test]
fn test_invalid_update_leaves_row_untouched() {
    let (_temp_file, mut db) = create_test_db();
    let created = db.create_contract(&draft("Licences", "2025-12-31")).unwrap();

    let result = db.update_contract(
        created.id,
        &UpdateContract {
            name: Some("Renamed".to_string()),
            end_date: Some("2024-06-30".to_string()),
            ..Default::default()
        },
    );
    assert!(matches!(result, Err(CockpitError::InvalidInput { .. })));
    assert_eq!(db.get_contract(created.id).unwrap().unwrap(), created);
}

#[test]
fn test_interleaved_updates_from_two_handles_keep_both_changes() {
    let (temp_file, mut first) = create_test_db();
    let mut second = Database::new(temp_file.path()).expect("Failed to open second handle");
    let created = first.create_contract(&draft("Orig", "2025-12-31")).unwrap();

    // The first handle has already read the row when the second one renames it
    let seen_by_first = first.get_contract(created.id).unwrap().unwrap();
    assert_eq!(seen_by_first.name, "Orig");

    second
        .update_contract(
            created.id,
            &UpdateContract {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let after = first
        .update_contract(
            created.id,
            &UpdateContract {
                amount: Some("99".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(after.name, "Renamed");
    assert_eq!(after.amount.to_string(), "99");
    assert_eq!(second.get_contract(created.id).unwrap().unwrap(), after);
}

#[test]
fn test_update_and_delete_unknown_contract() {
    let (_temp_file, mut db) = create_test_db();
    let id = uuid::Uuid::new_v4();

    let rename = UpdateContract {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        db.update_contract(id, &rename),
        Err(CockpitError::ContractNotFound { .. })
    ));
    assert!(matches!(
        db.delete_contract(id),
        Err(CockpitError::ContractNotFound { .. })
    ));
}

#[test]
fn test_migration_adds_document_column() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE contracts (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                supplier TEXT NOT NULL,
                amount TEXT NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                notice_period_days INTEGER NOT NULL,
                status TEXT NOT NULL DEFAULT 'active',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
        .unwrap();
    }

    let mut db = Database::new(temp_file.path()).expect("Failed to migrate database");
    let created = db.create_contract(&draft("Migrated", "2025-12-31")).unwrap();
    assert_eq!(
        created.sharepoint_file_url.as_deref(),
        Some("https://files.example/c.pdf")
    );
}

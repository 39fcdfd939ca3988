//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Brings databases created by older releases up to the current schema.
    fn apply_migrations(&self) -> Result<()> {
        // Early stores had no document link column
        let has_url_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('contracts') WHERE name = 'sharepoint_file_url'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect contracts table")?;

        if !has_url_column {
            self.connection
                .execute("ALTER TABLE contracts ADD COLUMN sharepoint_file_url TEXT", [])
                .db_context("Failed to add sharepoint_file_url column to contracts table")?;
        }

        Ok(())
    }
}

//! Builder for creating and configuring Dashboard instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::info;
use tokio::task;

use super::{DEFAULT_PROJECT_TAG, Dashboard};
use crate::{
    db::Database,
    error::{CockpitError, Result},
    tickets::{TicketFile, TicketSource},
};

/// Builder for creating and configuring Dashboard instances.
#[derive(Clone, Default)]
pub struct DashboardBuilder {
    database_path: Option<PathBuf>,
    tickets: Option<Arc<dyn TicketSource>>,
    project_tag: Option<String>,
}

impl DashboardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/cockpit/cockpit.db` or `~/.local/share/cockpit/cockpit.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Reads tickets from a helpdesk JSON export. Without one the dashboard
    /// has no tickets.
    pub fn with_ticket_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.tickets = Some(Arc::new(TicketFile::new(path)));
        }
        self
    }

    /// Uses any other ticket source.
    pub fn with_ticket_source(mut self, source: Arc<dyn TicketSource>) -> Self {
        self.tickets = Some(source);
        self
    }

    /// Overrides the project tag (default `#Projet`).
    pub fn with_project_tag<S: Into<String>>(mut self, tag: Option<S>) -> Self {
        if let Some(tag) = tag {
            self.project_tag = Some(tag.into());
        }
        self
    }

    /// Builds the configured dashboard, creating the database and its schema
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns `CockpitError::FileSystem` if the database directory cannot be
    /// created, `CockpitError::XdgDirectory` if no default location can be
    /// determined, `CockpitError::Configuration` for a blank project tag and
    /// `CockpitError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Dashboard> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        let project_tag = self
            .project_tag
            .unwrap_or_else(|| DEFAULT_PROJECT_TAG.to_string());
        if project_tag.trim().is_empty() {
            return Err(CockpitError::Configuration {
                message: "project tag must not be empty".to_string(),
            });
        }

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CockpitError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(CockpitError::join)??;

        info!("Using contract store at {}", db_path.display());
        Ok(Dashboard::new(db_path, self.tickets, project_tag))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cockpit")
            .place_data_file("cockpit.db")
            .map_err(|e| CockpitError::XdgDirectory(e.to_string()))
    }
}

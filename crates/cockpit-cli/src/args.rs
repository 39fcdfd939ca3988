//! Command-line interface definitions using clap.
//!
//! Argument structs carry clap derives only; each converts into the matching
//! core parameter type with `From`, so validation stays in the core.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Dashboard
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use cockpit_core::{
    models::DEFAULT_LIST_LIMIT,
    params::{
        ContractId, CreateContract, DeleteContract, ListContracts, TicketId, TicketStatsQuery,
        TimelineOptions, UpdateContract,
    },
};
use jiff::civil::Date;

/// Cockpit IT dashboard
///
/// Tracks supplier contracts through their lifecycle (active, in notice,
/// expired), projects contract deadlines and project tickets onto a shared
/// timeline, and charts closed helpdesk tickets per day. Runs as a CLI or as an
/// MCP (Model Context Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "cockpit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cockpit/cockpit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Helpdesk ticket export (JSON). Without it there are no tickets
    #[arg(long, global = true)]
    pub tickets_file: Option<PathBuf>,

    /// Tag marking project tickets (default "#Projet")
    #[arg(long, global = true)]
    pub project_tag: Option<String>,

    /// Evaluate everything as of this day (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub today: Option<Date>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage supplier contracts
    #[command(alias = "c")]
    Contract {
        #[command(subcommand)]
        command: ContractCommands,
    },
    /// Inspect helpdesk tickets
    #[command(alias = "t")]
    Ticket {
        #[command(subcommand)]
        command: TicketCommands,
    },
    /// Show contract deadlines and project tickets on one timeline
    #[command(alias = "tl")]
    Timeline(TimelineArgs),
    /// Closed tickets per day
    Stats(StatsArgs),
    /// Start the MCP server
    Serve,
}

#[derive(Subcommand)]
pub enum ContractCommands {
    /// Register a new contract
    #[command(alias = "c")]
    Create(CreateContractArgs),
    /// List contracts, soonest end date first
    #[command(aliases = ["l", "ls"])]
    List(ListContractsArgs),
    /// Show one contract with its current status
    #[command(alias = "s")]
    Show(ContractIdArgs),
    /// Change some fields of a contract
    #[command(alias = "u")]
    Update(UpdateContractArgs),
    /// Delete a contract permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteContractArgs),
    /// Derived status, color and notice dates of one contract
    Status(ContractStatusArgs),
}

#[derive(Subcommand)]
pub enum TicketCommands {
    /// Show one ticket
    #[command(alias = "s")]
    Show(TicketIdArgs),
    /// List tickets carrying the project tag
    #[command(alias = "p")]
    Projects,
}

/// Register a new contract
#[derive(ClapArgs)]
pub struct CreateContractArgs {
    /// Contract name
    pub name: String,
    /// Supplier name
    #[arg(short, long)]
    pub supplier: String,
    /// Amount, e.g. 1200.00
    #[arg(short, long)]
    pub amount: String,
    /// First day of the contract (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,
    /// Last day of the contract (YYYY-MM-DD)
    #[arg(long)]
    pub end: String,
    /// Notice period in days
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub notice_days: i64,
    /// Link to the signed document
    #[arg(long)]
    pub url: Option<String>,
}

impl From<CreateContractArgs> for CreateContract {
    fn from(val: CreateContractArgs) -> Self {
        CreateContract {
            name: val.name,
            supplier: val.supplier,
            amount: val.amount,
            start_date: val.start,
            end_date: val.end,
            notice_period_days: val.notice_days,
            sharepoint_file_url: val.url,
        }
    }
}

/// List contracts
#[derive(ClapArgs)]
pub struct ListContractsArgs {
    /// Only contracts with this administrative status
    #[arg(long)]
    pub status: Option<String>,
    /// Number of contracts to skip
    #[arg(long, default_value_t = 0)]
    pub skip: usize,
    /// Maximum number of contracts to show
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: usize,
}

impl From<ListContractsArgs> for ListContracts {
    fn from(val: ListContractsArgs) -> Self {
        ListContracts {
            skip: val.skip,
            limit: val.limit,
            status: val.status,
        }
    }
}

#[derive(ClapArgs)]
pub struct ContractIdArgs {
    /// Contract UUID
    pub id: String,
}

impl From<ContractIdArgs> for ContractId {
    fn from(val: ContractIdArgs) -> Self {
        ContractId { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct ContractStatusArgs {
    /// Contract UUID
    pub id: String,
    /// Print the status report as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&ContractStatusArgs> for ContractId {
    fn from(val: &ContractStatusArgs) -> Self {
        ContractId { id: val.id.clone() }
    }
}

/// Change some fields of a contract
#[derive(ClapArgs)]
pub struct UpdateContractArgs {
    /// Contract UUID
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub supplier: Option<String>,
    #[arg(short, long)]
    pub amount: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub start: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub end: Option<String>,
    #[arg(short, long, allow_negative_numbers = true)]
    pub notice_days: Option<i64>,
    /// Document link; pass an empty string to remove it
    #[arg(long)]
    pub url: Option<String>,
    /// Administrative status, e.g. "archived"
    #[arg(long)]
    pub status: Option<String>,
}

impl From<UpdateContractArgs> for UpdateContract {
    fn from(val: UpdateContractArgs) -> Self {
        UpdateContract {
            id: val.id,
            name: val.name,
            supplier: val.supplier,
            amount: val.amount,
            start_date: val.start,
            end_date: val.end,
            notice_period_days: val.notice_days,
            sharepoint_file_url: val.url,
            status: val.status,
        }
    }
}

/// Delete a contract permanently
#[derive(ClapArgs)]
pub struct DeleteContractArgs {
    /// Contract UUID
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteContractArgs> for DeleteContract {
    fn from(val: DeleteContractArgs) -> Self {
        DeleteContract {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(ClapArgs)]
pub struct TicketIdArgs {
    /// Helpdesk ticket number
    pub id: u64,
}

impl From<TicketIdArgs> for TicketId {
    fn from(val: TicketIdArgs) -> Self {
        TicketId { id: val.id }
    }
}

/// Show the timeline
#[derive(ClapArgs)]
pub struct TimelineArgs {
    /// Spread overlapping items over separate lanes
    #[arg(long)]
    pub stack: bool,
    /// Print the items as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&TimelineArgs> for TimelineOptions {
    fn from(val: &TimelineArgs) -> Self {
        TimelineOptions { stack: val.stack }
    }
}

/// Closed tickets per day
#[derive(ClapArgs)]
pub struct StatsArgs {
    /// First day (YYYY-MM-DD); defaults to 30 days before the end
    #[arg(long)]
    pub start: Option<String>,
    /// Last day (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub end: Option<String>,
    /// Count project tickets too
    #[arg(long)]
    pub include_projects: bool,
    /// Print the histogram as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&StatsArgs> for TicketStatsQuery {
    fn from(val: &StatsArgs) -> Self {
        TicketStatsQuery {
            start_date: val.start.clone(),
            end_date: val.end.clone(),
            include_projects: val.include_projects,
        }
    }
}

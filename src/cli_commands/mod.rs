use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub(crate) mod identity;
pub(crate) mod resources;
pub(crate) mod workflow;

pub(crate) use self::identity::ConfigCommands;
pub(crate) use self::resources::{AssetCommands, CategoryCommands, EmployeeCommands};
pub(crate) use self::workflow::{AuditCommands, BorrowingCommands, ServiceRequestCommands};

#[derive(Parser)]
#[command(name = "ams")]
#[command(about = "Asset Management System client", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL (overrides AMS_BASE_URL and config.json)
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Directory holding config.json and session.json
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) state_dir: Option<PathBuf>,

    /// Log at debug level to stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        gender: String,
        #[arg(long, default_value = "")]
        contact_number: String,
        #[arg(long, default_value = "")]
        address: String,
        /// Requested role (the backend decides)
        #[arg(long)]
        role: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user, read from the stored token
    Whoami,

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Summary counts for the signed-in user's home page
    Dashboard,

    /// Manage employees (admin)
    Employees {
        #[command(subcommand)]
        command: EmployeeCommands,
    },

    /// Browse or manage asset categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Browse or manage assets
    Assets {
        #[command(subcommand)]
        command: AssetCommands,
    },

    /// Borrow, approve, and return assets
    Borrowings {
        #[command(subcommand)]
        command: BorrowingCommands,
    },

    /// Report and track asset issues
    ServiceRequests {
        #[command(subcommand)]
        command: ServiceRequestCommands,
    },

    /// Asset audits
    Audits {
        #[command(subcommand)]
        command: AuditCommands,
    },
}

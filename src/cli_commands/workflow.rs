use clap::Subcommand;

use ams_client::model::{AuditAction, BorrowingAction};

#[derive(Subcommand)]
pub(crate) enum BorrowingCommands {
    /// Your borrowings
    Mine {
        /// Only this status: PENDING|APPROVED|REJECTED|ACTIVE|RETURNED
        #[arg(long)]
        status: Option<String>,
        /// Only assets currently with you (ACTIVE or APPROVED)
        #[arg(long, conflicts_with = "status")]
        held: bool,
        /// Print per-status counts instead of the list
        #[arg(long)]
        counts: bool,
    },

    /// Active borrowings (admin)
    Active,

    /// Pending borrowings (admin)
    Pending,

    /// Rejected borrowings (admin)
    Rejected,

    /// Returned borrowings (admin)
    Returned,

    /// Borrowings of one employee (admin)
    ByEmployee { employee_id: i64 },

    /// Ask to borrow an asset
    Request {
        #[arg(long)]
        asset_id: i64,
    },

    /// Approve or reject a pending borrowing (admin)
    Action {
        id: i64,
        #[arg(long, value_enum)]
        action: BorrowingAction,
    },

    /// Return a borrowed asset
    Return { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ServiceRequestCommands {
    /// All service requests (admin)
    List,

    /// Show one service request
    Get { id: i64 },

    /// Your service requests
    Mine,

    /// Service requests of one employee (admin)
    ByEmployee { employee_id: i64 },

    /// Service requests in a status (admin)
    ByStatus { status: String },

    /// Report an issue with an asset
    Create {
        #[arg(long)]
        asset_id: i64,
        #[arg(long)]
        issue_type: String,
        #[arg(long)]
        description: String,
    },

    /// Move a service request to a new status (admin)
    Update {
        id: i64,
        #[arg(long)]
        status: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum AuditCommands {
    /// All audits (admin)
    List,

    /// Your audits
    Mine {
        /// Only this status: PENDING|VERIFIED|REJECTED
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one audit
    Get { id: i64 },

    /// Audits of one employee (admin)
    ByEmployee { employee_id: i64 },

    /// Ask an employee to confirm they hold an asset (admin)
    Send {
        #[arg(long)]
        employee_id: i64,
        #[arg(long)]
        asset_id: i64,
    },

    /// Record a decision on an audit
    Decide {
        id: i64,
        #[arg(long, value_enum)]
        action: AuditAction,
    },
}

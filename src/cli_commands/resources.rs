use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum EmployeeCommands {
    /// List all employees
    List,

    /// Show one employee
    Get { id: i64 },

    /// Register an employee from a JSON payload
    Create {
        #[arg(long)]
        data: String,
    },

    /// Update an employee from a JSON payload
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },

    /// Delete an employee
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum CategoryCommands {
    /// List all categories
    List,

    /// Show one category
    Get { id: i64 },

    /// Look a category up by name
    ByName { name: String },

    /// Add a category (admin)
    Add {
        #[arg(long)]
        data: String,
    },

    /// Update a category (admin)
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },

    /// Delete a category (admin)
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum AssetCommands {
    /// List all assets
    List,

    /// Show one asset
    Get { id: i64 },

    /// Assets in a category
    ByCategory { name: String },

    /// Assets assigned to an employee (admin)
    ByEmployee { employee_id: i64 },

    /// Assets assigned to you
    Mine,

    /// Add an asset (admin)
    Add {
        #[arg(long)]
        data: String,
    },

    /// Update an asset (admin)
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },

    /// Delete an asset (admin)
    Delete { id: i64 },

    /// Attach an image file to an asset (admin)
    UploadImage {
        id: i64,
        #[arg(long)]
        file: PathBuf,
    },
}

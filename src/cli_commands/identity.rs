use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Persist the global --base-url to config.json
    Set,
}

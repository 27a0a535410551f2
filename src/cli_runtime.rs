use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ams_client::config::ClientConfig;
use ams_client::remote::AmsClient;
use ams_client::session::{FileStorage, Navigator, SessionStore};

use crate::cli_commands::Cli;
use crate::cli_exec::{self, Ctx};

const LOG_ENV: &str = "AMS_LOG";

/// Terminal rendition of a hard redirect: the session is gone, say so.
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn hard_redirect(&self, path: &str) {
        tracing::info!(path, "session ended");
        eprintln!("Your session has ended. Run `ams login` to sign in again.");
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let flag_base_url = cli.base_url.clone();
    let config = ClientConfig::resolve(cli.state_dir, cli.base_url)?;
    tracing::debug!(
        base_url = %config.base_url,
        state_dir = %config.state_dir.display(),
        "configuration resolved"
    );
    let session = SessionStore::new(
        Arc::new(FileStorage::new(config.session_path())),
        Arc::new(ConsoleNavigator),
    );
    let client = AmsClient::from_config(&config, session.clone())?;

    cli_exec::handle_command(
        &Ctx {
            config,
            session,
            client,
            flag_base_url,
        },
        cli.command,
    )
}

use anyhow::{Context, Result};

use ams_client::classify;
use ams_client::config::ClientConfig;
use ams_client::guard::{self, GuardDecision};
use ams_client::remote::{AmsClient, ApiResponse, ApiResult, ResponseBody};
use ams_client::session::SessionStore;
use ams_client::views::ViewError;

use crate::cli_commands::Commands;

mod identity;
mod resources;
mod workflow;

pub(crate) struct Ctx {
    pub(crate) config: ClientConfig,
    pub(crate) session: SessionStore,
    pub(crate) client: AmsClient,
    /// `--base-url` as typed, before layering.
    pub(crate) flag_base_url: Option<String>,
}

impl Ctx {
    /// Runs the session guard; nothing is sent when it fails.
    pub(crate) fn require_session(&self) -> Result<()> {
        enforce(guard::require_session(&self.session))
    }

    pub(crate) fn require_admin(&self) -> Result<()> {
        enforce(guard::require_admin(&self.session))
    }

    pub(crate) fn employee_id(&self) -> Result<i64> {
        self.session
            .employee_id()
            .map_err(|err| anyhow::anyhow!(err.user_message()))
    }
}

fn enforce(decision: GuardDecision) -> Result<()> {
    match decision {
        GuardDecision::Allow => Ok(()),
        GuardDecision::Redirect(path) => {
            tracing::debug!(path, "guard redirect");
            anyhow::bail!("not logged in (run `ams login --email ... --password ...`)")
        }
        GuardDecision::AccessDenied => {
            anyhow::bail!("access denied: this command requires an administrator")
        }
    }
}

/// Turns a failed call into "<what>: <message a user should see>".
pub(crate) fn api(result: ApiResult, what: &str) -> Result<ApiResponse> {
    result
        .map_err(|err| anyhow::anyhow!(classify::extract_message(&err, classify::DEFAULT_FALLBACK)))
        .context(what.to_string())
}

pub(crate) fn view<T>(result: Result<T, ViewError>, what: &str) -> Result<T> {
    result
        .map_err(|err| anyhow::anyhow!(err.user_message(classify::DEFAULT_FALLBACK)))
        .context(what.to_string())
}

pub(crate) fn parse_data(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).context("parse --data as JSON")
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize output json")?
    );
    Ok(())
}

/// Prints a response body: JSON pretty-printed, text as-is, nothing when empty.
pub(crate) fn print_body(response: &ApiResponse) -> Result<()> {
    match &response.body {
        ResponseBody::Empty => Ok(()),
        ResponseBody::Text(text) => {
            println!("{}", text);
            Ok(())
        }
        ResponseBody::Json(value) => print_json(value),
    }
}

pub(crate) fn handle_command(ctx: &Ctx, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => identity::handle_login_command(ctx, email, password),
        Commands::Register {
            name,
            email,
            password,
            gender,
            contact_number,
            address,
            role,
        } => identity::handle_register_command(
            ctx,
            ams_client::model::RegisterRequest {
                name,
                gender,
                contact_number,
                address,
                email,
                password,
                role,
            },
        ),
        Commands::Logout => identity::handle_logout_command(ctx),
        Commands::Whoami => identity::handle_whoami_command(ctx),
        Commands::Config { command } => identity::handle_config_command(ctx, command),
        Commands::Dashboard => identity::handle_dashboard_command(ctx),
        Commands::Employees { command } => resources::handle_employee_command(ctx, command),
        Commands::Categories { command } => resources::handle_category_command(ctx, command),
        Commands::Assets { command } => resources::handle_asset_command(ctx, command),
        Commands::Borrowings { command } => workflow::handle_borrowing_command(ctx, command),
        Commands::ServiceRequests { command } => {
            workflow::handle_service_request_command(ctx, command)
        }
        Commands::Audits { command } => workflow::handle_audit_command(ctx, command),
    }
}

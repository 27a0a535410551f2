use anyhow::{Context, Result};

use ams_client::config::ClientConfig;
use ams_client::guard;
use ams_client::model::{LoginRequest, RegisterRequest};
use ams_client::views::{self, AdminDashboard, EmployeeDashboard};

use crate::cli_commands::ConfigCommands;

use super::{Ctx, print_json, view};

pub(super) fn handle_login_command(ctx: &Ctx, email: String, password: String) -> Result<()> {
    let landing = view(
        views::sign_in(&ctx.client, &ctx.session, &LoginRequest { email, password }),
        "Login failed",
    )?;
    let who = ctx
        .session
        .user_info()
        .ok()
        .and_then(|u| u.email.or(u.name))
        .unwrap_or_default();
    println!("Logged in as {} (home: {})", who, landing);
    Ok(())
}

pub(super) fn handle_register_command(ctx: &Ctx, form: RegisterRequest) -> Result<()> {
    match view(
        views::sign_up(&ctx.client, &ctx.session, &form),
        "Registration failed",
    )? {
        Some(landing) => println!("Registered and logged in (home: {})", landing),
        None => println!("Registered; run `ams login` to sign in"),
    }
    Ok(())
}

pub(super) fn handle_logout_command(ctx: &Ctx) -> Result<()> {
    ctx.session.clear();
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_whoami_command(ctx: &Ctx) -> Result<()> {
    ctx.require_session()?;
    let info = ctx
        .session
        .user_info()
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;
    print_json(&serde_json::json!({
        "user": info,
        "home": guard::home_route(&ctx.session),
    }))
}

pub(super) fn handle_config_command(ctx: &Ctx, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => print_json(&serde_json::json!({
            "base_url": ctx.config.base_url,
            "state_dir": ctx.config.state_dir.display().to_string(),
            "config_path": ctx.config.config_path().display().to_string(),
            "session_path": ctx.config.session_path().display().to_string(),
        })),
        ConfigCommands::Set => {
            let base_url = ctx
                .flag_base_url
                .clone()
                .context("nothing to set (pass --base-url <URL>)")?;
            let cfg = ClientConfig::new(base_url, ctx.config.state_dir.clone());
            cfg.save()
                .with_context(|| format!("save {}", cfg.config_path().display()))?;
            println!("Base URL set to {}", cfg.base_url);
            Ok(())
        }
    }
}

pub(super) fn handle_dashboard_command(ctx: &Ctx) -> Result<()> {
    ctx.require_session()?;
    if guard::landing_route(&ctx.session) == guard::ADMIN_HOME {
        return print_json(&AdminDashboard::load(&ctx.client));
    }
    let stats = EmployeeDashboard::load(&ctx.client, &ctx.session)
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;
    print_json(&stats)
}

//! Access decisions made before a protected view loads anything.

use crate::model::Role;
use crate::session::SessionStore;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const ADMIN_HOME: &str = "/admin";
pub const EMPLOYEE_HOME: &str = "/employee";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the view.
    Allow,
    /// Do not render; route to this path instead.
    Redirect(&'static str),
    /// Stay on the page and show that access is denied.
    AccessDenied,
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Gate for any protected view: a stored token is required.
pub fn require_session(session: &SessionStore) -> GuardDecision {
    if session.token().is_none() {
        tracing::debug!("no session token; routing to login");
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    GuardDecision::Allow
}

/// Gate for admin-only views.
pub fn require_admin(session: &SessionStore) -> GuardDecision {
    match require_session(session) {
        GuardDecision::Allow => {}
        other => return other,
    }
    let admin = session
        .user_role()
        .is_some_and(|r| Role::parse(&r).is_admin());
    if admin {
        GuardDecision::Allow
    } else {
        GuardDecision::AccessDenied
    }
}

/// Where the root path sends a visitor, by session.
///
/// An undecodable token is discarded so the visitor lands on the homepage
/// with a clean slate.
pub fn home_route(session: &SessionStore) -> &'static str {
    if session.token().is_none() {
        return HOME_PATH;
    }
    match session.user_info() {
        Ok(info) => match info.role() {
            Some(role) if role.is_admin() => ADMIN_HOME,
            Some(_) => EMPLOYEE_HOME,
            None => HOME_PATH,
        },
        Err(err) => {
            tracing::warn!(error = %err, "discarding undecodable token");
            session.discard();
            HOME_PATH
        }
    }
}

/// Landing page right after a successful sign-in.
pub fn landing_route(session: &SessionStore) -> &'static str {
    match session.user_role() {
        Some(role) if Role::parse(&role).is_admin() => ADMIN_HOME,
        _ => EMPLOYEE_HOME,
    }
}

#[cfg(test)]
#[path = "tests/guard_tests.rs"]
mod tests;

//! Session token store: the bearer token and everything derived from it.
//!
//! The raw token is the only authoritative entry. Every read re-derives
//! claims from it; nothing decoded is cached in memory, so a logout or a new
//! login is visible to the very next call.

use std::sync::Arc;

use anyhow::Result;

mod claims;
mod navigator;
mod storage;

pub use self::claims::UserInfo;
pub use self::navigator::{LogNavigator, Navigator, RecordingNavigator};
pub use self::storage::{FileStorage, MemoryStorage, SessionStorage};

pub(crate) use self::storage::write_atomic;

pub const TOKEN_KEY: &str = "ams_token";
pub const USER_KEY: &str = "ams_user";
pub const ROLE_KEY: &str = "ams_role";

/// Path a cleared session navigates to.
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No authentication token found")]
    NoToken,
    #[error("Invalid authentication token: {0}")]
    InvalidToken(String),
}

impl SessionError {
    /// What a view shows for either failure.
    pub fn user_message(&self) -> &'static str {
        "Your session is missing or invalid; please log in again."
    }
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>, navigator: Arc<dyn Navigator>) -> Self {
        Self { storage, navigator }
    }

    /// In-memory session with a logging navigator.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), Arc::new(LogNavigator))
    }

    /// The raw token, if one is stored and non-empty.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    fn claims(&self) -> Result<serde_json::Map<String, serde_json::Value>, SessionError> {
        let token = self.token().ok_or(SessionError::NoToken)?;
        claims::decode_payload(&token).inspect_err(|err| {
            tracing::debug!(error = %err, "token decode failed");
        })
    }

    pub fn employee_id(&self) -> Result<i64, SessionError> {
        claims::employee_id(&self.claims()?)
    }

    pub fn user_info(&self) -> Result<UserInfo, SessionError> {
        claims::user_info(&self.claims()?)
    }

    /// Best-effort role lookup; never fails.
    pub fn user_role(&self) -> Option<String> {
        self.claims().ok().as_ref().and_then(claims::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.employee_id().is_ok()
    }

    /// Stores a freshly issued token and refreshes the cached user and role.
    pub fn establish(&self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)?;
        match self.user_info() {
            Ok(info) => {
                self.storage.set(USER_KEY, &serde_json::to_string(&info)?)?;
                match info.role.as_deref() {
                    Some(role) => self.storage.set(ROLE_KEY, role)?,
                    None => self.storage.remove(ROLE_KEY)?,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored token could not be decoded");
                self.storage.remove(USER_KEY)?;
                self.storage.remove(ROLE_KEY)?;
            }
        }
        Ok(())
    }

    /// Removes the token and both caches without navigating.
    pub fn discard(&self) {
        for key in [TOKEN_KEY, USER_KEY, ROLE_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!(key, error = %format!("{:#}", err), "failed to remove session entry");
            }
        }
    }

    /// Removes all session entries, then hard-redirects to the root path.
    pub fn clear(&self) {
        self.discard();
        self.navigator.hard_redirect(ROOT_PATH);
    }
}

#[cfg(test)]
#[path = "tests/session/store_tests.rs"]
mod tests;

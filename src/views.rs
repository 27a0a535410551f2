//! What each screen loads, independent of how it is drawn.
//!
//! Loaders follow one pattern: guard, fetch (concurrently when a screen
//! needs several collections), classify failures, return plain data.

use crate::classify;
use crate::remote::ApiError;
use crate::session::SessionError;

mod auth;
mod dashboard;
mod join;
mod lifetime;
mod mine;

pub use self::auth::{SignUpForm, password_strength, sign_in, sign_up, validate_sign_up};
pub use self::dashboard::{AdminDashboard, EmployeeDashboard};
pub use self::join::{Fetch, join_or_default};
pub use self::lifetime::ViewLifetime;
pub use self::mine::{
    StatusCounts, empty_on_not_found, filter_by_status, my_assets, my_assigned_assets,
    my_audits, my_borrowings, my_service_requests,
};

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Invalid(String),

    #[error("{0:#}")]
    Storage(anyhow::Error),
}

impl ViewError {
    /// Text a view displays for this failure.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ViewError::Session(err) => err.user_message().to_string(),
            ViewError::Api(err) => classify::extract_message(err, fallback),
            ViewError::Invalid(msg) => msg.clone(),
            ViewError::Storage(err) => format!("{:#}", err),
        }
    }
}

//! Client library for the Asset Management System REST API.
//!
//! The pieces compose bottom-up: a [`session::SessionStore`] holds the bearer
//! token, a [`remote::HttpClient`] attaches it to every request and reacts to
//! 401s, and [`remote::AmsClient`] exposes one method per backend endpoint.

pub mod classify;
pub mod config;
pub mod guard;
pub mod model;
pub mod remote;
pub mod session;
pub mod views;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

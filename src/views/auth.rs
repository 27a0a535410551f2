use crate::guard;
use crate::model::{AuthResponse, LoginRequest, RegisterRequest};
use crate::remote::{AmsClient, ApiError};
use crate::session::SessionStore;

use super::ViewError;

/// Authenticates, stores the issued token, and returns the landing path.
pub fn sign_in(
    client: &AmsClient,
    session: &SessionStore,
    credentials: &LoginRequest,
) -> Result<&'static str, ViewError> {
    let response = client.login(credentials)?;
    let auth: AuthResponse = response.json()?;
    if auth.token.trim().is_empty() {
        return Err(ApiError::Decode("login response carried an empty token".to_string()).into());
    }
    session.establish(&auth.token).map_err(ViewError::Storage)?;
    let landing = guard::landing_route(session);
    tracing::info!(landing, "signed in");
    Ok(landing)
}

pub type SignUpForm = RegisterRequest;

/// One point each for length >= 8, uppercase, lowercase, digit, symbol.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.into_iter().filter(|ok| *ok).count() as u8
}

/// `local@domain` where some `.` in the domain has text on both sides.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Checks run before the registration call; the first failure wins.
pub fn validate_sign_up(form: &SignUpForm) -> Result<(), String> {
    if form.name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if form.email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !looks_like_email(&form.email) {
        return Err("Please enter a valid email".to_string());
    }
    if form.password.chars().count() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password_strength(&form.password) < 3 {
        return Err(
            "Password is too weak. Use uppercase, lowercase, numbers, and symbols.".to_string(),
        );
    }
    if form.contact_number.trim().is_empty() {
        return Err("Contact number is required".to_string());
    }
    if form.address.trim().is_empty() {
        return Err("Address is required".to_string());
    }
    Ok(())
}

/// Registers an account. Returns the landing path when the backend issued a
/// token (the session is then established), `None` when the user still has
/// to sign in.
pub fn sign_up(
    client: &AmsClient,
    session: &SessionStore,
    form: &SignUpForm,
) -> Result<Option<&'static str>, ViewError> {
    validate_sign_up(form).map_err(ViewError::Invalid)?;
    let response = client.register(form)?;
    match response.json::<AuthResponse>() {
        Ok(auth) if !auth.token.trim().is_empty() => {
            session.establish(&auth.token).map_err(ViewError::Storage)?;
            Ok(Some(guard::landing_route(session)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "../tests/views/auth_tests.rs"]
mod tests;

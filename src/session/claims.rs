//! Decoding of the bearer token's payload segment.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::model::Role;

use super::SessionError;

/// Claims the backend places in the token payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub employee_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().map(Role::parse)
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|r| r.is_admin())
    }
}

/// Decodes the middle segment of a three-segment token into a JSON object.
pub(crate) fn decode_payload(token: &str) -> Result<serde_json::Map<String, serde_json::Value>, SessionError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::InvalidToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }

    // Accept both alphabets, padded or not.
    let normalized: String = segments[1]
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| SessionError::InvalidToken(format!("payload is not base64: {}", e)))?;

    let value: serde_json::Value = serde_json::from_slice(&bytes)
        .map_err(|e| SessionError::InvalidToken(format!("payload is not JSON: {}", e)))?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(SessionError::InvalidToken(
            "payload is not a JSON object".to_string(),
        )),
    }
}

pub(crate) fn employee_id(
    claims: &serde_json::Map<String, serde_json::Value>,
) -> Result<i64, SessionError> {
    let id = match claims.get("employeeId") {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match id {
        Some(id) if id != 0 => Ok(id),
        _ => Err(SessionError::InvalidToken(
            "no employee id found in token".to_string(),
        )),
    }
}

fn string_claim(claims: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<String> {
    claims
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub(crate) fn user_info(
    claims: &serde_json::Map<String, serde_json::Value>,
) -> Result<UserInfo, SessionError> {
    Ok(UserInfo {
        employee_id: employee_id(claims)?,
        name: string_claim(claims, "name"),
        email: string_claim(claims, "email").or_else(|| string_claim(claims, "sub")),
        role: string_claim(claims, "role"),
    })
}

pub(crate) fn role(claims: &serde_json::Map<String, serde_json::Value>) -> Option<String> {
    string_claim(claims, "role")
}

#[cfg(test)]
#[path = "../tests/session/claims_tests.rs"]
mod tests;

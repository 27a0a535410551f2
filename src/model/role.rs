pub const ADMIN_ROLE: &str = "ADMIN";

/// A role claim. Comparison is ASCII case-insensitive everywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employee(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(ADMIN_ROLE) {
            Role::Admin
        } else {
            Role::Employee(raw.to_string())
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => ADMIN_ROLE,
            Role::Employee(raw) => raw,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

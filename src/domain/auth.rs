use serde::{Deserialize, Serialize};

/// Authorization tiers, ordered from least to most privileged.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Read-only access to every page.
    Viewer,
    /// May record movements and manage products and warehouses.
    Operator,
    /// May additionally manage user accounts and roles.
    Admin,
    SuperAdmin,
}

impl Default for Role {
    fn default() -> Self {
        Self::Viewer
    }
}

impl Role {
    /// Whether this role meets or exceeds the `required` tier.
    pub fn grants(self, required: Role) -> bool {
        self >= required
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "operator" => Self::Operator,
            "admin" => Self::Admin,
            "super_admin" => Self::SuperAdmin,
            _ => Self::Viewer,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Viewer => "viewer",
            Self::Operator => "operator",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        };
        f.write_str(label)
    }
}

/// Claims describing the signed-in operator, carried in the session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthenticatedUser {
    /// Profile identifier, stringified per JWT convention.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Numeric profile identifier behind `sub`.
    pub fn profile_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

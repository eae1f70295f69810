use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::auth::Role;

/// Domain representation of a user account.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Profile {
    /// Unique identifier of the profile, also the auth identity.
    pub id: i32,
    pub email: String,
    pub full_name: String,
    /// Sole authorization signal for this account.
    pub role: Role,
    /// Timestamp for when the profile was created.
    pub created_at: NaiveDateTime,
}

/// A profile together with its stored password hash, used by the login flow
/// only. Kept out of [`Profile`] so the hash never reaches the templates.
#[derive(Debug, Clone)]
pub struct ProfileCredentials {
    pub profile: Profile,
    pub password_hash: String,
}

/// Payload required to insert a new profile. The password arrives already
/// hashed; the plain text never reaches the repository.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: Role,
}

impl NewProfile {
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            password_hash: password_hash.into(),
            role: Role::default(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

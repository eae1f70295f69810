use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::auth::Role;

/// Minimum accepted password length for new accounts.
const PASSWORD_MIN_LEN: u64 = 8;

pub type UserFormResult<T> = Result<T, UserFormError>;

#[derive(Debug, Error)]
pub enum UserFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("full name cannot be empty")]
    EmptyName,
}

/// Form payload emitted by the administrative "create user" dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUserForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = PASSWORD_MIN_LEN))]
    pub password: String,
    pub role: String,
}

/// Sanitized account data ready for hashing and persistence.
#[derive(Debug)]
pub struct NewUserInput {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

impl AddUserForm {
    pub fn into_new_user(self) -> UserFormResult<NewUserInput> {
        self.validate()?;

        let full_name = self.full_name.trim().to_string();
        if full_name.is_empty() {
            return Err(UserFormError::EmptyName);
        }

        Ok(NewUserInput {
            email: self.email.trim().to_lowercase(),
            full_name,
            password: self.password,
            role: self.role.as_str().into(),
        })
    }
}

/// Form payload emitted by the role-change dialog.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleForm {
    pub role: String,
}

impl UpdateRoleForm {
    pub fn role(&self) -> Role {
        self.role.as_str().into()
    }
}

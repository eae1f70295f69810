use thiserror::Error;

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod inventory;
pub mod ledger;
pub mod main;
pub mod products;
pub mod reports;
pub mod sales;
pub mod users;
pub mod warehouses;

/// Errors surfaced by the service layer to the routes. Every variant maps to
/// a user-visible outcome; nothing is retried automatically.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller's role does not grant the operation.
    #[error("unauthorized")]
    Unauthorized,
    /// The targeted record does not exist.
    #[error("not found")]
    NotFound,
    /// Input was rejected before any storage call.
    #[error("{0}")]
    Form(String),
    /// Login failed; deliberately silent about which part was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// A transfer committed its debit leg but the credit leg failed. Stock has
    /// left the source warehouse without arriving at the destination; the
    /// message carries enough detail for manual reconciliation and no
    /// compensating write is performed.
    #[error(
        "transfer of {quantity} x product {product_id} left warehouse {from_warehouse_id} \
         but the credit to warehouse {to_warehouse_id} failed: {source}"
    )]
    TransferPartiallyApplied {
        product_id: i32,
        from_warehouse_id: i32,
        to_warehouse_id: i32,
        quantity: i32,
        #[source]
        source: RepositoryError,
    },
    /// Storage rejected a read or write.
    #[error(transparent)]
    Repository(RepositoryError),
    /// Unexpected local failure, for example password hashing.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Reject callers whose role does not reach the `required` tier.
pub fn ensure_role(user: &AuthenticatedUser, required: Role) -> ServiceResult<()> {
    if user.role.grants(required) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Numeric profile id of the acting user, rejecting malformed claims.
pub fn acting_profile_id(user: &AuthenticatedUser) -> ServiceResult<i32> {
    user.profile_id().ok_or(ServiceError::Unauthorized)
}

use validator::Validate;

use crate::domain::profile::Profile;
use crate::forms::auth::LoginForm;
use crate::repository::ProfileReader;
use crate::services::{ServiceError, ServiceResult};

/// Verify login credentials against the stored profile. Returns the profile
/// on success; every failure mode collapses into `InvalidCredentials` so the
/// login page never leaks whether the email exists.
pub fn authenticate<R>(repo: &R, form: &LoginForm) -> ServiceResult<Profile>
where
    R: ProfileReader + ?Sized,
{
    form.validate()
        .map_err(|_| ServiceError::InvalidCredentials)?;

    let email = form.email.trim().to_lowercase();
    let credentials = repo
        .get_credentials_by_email(&email)?
        .ok_or(ServiceError::InvalidCredentials)?;

    let matches = bcrypt::verify(&form.password, &credentials.password_hash)
        .map_err(|_| ServiceError::InvalidCredentials)?;
    if !matches {
        return Err(ServiceError::InvalidCredentials);
    }

    Ok(credentials.profile)
}

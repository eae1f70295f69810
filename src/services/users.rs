use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::profile::{NewProfile, Profile};
use crate::forms::users::{AddUserForm, UpdateRoleForm};
use crate::repository::{ProfileReader, ProfileWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Data required to render the users page.
pub struct UsersPageData {
    pub profiles: Vec<Profile>,
}

/// Loads the user management page.
pub fn load_users_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<UsersPageData>
where
    R: ProfileReader + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let profiles = repo.list_profiles().map_err(ServiceError::from)?;

    Ok(UsersPageData { profiles })
}

/// Creates a new user account with a hashed password. The caller's own
/// session is untouched; only a profile row is written.
pub fn create_user<R>(repo: &R, user: &AuthenticatedUser, form: AddUserForm) -> ServiceResult<Profile>
where
    R: ProfileReader + ProfileWriter + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let input = form
        .into_new_user()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    // A caller may not mint accounts above their own tier.
    if !user.role.grants(input.role) {
        return Err(ServiceError::Unauthorized);
    }

    if repo.get_credentials_by_email(&input.email)?.is_some() {
        return Err(ServiceError::Form(format!(
            "an account for {} already exists",
            input.email
        )));
    }

    let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)
        .map_err(|err| ServiceError::Internal(err.to_string()))?;

    let payload =
        NewProfile::new(input.email, input.full_name, password_hash).with_role(input.role);

    repo.create_profile(&payload).map_err(ServiceError::from)
}

/// Changes the role of an existing profile.
pub fn change_role<R>(
    repo: &R,
    user: &AuthenticatedUser,
    profile_id: i32,
    form: UpdateRoleForm,
) -> ServiceResult<Profile>
where
    R: ProfileWriter + ?Sized,
{
    ensure_role(user, Role::Admin)?;

    let role = form.role();

    // Same ceiling as account creation.
    if !user.role.grants(role) {
        return Err(ServiceError::Unauthorized);
    }

    repo.set_profile_role(profile_id, role)
        .map_err(ServiceError::from)
}

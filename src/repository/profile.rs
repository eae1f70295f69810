use diesel::prelude::*;

use crate::domain::auth::Role;
use crate::domain::profile::{
    NewProfile as DomainNewProfile, Profile as DomainProfile, ProfileCredentials,
};
use crate::models::profile::{NewProfile as DbNewProfile, Profile as DbProfile};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProfileReader, ProfileWriter};

impl ProfileReader for DieselRepository {
    fn get_profile_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProfile>> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;
        let profile = profiles::table
            .filter(profiles::id.eq(id))
            .first::<DbProfile>(&mut conn)
            .optional()?;

        Ok(profile.map(Into::into))
    }

    fn get_credentials_by_email(
        &self,
        email: &str,
    ) -> RepositoryResult<Option<ProfileCredentials>> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;
        let profile = profiles::table
            .filter(profiles::email.eq(email))
            .first::<DbProfile>(&mut conn)
            .optional()?;

        Ok(profile.map(DbProfile::into_credentials))
    }

    fn list_profiles(&self) -> RepositoryResult<Vec<DomainProfile>> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;
        let items = profiles::table
            .order(profiles::created_at.desc())
            .load::<DbProfile>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl ProfileWriter for DieselRepository {
    fn create_profile(&self, new_profile: &DomainNewProfile) -> RepositoryResult<DomainProfile> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;
        let db_new = DbNewProfile::from(new_profile);

        let created = diesel::insert_into(profiles::table)
            .values(&db_new)
            .get_result::<DbProfile>(&mut conn)?;

        Ok(created.into())
    }

    fn set_profile_role(&self, profile_id: i32, role: Role) -> RepositoryResult<DomainProfile> {
        use crate::schema::profiles;

        let mut conn = self.conn()?;

        let updated = diesel::update(profiles::table.filter(profiles::id.eq(profile_id)))
            .set(profiles::role.eq(role.to_string()))
            .get_result::<DbProfile>(&mut conn)?;

        Ok(updated.into())
    }
}

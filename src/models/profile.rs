use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::profile::{
    NewProfile as DomainNewProfile, Profile as DomainProfile, ProfileCredentials,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::profiles)]
pub struct Profile {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::profiles)]
pub struct NewProfile<'a> {
    pub email: &'a str,
    pub full_name: &'a str,
    pub password_hash: &'a str,
    pub role: String,
}

impl Profile {
    pub fn into_credentials(self) -> ProfileCredentials {
        let password_hash = self.password_hash.clone();
        ProfileCredentials {
            profile: self.into(),
            password_hash,
        }
    }
}

impl From<Profile> for DomainProfile {
    fn from(value: Profile) -> Self {
        Self {
            id: value.id,
            email: value.email,
            full_name: value.full_name,
            role: value.role.as_str().into(),
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProfile> for NewProfile<'a> {
    fn from(value: &'a DomainNewProfile) -> Self {
        Self {
            email: value.email.as_str(),
            full_name: value.full_name.as_str(),
            password_hash: value.password_hash.as_str(),
            role: value.role.to_string(),
        }
    }
}

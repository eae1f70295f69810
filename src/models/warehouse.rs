use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::warehouse::{
    NewWarehouse as DomainNewWarehouse, UpdateWarehouse as DomainUpdateWarehouse,
    Warehouse as DomainWarehouse,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::warehouses)]
pub struct Warehouse {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::warehouses)]
pub struct NewWarehouse<'a> {
    pub name: &'a str,
    pub location: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::warehouses)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateWarehouse<'a> {
    pub name: &'a str,
    pub location: Option<&'a str>,
}

impl From<Warehouse> for DomainWarehouse {
    fn from(value: Warehouse) -> Self {
        Self {
            id: value.id,
            name: value.name,
            location: value.location,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewWarehouse> for NewWarehouse<'a> {
    fn from(value: &'a DomainNewWarehouse) -> Self {
        Self {
            name: value.name.as_str(),
            location: value.location.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateWarehouse> for UpdateWarehouse<'a> {
    fn from(value: &'a DomainUpdateWarehouse) -> Self {
        Self {
            name: value.name.as_str(),
            location: value.location.as_deref(),
        }
    }
}

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub price_cents: i64,
    pub min_stock: i32,
    pub unit: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub sku: &'a str,
    pub name: &'a str,
    pub category: Option<&'a str>,
    pub price_cents: i64,
    pub min_stock: i32,
    pub unit: &'a str,
    pub image_url: Option<&'a str>,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub sku: &'a str,
    pub name: &'a str,
    pub category: Option<&'a str>,
    pub price_cents: i64,
    pub min_stock: i32,
    pub unit: &'a str,
    pub image_url: Option<&'a str>,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            sku: value.sku,
            name: value.name,
            category: value.category,
            price_cents: value.price_cents,
            min_stock: value.min_stock,
            unit: value.unit,
            image_url: value.image_url,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            sku: value.sku.as_str(),
            name: value.name.as_str(),
            category: value.category.as_deref(),
            price_cents: value.price_cents,
            min_stock: value.min_stock,
            unit: value.unit.as_str(),
            image_url: value.image_url.as_deref(),
            is_active: value.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            sku: value.sku.as_str(),
            name: value.name.as_str(),
            category: value.category.as_deref(),
            price_cents: value.price_cents,
            min_stock: value.min_stock,
            unit: value.unit.as_str(),
            image_url: value.image_url.as_deref(),
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}

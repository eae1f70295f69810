use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 128;

/// Maximum allowed length for a SKU.
const SKU_MAX_LEN: u64 = 64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after trimming.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The provided SKU is empty after trimming.
    #[error("product SKU cannot be empty")]
    EmptySku,
    /// The price could not be parsed or is negative.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
    /// The minimum stock threshold could not be parsed.
    #[error("invalid minimum stock `{value}`")]
    InvalidMinStock { value: String },
    /// The minimum stock threshold is negative.
    #[error("minimum stock cannot be negative")]
    NegativeMinStock,
}

/// Form payload emitted when creating or editing a product. On creation the
/// optional initial-stock pair requests a follow-up IN movement.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, max = SKU_MAX_LEN))]
    pub sku: String,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub category: Option<String>,
    /// Decimal price as typed, for example `12.50`.
    pub price: String,
    /// Minimum stock threshold as typed; blank means zero.
    #[serde(default)]
    pub min_stock: String,
    pub unit: Option<String>,
    pub image_url: Option<String>,
    /// Checkbox field; present when checked.
    #[serde(default)]
    pub is_active: Option<String>,
    /// Optional warehouse for the initial stock movement (empty when unset).
    #[serde(default)]
    pub initial_warehouse_id: Option<String>,
    /// Optional initial stock quantity (empty when unset).
    #[serde(default)]
    pub initial_quantity: Option<String>,
}

/// Initial stock requested alongside product creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialStock {
    pub warehouse_id: i32,
    pub quantity: i32,
}

impl ProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct` plus the
    /// requested initial stock, if a warehouse and positive quantity were
    /// supplied.
    pub fn into_new_product(self) -> ProductFormResult<(NewProduct, Option<InitialStock>)> {
        self.validate()?;

        let initial_stock = self.initial_stock();
        let (sku, name, category, unit, image_url) = self.sanitized_text_fields()?;
        let price_cents = parse_price_cents(&self.price)?;
        let min_stock = parse_min_stock(&self.min_stock)?;

        let mut new_product = NewProduct::new(sku, name)
            .with_price_cents(price_cents)
            .with_min_stock(min_stock)
            .active(self.is_active.is_some());

        if let Some(category) = category {
            new_product = new_product.with_category(category);
        }
        if let Some(unit) = unit {
            new_product = new_product.with_unit(unit);
        }
        if let Some(image_url) = image_url {
            new_product = new_product.with_image_url(image_url);
        }

        Ok((new_product, initial_stock))
    }

    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let (sku, name, category, unit, image_url) = self.sanitized_text_fields()?;
        let price_cents = parse_price_cents(&self.price)?;
        let min_stock = parse_min_stock(&self.min_stock)?;

        Ok(UpdateProduct {
            sku,
            name,
            category,
            price_cents,
            min_stock,
            unit: unit.unwrap_or_else(|| "units".to_string()),
            image_url,
            is_active: self.is_active.is_some(),
            updated_at: chrono::Local::now().naive_utc(),
        })
    }

    fn initial_stock(&self) -> Option<InitialStock> {
        let warehouse_id = self
            .initial_warehouse_id
            .as_deref()
            .and_then(|value| value.trim().parse::<i32>().ok())?;
        let quantity = self
            .initial_quantity
            .as_deref()
            .and_then(|value| value.trim().parse::<i32>().ok())
            .filter(|quantity| *quantity > 0)?;

        Some(InitialStock {
            warehouse_id,
            quantity,
        })
    }

    #[allow(clippy::type_complexity)]
    fn sanitized_text_fields(
        &self,
    ) -> ProductFormResult<(
        String,
        String,
        Option<String>,
        Option<String>,
        Option<String>,
    )> {
        let sku = self.sku.trim().to_string();
        if sku.is_empty() {
            return Err(ProductFormError::EmptySku);
        }

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let category = trimmed_optional(self.category.as_deref());
        let unit = trimmed_optional(self.unit.as_deref());
        let image_url = trimmed_optional(self.image_url.as_deref());

        Ok((sku, name, category, unit, image_url))
    }
}

fn trimmed_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse the minimum stock field; a blank input means no threshold.
fn parse_min_stock(value: &str) -> ProductFormResult<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let parsed = trimmed
        .parse::<i32>()
        .map_err(|_| ProductFormError::InvalidMinStock {
            value: value.to_string(),
        })?;
    if parsed < 0 {
        return Err(ProductFormError::NegativeMinStock);
    }

    Ok(parsed)
}

/// Parse a decimal price string into non-negative minor units.
fn parse_price_cents(value: &str) -> ProductFormResult<i64> {
    let trimmed = value.trim();
    let invalid = || ProductFormError::InvalidPrice {
        value: value.to_string(),
    };

    let parsed = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(invalid());
    }

    Ok((parsed * 100.0).round() as i64)
}

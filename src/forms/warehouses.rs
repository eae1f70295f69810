use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::warehouse::{NewWarehouse, UpdateWarehouse};

/// Maximum allowed length for a warehouse name.
const NAME_MAX_LEN: u64 = 128;

pub type WarehouseFormResult<T> = Result<T, WarehouseFormError>;

#[derive(Debug, Error)]
pub enum WarehouseFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("warehouse name cannot be empty")]
    EmptyName,
}

/// Form payload emitted when creating or editing a warehouse.
#[derive(Debug, Deserialize, Validate)]
pub struct WarehouseForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub location: Option<String>,
}

impl WarehouseForm {
    pub fn into_new_warehouse(self) -> WarehouseFormResult<NewWarehouse> {
        let (name, location) = self.sanitize()?;

        let mut new_warehouse = NewWarehouse::new(name);
        if let Some(location) = location {
            new_warehouse = new_warehouse.with_location(location);
        }

        Ok(new_warehouse)
    }

    pub fn into_update_warehouse(self) -> WarehouseFormResult<UpdateWarehouse> {
        let (name, location) = self.sanitize()?;
        Ok(UpdateWarehouse { name, location })
    }

    fn sanitize(self) -> WarehouseFormResult<(String, Option<String>)> {
        self.validate()?;

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(WarehouseFormError::EmptyName);
        }

        let location = self
            .location
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok((name, location))
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a storage location.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Warehouse {
    /// Unique identifier of the warehouse.
    pub id: i32,
    /// Human-readable name of the warehouse.
    pub name: String,
    /// Optional free-text location description.
    pub location: Option<String>,
    /// Timestamp for when the warehouse record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new warehouse.
#[derive(Debug, Clone)]
pub struct NewWarehouse {
    pub name: String,
    pub location: Option<String>,
}

impl NewWarehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Patch data applied when updating an existing warehouse.
#[derive(Debug, Clone)]
pub struct UpdateWarehouse {
    pub name: String,
    pub location: Option<String>,
}

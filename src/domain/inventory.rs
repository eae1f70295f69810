use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::warehouse::Warehouse;

/// Current stock level of one product in one warehouse. This is a derived
/// view: the storage layer keeps it equal to the signed sum of movements for
/// the pair, so the application never writes it directly.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InventoryLevel {
    /// Unique identifier of the inventory row.
    pub id: i32,
    /// Signed sum of movement quantities for this (product, warehouse) pair.
    pub quantity: i32,
    /// Timestamp of the last movement applied to this pair.
    pub updated_at: NaiveDateTime,
    /// Product this level belongs to.
    pub product: Product,
    /// Warehouse this level belongs to.
    pub warehouse: Warehouse,
}

impl InventoryLevel {
    /// Whether the level sits below the product's minimum stock threshold.
    pub fn is_low(&self) -> bool {
        self.quantity < self.product.min_stock
    }
}

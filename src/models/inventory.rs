use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::inventory::InventoryLevel as DomainInventoryLevel;
use crate::models::product::Product;
use crate::models::warehouse::Warehouse;

/// Derived stock snapshot row. Maintained by a storage-side trigger on
/// movement inserts; the application never writes this table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::inventory)]
pub struct InventoryRow {
    pub id: i32,
    pub product_id: i32,
    pub warehouse_id: i32,
    pub quantity: i32,
    pub updated_at: NaiveDateTime,
}

impl InventoryRow {
    pub fn into_domain(self, product: Product, warehouse: Warehouse) -> DomainInventoryLevel {
        DomainInventoryLevel {
            id: self.id,
            quantity: self.quantity,
            updated_at: self.updated_at,
            product: product.into(),
            warehouse: warehouse.into(),
        }
    }
}

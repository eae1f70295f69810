use diesel::prelude::*;

use crate::domain::inventory::InventoryLevel as DomainInventoryLevel;
use crate::models::inventory::InventoryRow as DbInventoryRow;
use crate::models::product::Product as DbProduct;
use crate::models::warehouse::Warehouse as DbWarehouse;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, InventoryReader};

impl InventoryReader for DieselRepository {
    fn list_inventory_levels(&self) -> RepositoryResult<Vec<DomainInventoryLevel>> {
        use crate::schema::{inventory, products, warehouses};

        let mut conn = self.conn()?;

        let rows = inventory::table
            .inner_join(products::table)
            .inner_join(warehouses::table)
            .order(inventory::updated_at.desc())
            .select((
                DbInventoryRow::as_select(),
                DbProduct::as_select(),
                DbWarehouse::as_select(),
            ))
            .load::<(DbInventoryRow, DbProduct, DbWarehouse)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(row, product, warehouse)| row.into_domain(product, warehouse))
            .collect())
    }
}

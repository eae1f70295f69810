use diesel::prelude::*;

use crate::domain::warehouse::{
    NewWarehouse as DomainNewWarehouse, UpdateWarehouse as DomainUpdateWarehouse,
    Warehouse as DomainWarehouse,
};
use crate::models::warehouse::{
    NewWarehouse as DbNewWarehouse, UpdateWarehouse as DbUpdateWarehouse,
    Warehouse as DbWarehouse,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, WarehouseReader, WarehouseWriter};

impl WarehouseReader for DieselRepository {
    fn get_warehouse_by_id(&self, id: i32) -> RepositoryResult<Option<DomainWarehouse>> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;
        let warehouse = warehouses::table
            .filter(warehouses::id.eq(id))
            .first::<DbWarehouse>(&mut conn)
            .optional()?;

        Ok(warehouse.map(Into::into))
    }

    fn list_warehouses(&self) -> RepositoryResult<Vec<DomainWarehouse>> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;
        let items = warehouses::table
            .order(warehouses::created_at.desc())
            .load::<DbWarehouse>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl WarehouseWriter for DieselRepository {
    fn create_warehouse(
        &self,
        new_warehouse: &DomainNewWarehouse,
    ) -> RepositoryResult<DomainWarehouse> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;
        let db_new = DbNewWarehouse::from(new_warehouse);

        let created = diesel::insert_into(warehouses::table)
            .values(&db_new)
            .get_result::<DbWarehouse>(&mut conn)?;

        Ok(created.into())
    }

    fn update_warehouse(
        &self,
        warehouse_id: i32,
        updates: &DomainUpdateWarehouse,
    ) -> RepositoryResult<DomainWarehouse> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateWarehouse::from(updates);

        let updated = diesel::update(warehouses::table.filter(warehouses::id.eq(warehouse_id)))
            .set(&db_updates)
            .get_result::<DbWarehouse>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_warehouse(&self, warehouse_id: i32) -> RepositoryResult<()> {
        use crate::schema::warehouses;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(warehouses::table.filter(warehouses::id.eq(warehouse_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

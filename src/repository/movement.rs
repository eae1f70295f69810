use diesel::prelude::*;

use crate::domain::movement::{
    Movement as DomainMovement, MovementListQuery, MovementProduct, MovementWarehouse,
    NewMovement as DomainNewMovement,
};
use crate::models::movement::{Movement as DbMovement, NewMovement as DbNewMovement};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, MovementReader, MovementWriter};

type ProductColumns = (i32, String, String, String, Option<String>);
type WarehouseColumns = (i32, String);

impl MovementReader for DieselRepository {
    fn list_movements(
        &self,
        query: MovementListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainMovement>)> {
        use crate::schema::{movements, products, warehouses};

        let mut conn = self.conn()?;

        let mut count_query = movements::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(movement_type) = query.movement_type {
            count_query = count_query.filter(movements::movement_type.eq(movement_type.to_string()));
        }

        if let Some(product_id) = query.product_id {
            count_query = count_query.filter(movements::product_id.eq(product_id));
        }

        if let Some(warehouse_id) = query.warehouse_id {
            count_query = count_query.filter(movements::warehouse_id.eq(warehouse_id));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = movements::table
            .inner_join(products::table)
            .inner_join(warehouses::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(movement_type) = query.movement_type {
            items = items.filter(movements::movement_type.eq(movement_type.to_string()));
        }

        if let Some(product_id) = query.product_id {
            items = items.filter(movements::product_id.eq(product_id));
        }

        if let Some(warehouse_id) = query.warehouse_id {
            items = items.filter(movements::warehouse_id.eq(warehouse_id));
        }

        items = items.order(movements::created_at.desc());

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items
            .select((
                DbMovement::as_select(),
                (
                    products::id,
                    products::name,
                    products::sku,
                    products::unit,
                    products::image_url,
                ),
                (warehouses::id, warehouses::name),
            ))
            .load::<(DbMovement, ProductColumns, WarehouseColumns)>(&mut conn)?;

        let domain_movements = rows
            .into_iter()
            .map(|(movement, product, warehouse)| {
                let (product_id, name, sku, unit, image_url) = product;
                let (warehouse_id, warehouse_name) = warehouse;
                movement.into_domain_with(
                    MovementProduct {
                        id: product_id,
                        name,
                        sku,
                        unit,
                        image_url,
                    },
                    MovementWarehouse {
                        id: warehouse_id,
                        name: warehouse_name,
                    },
                )
            })
            .collect();

        Ok((total, domain_movements))
    }
}

impl MovementWriter for DieselRepository {
    fn create_movement(
        &self,
        new_movement: &DomainNewMovement,
    ) -> RepositoryResult<DomainMovement> {
        use crate::schema::movements;

        let mut conn = self.conn()?;
        let db_new = DbNewMovement::from(new_movement);

        let created = diesel::insert_into(movements::table)
            .values(&db_new)
            .get_result::<DbMovement>(&mut conn)?;

        Ok(created.into())
    }
}

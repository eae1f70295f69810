use crate::db::{DbConnection, DbPool};
use crate::domain::auth::Role;
use crate::domain::inventory::InventoryLevel;
use crate::domain::movement::{Movement, MovementListQuery, NewMovement};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::profile::{NewProfile, Profile, ProfileCredentials};
use crate::domain::warehouse::{NewWarehouse, UpdateWarehouse, Warehouse};

pub mod errors;
pub mod inventory;
pub mod movement;
pub mod product;
pub mod profile;
pub mod warehouse;

#[cfg(test)]
pub mod mock;

use errors::RepositoryResult;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over warehouse records.
pub trait WarehouseReader {
    fn get_warehouse_by_id(&self, id: i32) -> RepositoryResult<Option<Warehouse>>;
    fn list_warehouses(&self) -> RepositoryResult<Vec<Warehouse>>;
}

/// Write operations over warehouse records.
pub trait WarehouseWriter {
    fn create_warehouse(&self, new_warehouse: &NewWarehouse) -> RepositoryResult<Warehouse>;
    fn update_warehouse(
        &self,
        warehouse_id: i32,
        updates: &UpdateWarehouse,
    ) -> RepositoryResult<Warehouse>;
    fn delete_warehouse(&self, warehouse_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_product_by_sku(&self, sku: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over the movement ledger.
pub trait MovementReader {
    fn list_movements(&self, query: MovementListQuery)
    -> RepositoryResult<(usize, Vec<Movement>)>;
}

/// Write operations over the movement ledger. Movements are write-once facts:
/// there is deliberately no update or delete here.
pub trait MovementWriter {
    fn create_movement(&self, new_movement: &NewMovement) -> RepositoryResult<Movement>;
}

/// Read-only operations over the derived inventory view.
pub trait InventoryReader {
    fn list_inventory_levels(&self) -> RepositoryResult<Vec<InventoryLevel>>;
}

/// Read-only operations over user profiles.
pub trait ProfileReader {
    fn get_profile_by_id(&self, id: i32) -> RepositoryResult<Option<Profile>>;
    fn get_credentials_by_email(&self, email: &str)
    -> RepositoryResult<Option<ProfileCredentials>>;
    fn list_profiles(&self) -> RepositoryResult<Vec<Profile>>;
}

/// Write operations over user profiles.
pub trait ProfileWriter {
    fn create_profile(&self, new_profile: &NewProfile) -> RepositoryResult<Profile>;
    fn set_profile_role(&self, profile_id: i32, role: Role) -> RepositoryResult<Profile>;
}

use mockall::mock;

use super::{
    InventoryReader, MovementReader, MovementWriter, ProductReader, ProductWriter, ProfileReader,
    ProfileWriter, WarehouseReader, WarehouseWriter,
};
use crate::domain::auth::Role;
use crate::domain::inventory::InventoryLevel;
use crate::domain::movement::{Movement, MovementListQuery, NewMovement};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};
use crate::domain::profile::{NewProfile, Profile, ProfileCredentials};
use crate::domain::warehouse::{NewWarehouse, UpdateWarehouse, Warehouse};
use crate::repository::errors::RepositoryResult;

mock! {
    pub WarehouseReader {}

    impl WarehouseReader for WarehouseReader {
        fn get_warehouse_by_id(&self, id: i32) -> RepositoryResult<Option<Warehouse>>;
        fn list_warehouses(&self) -> RepositoryResult<Vec<Warehouse>>;
    }
}

mock! {
    pub WarehouseWriter {}

    impl WarehouseWriter for WarehouseWriter {
        fn create_warehouse(&self, new_warehouse: &NewWarehouse) -> RepositoryResult<Warehouse>;
        fn update_warehouse(&self, warehouse_id: i32, updates: &UpdateWarehouse) -> RepositoryResult<Warehouse>;
        fn delete_warehouse(&self, warehouse_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn get_product_by_sku(&self, sku: &str) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub MovementReader {}

    impl MovementReader for MovementReader {
        fn list_movements(&self, query: MovementListQuery) -> RepositoryResult<(usize, Vec<Movement>)>;
    }
}

mock! {
    pub MovementWriter {}

    impl MovementWriter for MovementWriter {
        fn create_movement(&self, new_movement: &NewMovement) -> RepositoryResult<Movement>;
    }
}

mock! {
    pub InventoryReader {}

    impl InventoryReader for InventoryReader {
        fn list_inventory_levels(&self) -> RepositoryResult<Vec<InventoryLevel>>;
    }
}

mock! {
    pub ProfileReader {}

    impl ProfileReader for ProfileReader {
        fn get_profile_by_id(&self, id: i32) -> RepositoryResult<Option<Profile>>;
        fn get_credentials_by_email(&self, email: &str) -> RepositoryResult<Option<ProfileCredentials>>;
        fn list_profiles(&self) -> RepositoryResult<Vec<Profile>>;
    }
}

mock! {
    pub ProfileWriter {}

    impl ProfileWriter for ProfileWriter {
        fn create_profile(&self, new_profile: &NewProfile) -> RepositoryResult<Profile>;
        fn set_profile_role(&self, profile_id: i32, role: Role) -> RepositoryResult<Profile>;
    }
}

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::inventory::InventoryLevel;
use crate::domain::product::{Product, ProductListQuery};
use crate::domain::warehouse::Warehouse;
use crate::repository::{InventoryReader, ProductReader, WarehouseReader};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Data required to render the inventory page: the derived stock levels plus
/// the option lists for the adjustment and transfer dialogs.
pub struct InventoryPageData {
    pub levels: Vec<InventoryLevel>,
    pub low_stock: usize,
    pub products: Vec<Product>,
    pub warehouses: Vec<Warehouse>,
}

/// Loads the inventory overview page. Levels come straight from the derived
/// view, newest update first; they are never recomputed in-process.
pub fn load_inventory_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<InventoryPageData>
where
    R: InventoryReader + ProductReader + WarehouseReader + ?Sized,
{
    ensure_role(user, Role::Viewer)?;

    let levels = repo.list_inventory_levels().map_err(ServiceError::from)?;
    let (_, products) = repo
        .list_products(ProductListQuery::new())
        .map_err(ServiceError::from)?;
    let warehouses = repo.list_warehouses().map_err(ServiceError::from)?;

    let low_stock = levels.iter().filter(|level| level.is_low()).count();

    Ok(InventoryPageData {
        levels,
        low_stock,
        products,
        warehouses,
    })
}

use serde::Serialize;

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::movement::{Movement, MovementListQuery};
use crate::domain::product::ProductListQuery;
use crate::repository::{InventoryReader, MovementReader, ProductReader, WarehouseReader};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Number of recent movements shown on the dashboard.
const RECENT_MOVEMENTS: usize = 10;

/// Headline figures shown on the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    /// Active products in the catalogue.
    pub products: usize,
    pub warehouses: usize,
    /// Signed unit total across all inventory rows.
    pub total_units: i64,
    /// Inventory rows below their product's minimum stock threshold.
    pub low_stock: usize,
}

/// Data required to render the dashboard.
pub struct IndexPageData {
    pub stats: DashboardStats,
    pub recent_movements: Vec<Movement>,
}

/// Loads the dashboard: KPI counts plus the latest ledger activity.
pub fn load_index_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<IndexPageData>
where
    R: InventoryReader + MovementReader + ProductReader + WarehouseReader + ?Sized,
{
    ensure_role(user, Role::Viewer)?;

    let (products, _) = repo
        .list_products(ProductListQuery::new().paginate(1, 1))
        .map_err(ServiceError::from)?;
    let warehouses = repo.list_warehouses().map_err(ServiceError::from)?.len();

    let levels = repo.list_inventory_levels().map_err(ServiceError::from)?;
    let total_units = levels.iter().map(|level| i64::from(level.quantity)).sum();
    let low_stock = levels.iter().filter(|level| level.is_low()).count();

    let (_, recent_movements) = repo
        .list_movements(MovementListQuery::new().paginate(1, RECENT_MOVEMENTS))
        .map_err(ServiceError::from)?;

    Ok(IndexPageData {
        stats: DashboardStats {
            products,
            warehouses,
            total_units,
            low_stock,
        },
        recent_movements,
    })
}

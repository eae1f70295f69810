use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::movement::{Movement, MovementListQuery, MovementType};
use crate::domain::product::{Product, ProductListQuery};
use crate::domain::warehouse::Warehouse;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{MovementReader, ProductReader, WarehouseReader};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Query parameters accepted by the sales page.
#[derive(Debug, Default, Deserialize)]
pub struct SalesQuery {
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the sales page.
pub struct SalesPageData {
    pub sales: Paginated<SaleView>,
    /// Products offered in the record-sale dialog.
    pub products: Vec<Product>,
    /// Warehouses offered in the record-sale dialog.
    pub warehouses: Vec<Warehouse>,
}

/// Loads the sales page: OUT movements, newest first, with the dialogs'
/// option lists.
pub fn load_sales_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: SalesQuery,
) -> ServiceResult<SalesPageData>
where
    R: MovementReader + ProductReader + WarehouseReader + ?Sized,
{
    ensure_role(user, Role::Viewer)?;

    let page = query.page.unwrap_or(1);
    let list_query = MovementListQuery::new()
        .movement_type(MovementType::Out)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, movements) = repo.list_movements(list_query).map_err(ServiceError::from)?;
    let (_, products) = repo
        .list_products(ProductListQuery::new())
        .map_err(ServiceError::from)?;
    let warehouses = repo.list_warehouses().map_err(ServiceError::from)?;

    let items = movements.into_iter().map(SaleView::from_movement).collect();

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let sales = Paginated::new(items, page, total_pages);

    Ok(SalesPageData {
        sales,
        products,
        warehouses,
    })
}

/// View model exposed to the sales template. Quantities are shown as the
/// positive magnitude even though OUT movements persist negative.
#[derive(Debug, Serialize)]
pub struct SaleView {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub product_name: String,
    pub product_sku: String,
    pub product_image_url: Option<String>,
    pub warehouse_name: String,
    pub quantity: i32,
    pub reference: Option<String>,
}

impl SaleView {
    fn from_movement(movement: Movement) -> Self {
        let (product_name, product_sku, product_image_url) = movement
            .product
            .map(|product| (product.name, product.sku, product.image_url))
            .unwrap_or_else(|| ("?".to_string(), "?".to_string(), None));

        let warehouse_name = movement
            .warehouse
            .map(|warehouse| warehouse.name)
            .unwrap_or_else(|| "?".to_string());

        Self {
            id: movement.id,
            created_at: movement.created_at,
            product_name,
            product_sku,
            product_image_url,
            warehouse_name,
            quantity: movement.quantity.abs(),
            reference: movement.reference,
        }
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::movement::{Movement, MovementListQuery, MovementType};
use crate::repository::{InventoryReader, MovementReader};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// How many best-selling products the report shows.
const TOP_PRODUCTS: usize = 5;

/// Units sold on one calendar day.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DailySales {
    /// ISO date (YYYY-MM-DD).
    pub day: String,
    pub units: i64,
}

/// One row of the best-sellers table.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TopProduct {
    pub product_id: i32,
    pub name: String,
    pub sku: String,
    pub units: i64,
}

/// Aggregate figures over the derived inventory view.
#[derive(Debug, Serialize)]
pub struct StockSummary {
    pub total_units: i64,
    pub inventory_rows: usize,
    pub low_stock: usize,
}

/// Data required to render the reports page.
pub struct ReportsPageData {
    pub sales_by_day: Vec<DailySales>,
    pub top_products: Vec<TopProduct>,
    pub stock: StockSummary,
}

/// Builds the reports page from the full OUT side of the ledger plus the
/// derived inventory view.
pub fn load_reports_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<ReportsPageData>
where
    R: MovementReader + InventoryReader + ?Sized,
{
    ensure_role(user, Role::Viewer)?;

    let (_, sales) = repo
        .list_movements(MovementListQuery::new().movement_type(MovementType::Out))
        .map_err(ServiceError::from)?;

    let levels = repo.list_inventory_levels().map_err(ServiceError::from)?;
    let total_units = levels.iter().map(|level| i64::from(level.quantity)).sum();
    let low_stock = levels.iter().filter(|level| level.is_low()).count();

    Ok(ReportsPageData {
        sales_by_day: sales_by_day(&sales),
        top_products: top_products(&sales),
        stock: StockSummary {
            total_units,
            inventory_rows: levels.len(),
            low_stock,
        },
    })
}

/// Groups OUT movements by calendar day, oldest day first. Quantities are
/// stored negative on OUT movements, so magnitudes are summed as absolutes.
fn sales_by_day(sales: &[Movement]) -> Vec<DailySales> {
    let mut per_day: BTreeMap<String, i64> = BTreeMap::new();
    for movement in sales {
        let day = movement.created_at.format("%Y-%m-%d").to_string();
        *per_day.entry(day).or_insert(0) += i64::from(movement.quantity.abs());
    }
    per_day
        .into_iter()
        .map(|(day, units)| DailySales { day, units })
        .collect()
}

/// Ranks products by total units sold and keeps the top entries.
fn top_products(sales: &[Movement]) -> Vec<TopProduct> {
    let mut per_product: BTreeMap<i32, TopProduct> = BTreeMap::new();
    for movement in sales {
        let units = i64::from(movement.quantity.abs());
        per_product
            .entry(movement.product_id)
            .and_modify(|entry| entry.units += units)
            .or_insert_with(|| TopProduct {
                product_id: movement.product_id,
                name: movement
                    .product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                sku: movement
                    .product
                    .as_ref()
                    .map(|p| p.sku.clone())
                    .unwrap_or_default(),
                units,
            });
    }
    let mut ranked: Vec<TopProduct> = per_product.into_values().collect();
    ranked.sort_by(|a, b| b.units.cmp(&a.units));
    ranked.truncate(TOP_PRODUCTS);
    ranked
}

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::warehouse::Warehouse;
use crate::forms::warehouses::WarehouseForm;
use crate::repository::{WarehouseReader, WarehouseWriter};
use crate::services::{ServiceError, ServiceResult, ensure_role};

/// Data required to render the warehouses page.
pub struct WarehousesPageData {
    pub warehouses: Vec<Warehouse>,
}

/// Loads the warehouses overview page.
pub fn load_warehouses_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<WarehousesPageData>
where
    R: WarehouseReader + ?Sized,
{
    ensure_role(user, Role::Viewer)?;

    let warehouses = repo.list_warehouses().map_err(ServiceError::from)?;

    Ok(WarehousesPageData { warehouses })
}

/// Creates a new warehouse.
pub fn create_warehouse<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: WarehouseForm,
) -> ServiceResult<Warehouse>
where
    R: WarehouseWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;

    let payload = form
        .into_new_warehouse()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_warehouse(&payload).map_err(ServiceError::from)
}

/// Updates an existing warehouse.
pub fn update_warehouse<R>(
    repo: &R,
    user: &AuthenticatedUser,
    warehouse_id: i32,
    form: WarehouseForm,
) -> ServiceResult<Warehouse>
where
    R: WarehouseWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;

    let updates = form
        .into_update_warehouse()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_warehouse(warehouse_id, &updates)
        .map_err(ServiceError::from)
}

/// Hard-deletes a warehouse. There is no cascade protection: movements that
/// reference the warehouse keep their rows.
pub fn delete_warehouse<R>(
    repo: &R,
    user: &AuthenticatedUser,
    warehouse_id: i32,
) -> ServiceResult<()>
where
    R: WarehouseWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;

    repo.delete_warehouse(warehouse_id)
        .map_err(ServiceError::from)
}

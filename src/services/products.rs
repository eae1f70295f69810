use serde::Deserialize;

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::product::{Product, ProductListQuery};
use crate::domain::warehouse::Warehouse;
use crate::forms::products::ProductForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{MovementWriter, ProductReader, ProductWriter, WarehouseReader};
use crate::services::{ServiceError, ServiceResult, acting_profile_id, ensure_role, ledger};

/// Query parameters accepted by the products index page.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page requested by the UI (1-based).
    pub page: Option<usize>,
    /// Whether inactive items should be included in the response.
    #[serde(default)]
    pub show_inactive: bool,
}

/// Data required to render the products index template.
pub struct ProductsPageData {
    /// Paginated list of products displayed in the table.
    pub products: Paginated<Product>,
    /// Search query echoed back to the view when present.
    pub search: Option<String>,
    /// Whether inactive items were requested.
    pub show_inactive: bool,
    /// Warehouses offered in the initial-stock selector of the create dialog.
    pub warehouses: Vec<Warehouse>,
}

/// Loads the products overview page.
pub fn load_products_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ProductsQuery,
) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + WarehouseReader + ?Sized,
{
    ensure_role(user, Role::Viewer)?;

    let ProductsQuery {
        search,
        page,
        show_inactive,
    } = query;

    let page = page.unwrap_or(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(search_term) = search.as_ref() {
        list_query = list_query.search(search_term);
    }

    if show_inactive {
        list_query = list_query.include_inactive();
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let warehouses = repo.list_warehouses().map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let products = Paginated::new(items, page, total_pages);

    Ok(ProductsPageData {
        products,
        search,
        show_inactive,
        warehouses,
    })
}

/// Creates a new product. When the form carries an initial-stock request the
/// opening quantity is recorded through the ledger as an IN movement; a
/// failure there is logged but does not roll back the created product.
pub fn create_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: ProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + MovementWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;
    let user_id = acting_profile_id(user)?;

    let (payload, initial_stock) = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let created = repo.create_product(&payload).map_err(ServiceError::from)?;

    if let Some(initial_stock) = initial_stock {
        if let Err(err) = ledger::record_initial_stock(
            repo,
            user_id,
            created.id,
            initial_stock.warehouse_id,
            initial_stock.quantity,
        ) {
            log::error!(
                "Failed to record initial stock for product {}: {err}",
                created.id
            );
        }
    }

    Ok(created)
}

/// Updates an existing product.
pub fn update_product<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
    form: ProductForm,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;

    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_product(product_id, &updates)
        .map_err(ServiceError::from)
}

/// Hard-deletes a product; movements referencing it are left untouched.
pub fn delete_product<R>(repo: &R, user: &AuthenticatedUser, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;

    repo.delete_product(product_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use serde_json::Value;

    use crate::domain::movement::{Movement, NewMovement};
    use crate::domain::product::NewProduct;
    use crate::repository::errors::{RepositoryError, RepositoryResult};
    use crate::repository::mock::{
        MockMovementWriter, MockProductReader, MockProductWriter, MockWarehouseReader,
    };

    fn datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_product(id: i32, sku: &str) -> Product {
        Product {
            id,
            sku: sku.to_string(),
            name: "Coffee Beans".to_string(),
            category: None,
            price_cents: 1250,
            min_stock: 5,
            unit: "kg".to_string(),
            image_url: None,
            is_active: true,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn operator() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "7".to_string(),
            email: "operator@example.com".to_string(),
            name: "Operator".to_string(),
            role: Role::Operator,
            exp: 0,
        }
    }

    fn product_form(initial_warehouse: Option<&str>, initial_quantity: Option<&str>) -> ProductForm {
        ProductForm {
            sku: "SKU-1".to_string(),
            name: "Coffee Beans".to_string(),
            category: None,
            price: "12.50".to_string(),
            min_stock: "5".to_string(),
            unit: Some("kg".to_string()),
            image_url: None,
            is_active: Some("on".to_string()),
            initial_warehouse_id: initial_warehouse.map(str::to_string),
            initial_quantity: initial_quantity.map(str::to_string),
        }
    }

    struct FakeRepo {
        product_writer: MockProductWriter,
        movement_writer: MockMovementWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                product_writer: MockProductWriter::new(),
                movement_writer: MockMovementWriter::new(),
            }
        }
    }

    impl ProductWriter for FakeRepo {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
            self.product_writer.create_product(new_product)
        }

        fn update_product(
            &self,
            product_id: i32,
            updates: &crate::domain::product::UpdateProduct,
        ) -> RepositoryResult<Product> {
            self.product_writer.update_product(product_id, updates)
        }

        fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
            self.product_writer.delete_product(product_id)
        }
    }

    impl MovementWriter for FakeRepo {
        fn create_movement(&self, new_movement: &NewMovement) -> RepositoryResult<Movement> {
            self.movement_writer.create_movement(new_movement)
        }
    }

    struct ReaderRepo {
        product_reader: MockProductReader,
        warehouse_reader: MockWarehouseReader,
    }

    impl ProductReader for ReaderRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
            self.product_reader.get_product_by_id(id)
        }

        fn get_product_by_sku(&self, sku: &str) -> RepositoryResult<Option<Product>> {
            self.product_reader.get_product_by_sku(sku)
        }

        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
            self.product_reader.list_products(query)
        }
    }

    impl WarehouseReader for ReaderRepo {
        fn get_warehouse_by_id(&self, id: i32) -> RepositoryResult<Option<Warehouse>> {
            self.warehouse_reader.get_warehouse_by_id(id)
        }

        fn list_warehouses(&self) -> RepositoryResult<Vec<Warehouse>> {
            self.warehouse_reader.list_warehouses()
        }
    }

    #[test]
    fn products_page_serializes_for_templates() {
        let mut product_reader = MockProductReader::new();
        product_reader
            .expect_list_products()
            .times(1)
            .returning(|_| {
                Ok((
                    2,
                    vec![sample_product(1, "SKU-1"), sample_product(2, "SKU-2")],
                ))
            });

        let mut warehouse_reader = MockWarehouseReader::new();
        warehouse_reader
            .expect_list_warehouses()
            .times(1)
            .returning(|| Ok(Vec::new()));

        let repo = ReaderRepo {
            product_reader,
            warehouse_reader,
        };

        let query = ProductsQuery {
            search: Some("coffee".to_string()),
            page: Some(1),
            show_inactive: false,
        };

        let data = load_products_page(&repo, &operator(), query).expect("expected success");
        assert_eq!(data.search.as_deref(), Some("coffee"));

        let serialized = serde_json::to_value(&data.products).expect("serialization");
        assert_eq!(serialized.get("page").and_then(Value::as_u64), Some(1));
        assert_eq!(serialized.get("total_pages").and_then(Value::as_u64), Some(1));

        let items = serialized
            .get("items")
            .and_then(Value::as_array)
            .expect("items array");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn create_product_records_initial_stock() {
        let mut repo = FakeRepo::new();

        repo.product_writer
            .expect_create_product()
            .times(1)
            .returning(|_| Ok(sample_product(101, "SKU-1")));

        repo.movement_writer
            .expect_create_movement()
            .times(1)
            .withf(|movement| {
                assert_eq!(movement.product_id, 101);
                assert_eq!(movement.warehouse_id, 3);
                assert_eq!(movement.quantity, 10);
                assert_eq!(movement.reference.as_deref(), Some("Initial stock"));
                true
            })
            .returning(|movement| {
                Ok(Movement {
                    id: 1,
                    product_id: movement.product_id,
                    warehouse_id: movement.warehouse_id,
                    user_id: movement.user_id,
                    movement_type: movement.movement_type,
                    quantity: movement.quantity,
                    reference: movement.reference.clone(),
                    created_at: datetime(),
                    product: None,
                    warehouse: None,
                })
            });

        let form = product_form(Some("3"), Some("10"));

        let created = create_product(&repo, &operator(), form).expect("expected success");
        assert_eq!(created.id, 101);
    }

    #[test]
    fn create_product_skips_ledger_without_initial_stock() {
        let mut repo = FakeRepo::new();

        repo.product_writer
            .expect_create_product()
            .times(1)
            .returning(|_| Ok(sample_product(101, "SKU-1")));
        // movement_writer has no expectations: any ledger call panics

        let form = product_form(None, None);

        create_product(&repo, &operator(), form).expect("expected success");
    }

    #[test]
    fn initial_stock_failure_keeps_created_product() {
        let mut repo = FakeRepo::new();

        repo.product_writer
            .expect_create_product()
            .times(1)
            .returning(|_| Ok(sample_product(101, "SKU-1")));

        repo.movement_writer
            .expect_create_movement()
            .times(1)
            .returning(|_| Err(RepositoryError::Database(diesel::result::Error::NotFound)));

        let form = product_form(Some("3"), Some("10"));

        let created = create_product(&repo, &operator(), form).expect("expected success");
        assert_eq!(created.id, 101);
    }
}

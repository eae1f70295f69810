use chrono::Utc;

use stockroom::domain::auth::Role;
use stockroom::domain::movement::{MovementListQuery, MovementType, NewMovement};
use stockroom::domain::product::{NewProduct, ProductListQuery, UpdateProduct};
use stockroom::domain::profile::NewProfile;
use stockroom::domain::warehouse::{NewWarehouse, UpdateWarehouse};
use stockroom::repository::errors::RepositoryError;
use stockroom::repository::{
    DieselRepository, InventoryReader, MovementReader, MovementWriter, ProductReader,
    ProductWriter, ProfileReader, ProfileWriter, WarehouseReader, WarehouseWriter,
};

mod common;

#[test]
fn test_warehouse_repository_crud() {
    let test_db = common::TestDb::new("test_warehouse_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let main = repo
        .create_warehouse(&NewWarehouse::new("Main").with_location("Back of the shop"))
        .unwrap();
    let backup = repo.create_warehouse(&NewWarehouse::new("Backup")).unwrap();

    let warehouses = repo.list_warehouses().unwrap();
    assert_eq!(warehouses.len(), 2);

    let updated = repo
        .update_warehouse(
            main.id,
            &UpdateWarehouse {
                name: "Main floor".to_string(),
                location: None,
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Main floor");
    assert_eq!(updated.location, None);

    repo.delete_warehouse(backup.id).unwrap();
    assert!(repo.get_warehouse_by_id(backup.id).unwrap().is_none());

    let err = repo
        .delete_warehouse(backup.id)
        .expect_err("expected a second delete to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_product_repository_crud_and_filters() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let coffee = repo
        .create_product(
            &NewProduct::new("COF-001", "Coffee beans")
                .with_category("Beverages")
                .with_price_cents(1250)
                .with_min_stock(10)
                .with_unit("kg"),
        )
        .unwrap();
    repo.create_product(&NewProduct::new("TEA-001", "Green tea").with_category("Beverages"))
        .unwrap();
    repo.create_product(&NewProduct::new("OLD-001", "Retired item").active(false))
        .unwrap();

    // Inactive products stay out unless asked for.
    let (total, _) = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(total, 2);
    let (total_all, _) = repo
        .list_products(ProductListQuery::new().include_inactive())
        .unwrap();
    assert_eq!(total_all, 3);

    let (_, found) = repo
        .list_products(ProductListQuery::new().search("coffee"))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].sku, "COF-001");

    let (_, by_sku) = repo
        .list_products(ProductListQuery::new().search("TEA-0"))
        .unwrap();
    assert_eq!(by_sku.len(), 1);

    assert!(repo.get_product_by_sku("COF-001").unwrap().is_some());
    assert!(repo.get_product_by_sku("MISSING").unwrap().is_none());

    let updated = repo
        .update_product(
            coffee.id,
            &UpdateProduct {
                sku: "COF-001".to_string(),
                name: "Coffee beans (dark roast)".to_string(),
                category: Some("Beverages".to_string()),
                price_cents: 1390,
                min_stock: 5,
                unit: "kg".to_string(),
                image_url: None,
                is_active: true,
                updated_at: Utc::now().naive_utc(),
            },
        )
        .unwrap();
    assert_eq!(updated.price_cents, 1390);
    assert_eq!(updated.min_stock, 5);

    repo.delete_product(coffee.id).unwrap();
    assert!(repo.get_product_by_id(coffee.id).unwrap().is_none());
}

#[test]
fn test_profile_repository_roundtrip() {
    let test_db = common::TestDb::new("test_profile_repository_roundtrip.db");
    let repo = DieselRepository::new(test_db.pool());

    let profile = repo
        .create_profile(
            &NewProfile::new("owner@example.com", "Olive Owner", "not-a-real-hash")
                .with_role(Role::Admin),
        )
        .unwrap();
    assert_eq!(profile.role, Role::Admin);

    let credentials = repo
        .get_credentials_by_email("owner@example.com")
        .unwrap()
        .expect("profile should exist");
    assert_eq!(credentials.profile.id, profile.id);
    assert_eq!(credentials.password_hash, "not-a-real-hash");

    let demoted = repo.set_profile_role(profile.id, Role::Viewer).unwrap();
    assert_eq!(demoted.role, Role::Viewer);

    assert_eq!(repo.list_profiles().unwrap().len(), 1);
}

#[test]
fn test_movements_roll_into_inventory() {
    let test_db = common::TestDb::new("test_movements_roll_into_inventory.db");
    let repo = DieselRepository::new(test_db.pool());

    let warehouse = repo.create_warehouse(&NewWarehouse::new("Main")).unwrap();
    let product = repo
        .create_product(&NewProduct::new("COF-001", "Coffee beans"))
        .unwrap();
    let operator = repo
        .create_profile(
            &NewProfile::new("op@example.com", "Opal Operator", "hash").with_role(Role::Operator),
        )
        .unwrap();

    repo.create_movement(&NewMovement::new(
        MovementType::In,
        product.id,
        warehouse.id,
        operator.id,
        10,
    ))
    .unwrap();
    repo.create_movement(&NewMovement::new(
        MovementType::Out,
        product.id,
        warehouse.id,
        operator.id,
        3,
    ))
    .unwrap();
    repo.create_movement(&NewMovement::new(
        MovementType::Adjustment,
        product.id,
        warehouse.id,
        operator.id,
        2,
    ))
    .unwrap();

    // 10 - 3 + 2, maintained entirely by the storage layer.
    let levels = repo.list_inventory_levels().unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].quantity, 9);
    assert_eq!(levels[0].product.id, product.id);
    assert_eq!(levels[0].warehouse.id, warehouse.id);
}

#[test]
fn test_movement_listing_carries_joins_and_filters() {
    let test_db = common::TestDb::new("test_movement_listing_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let main = repo.create_warehouse(&NewWarehouse::new("Main")).unwrap();
    let backup = repo.create_warehouse(&NewWarehouse::new("Backup")).unwrap();
    let product = repo
        .create_product(&NewProduct::new("COF-001", "Coffee beans"))
        .unwrap();
    let operator = repo
        .create_profile(
            &NewProfile::new("op@example.com", "Opal Operator", "hash").with_role(Role::Operator),
        )
        .unwrap();

    repo.create_movement(&NewMovement::new(
        MovementType::In,
        product.id,
        main.id,
        operator.id,
        10,
    ))
    .unwrap();
    repo.create_movement(
        &NewMovement::new(MovementType::Out, product.id, main.id, operator.id, 2)
            .with_reference("Receipt #42"),
    )
    .unwrap();
    repo.create_movement(&NewMovement::new(
        MovementType::In,
        product.id,
        backup.id,
        operator.id,
        5,
    ))
    .unwrap();

    let (total, all) = repo.list_movements(MovementListQuery::new()).unwrap();
    assert_eq!(total, 3);
    let joined = all
        .iter()
        .find(|movement| movement.reference.as_deref() == Some("Receipt #42"))
        .expect("sale should be listed");
    assert_eq!(
        joined.product.as_ref().map(|p| p.sku.as_str()),
        Some("COF-001")
    );
    assert_eq!(
        joined.warehouse.as_ref().map(|w| w.name.as_str()),
        Some("Main")
    );
    assert_eq!(joined.quantity, -2);

    let (out_total, out_rows) = repo
        .list_movements(MovementListQuery::new().movement_type(MovementType::Out))
        .unwrap();
    assert_eq!(out_total, 1);
    assert_eq!(out_rows.len(), 1);

    let (backup_total, _) = repo
        .list_movements(MovementListQuery::new().warehouse(backup.id))
        .unwrap();
    assert_eq!(backup_total, 1);

    let (paged_total, paged) = repo
        .list_movements(MovementListQuery::new().paginate(1, 2))
        .unwrap();
    assert_eq!(paged_total, 3);
    assert_eq!(paged.len(), 2);
}

use stockroom::domain::auth::{AuthenticatedUser, Role};
use stockroom::domain::movement::MovementType;
use stockroom::domain::product::NewProduct;
use stockroom::domain::profile::{NewProfile, Profile};
use stockroom::domain::warehouse::{NewWarehouse, Warehouse};
use stockroom::forms::inventory::{AdjustmentForm, TransferForm};
use stockroom::forms::sales::SaleForm;
use stockroom::repository::{
    DieselRepository, InventoryReader, MovementReader, ProductWriter, ProfileWriter,
    WarehouseWriter,
};
use stockroom::services::{ServiceError, ledger};

mod common;

fn operator_user(profile: &Profile) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: profile.id.to_string(),
        email: profile.email.clone(),
        name: profile.full_name.clone(),
        role: Role::Operator,
        exp: 0,
    }
}

fn seed(repo: &DieselRepository) -> (i32, Warehouse, Warehouse, AuthenticatedUser) {
    let main = repo.create_warehouse(&NewWarehouse::new("Main")).unwrap();
    let backup = repo.create_warehouse(&NewWarehouse::new("Backup")).unwrap();
    let product = repo
        .create_product(&NewProduct::new("COF-001", "Coffee beans").with_min_stock(5))
        .unwrap();
    let operator = repo
        .create_profile(
            &NewProfile::new("op@example.com", "Opal Operator", "hash").with_role(Role::Operator),
        )
        .unwrap();
    let user = operator_user(&operator);
    (product.id, main, backup, user)
}

fn level_at(repo: &DieselRepository, product_id: i32, warehouse_id: i32) -> i32 {
    repo.list_inventory_levels()
        .unwrap()
        .into_iter()
        .find(|level| level.product.id == product_id && level.warehouse.id == warehouse_id)
        .map(|level| level.quantity)
        .unwrap_or(0)
}

#[test]
fn adjustments_flow_through_the_ledger() {
    let test_db = common::TestDb::new("service_adjustments_flow.db");
    let repo = DieselRepository::new(test_db.pool());
    let (product_id, main, _, user) = seed(&repo);

    let received = ledger::record_adjustment(
        &repo,
        &user,
        AdjustmentForm {
            movement_type: "IN".to_string(),
            product_id,
            warehouse_id: main.id,
            quantity: 20,
            reference: Some("PO-1001".to_string()),
        },
    )
    .unwrap();
    assert_eq!(received.quantity, 20);
    assert_eq!(received.movement_type, MovementType::In);

    let shrinkage = ledger::record_adjustment(
        &repo,
        &user,
        AdjustmentForm {
            movement_type: "OUT".to_string(),
            product_id,
            warehouse_id: main.id,
            quantity: 4,
            reference: None,
        },
    )
    .unwrap();
    assert_eq!(shrinkage.quantity, -4);

    assert_eq!(level_at(&repo, product_id, main.id), 16);
}

#[test]
fn adjustment_rejects_viewer_and_bad_input() {
    let test_db = common::TestDb::new("service_adjustment_rejects.db");
    let repo = DieselRepository::new(test_db.pool());
    let (product_id, main, _, user) = seed(&repo);

    let mut viewer = user.clone();
    viewer.role = Role::Viewer;
    let result = ledger::record_adjustment(
        &repo,
        &viewer,
        AdjustmentForm {
            movement_type: "IN".to_string(),
            product_id,
            warehouse_id: main.id,
            quantity: 1,
            reference: None,
        },
    );
    assert!(matches!(result, Err(ServiceError::Unauthorized)));

    let result = ledger::record_adjustment(
        &repo,
        &user,
        AdjustmentForm {
            movement_type: "IN".to_string(),
            product_id,
            warehouse_id: main.id,
            quantity: 0,
            reference: None,
        },
    );
    assert!(matches!(result, Err(ServiceError::Form(_))));

    // Transfers have their own endpoint and may not be typed in directly.
    let result = ledger::record_adjustment(
        &repo,
        &user,
        AdjustmentForm {
            movement_type: "TRANSFER".to_string(),
            product_id,
            warehouse_id: main.id,
            quantity: 1,
            reference: None,
        },
    );
    assert!(matches!(result, Err(ServiceError::Form(_))));

    // Nothing reached the ledger.
    let (total, _) = repo
        .list_movements(stockroom::domain::movement::MovementListQuery::new())
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn transfer_moves_stock_between_warehouses() {
    let test_db = common::TestDb::new("service_transfer_moves_stock.db");
    let repo = DieselRepository::new(test_db.pool());
    let (product_id, main, backup, user) = seed(&repo);

    ledger::record_adjustment(
        &repo,
        &user,
        AdjustmentForm {
            movement_type: "IN".to_string(),
            product_id,
            warehouse_id: main.id,
            quantity: 10,
            reference: None,
        },
    )
    .unwrap();

    let (debit, credit) = ledger::record_transfer(
        &repo,
        &user,
        TransferForm {
            product_id,
            from_warehouse_id: main.id,
            to_warehouse_id: backup.id,
            quantity: 6,
        },
    )
    .unwrap();

    assert_eq!(debit.movement_type, MovementType::Transfer);
    assert_eq!(debit.quantity, -6);
    assert_eq!(credit.quantity, 6);
    assert!(debit.id < credit.id);

    // Total stock is conserved across the two legs.
    assert_eq!(level_at(&repo, product_id, main.id), 4);
    assert_eq!(level_at(&repo, product_id, backup.id), 6);
}

#[test]
fn transfer_to_same_warehouse_writes_nothing() {
    let test_db = common::TestDb::new("service_transfer_same_warehouse.db");
    let repo = DieselRepository::new(test_db.pool());
    let (product_id, main, _, user) = seed(&repo);

    let result = ledger::record_transfer(
        &repo,
        &user,
        TransferForm {
            product_id,
            from_warehouse_id: main.id,
            to_warehouse_id: main.id,
            quantity: 5,
        },
    );
    assert!(matches!(result, Err(ServiceError::Form(_))));

    let (total, _) = repo
        .list_movements(stockroom::domain::movement::MovementListQuery::new())
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn sales_are_out_movements_with_references() {
    let test_db = common::TestDb::new("service_sales_out_movements.db");
    let repo = DieselRepository::new(test_db.pool());
    let (product_id, main, _, user) = seed(&repo);

    ledger::record_adjustment(
        &repo,
        &user,
        AdjustmentForm {
            movement_type: "IN".to_string(),
            product_id,
            warehouse_id: main.id,
            quantity: 10,
            reference: None,
        },
    )
    .unwrap();

    let first = ledger::record_sale(
        &repo,
        &user,
        SaleForm {
            product_id,
            warehouse_id: main.id,
            quantity: 2,
            reference: Some("Receipt #42".to_string()),
        },
    )
    .unwrap();
    let second = ledger::record_sale(
        &repo,
        &user,
        SaleForm {
            product_id,
            warehouse_id: main.id,
            quantity: 2,
            reference: Some("Receipt #42".to_string()),
        },
    )
    .unwrap();

    // No dedup: the same receipt submitted twice stays two facts.
    assert_ne!(first.id, second.id);
    assert_eq!(first.movement_type, MovementType::Out);
    assert_eq!(first.reference.as_deref(), Some("Receipt #42"));
    assert_eq!(level_at(&repo, product_id, main.id), 6);
}

#[test]
fn initial_stock_is_an_in_movement() {
    let test_db = common::TestDb::new("service_initial_stock.db");
    let repo = DieselRepository::new(test_db.pool());
    let (_, main, _, user) = seed(&repo);

    let product = repo
        .create_product(&NewProduct::new("TEA-001", "Green tea"))
        .unwrap();
    let user_id = user.profile_id().expect("numeric profile id");

    let movement = ledger::record_initial_stock(&repo, user_id, product.id, main.id, 15).unwrap();
    assert_eq!(movement.movement_type, MovementType::In);
    assert_eq!(movement.quantity, 15);
    assert_eq!(movement.reference.as_deref(), Some("Initial stock"));
    assert_eq!(level_at(&repo, product.id, main.id), 15);

    let result = ledger::record_initial_stock(&repo, user_id, product.id, main.id, 0);
    assert!(matches!(result, Err(ServiceError::Form(_))));
}

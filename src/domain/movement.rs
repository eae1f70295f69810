use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Cause of a stock change. The persisted quantity sign must agree with the
/// type: IN and ADJUSTMENT are positive, OUT is negative and a TRANSFER is a
/// pair of one negative and one positive leg of equal magnitude.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    /// Goods received (purchase, customer return).
    In,
    /// Goods leaving stock (sale, shrinkage).
    Out,
    /// Physical count correction. Recorded with a positive magnitude, like IN.
    Adjustment,
    /// One leg of a two-movement warehouse transfer.
    Transfer,
}

impl MovementType {
    /// Apply this type's semantic direction to a positive magnitude.
    pub fn signed_quantity(self, magnitude: i32) -> i32 {
        match self {
            Self::In | Self::Adjustment => magnitude,
            Self::Out => -magnitude,
            // Transfer legs carry their own sign per leg.
            Self::Transfer => magnitude,
        }
    }
}

impl From<&str> for MovementType {
    fn from(value: &str) -> Self {
        match value {
            "IN" => Self::In,
            "OUT" => Self::Out,
            "ADJUSTMENT" => Self::Adjustment,
            _ => Self::Transfer,
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::In => "IN",
            Self::Out => "OUT",
            Self::Adjustment => "ADJUSTMENT",
            Self::Transfer => "TRANSFER",
        };
        f.write_str(label)
    }
}

/// Product fields carried alongside a movement row for display.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MovementProduct {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub unit: String,
    pub image_url: Option<String>,
}

/// Warehouse fields carried alongside a movement row for display.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MovementWarehouse {
    pub id: i32,
    pub name: String,
}

/// Domain representation of one immutable stock movement.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Movement {
    /// Identifier assigned by storage.
    pub id: i32,
    pub product_id: i32,
    pub warehouse_id: i32,
    /// Profile that performed the movement.
    pub user_id: i32,
    pub movement_type: MovementType,
    /// Signed stock delta; positive increases stock at this warehouse.
    pub quantity: i32,
    /// Free-text note (supplier, customer, ticket number).
    pub reference: Option<String>,
    /// Server-side insertion timestamp.
    pub created_at: NaiveDateTime,
    /// Joined product summary, present on listing queries.
    pub product: Option<MovementProduct>,
    /// Joined warehouse summary, present on listing queries.
    pub warehouse: Option<MovementWarehouse>,
}

/// Payload required to insert one movement. The signed quantity is fixed at
/// construction; there is no way to mutate a movement afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovement {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub user_id: i32,
    pub movement_type: MovementType,
    pub quantity: i32,
    pub reference: Option<String>,
}

impl NewMovement {
    /// Build a movement whose sign follows the type's direction.
    pub fn new(
        movement_type: MovementType,
        product_id: i32,
        warehouse_id: i32,
        user_id: i32,
        magnitude: i32,
    ) -> Self {
        Self {
            product_id,
            warehouse_id,
            user_id,
            movement_type,
            quantity: movement_type.signed_quantity(magnitude),
            reference: None,
        }
    }

    /// Build the two legs of a warehouse transfer: a debit at `from_warehouse_id`
    /// followed by a credit at `to_warehouse_id` of equal magnitude.
    pub fn transfer_legs(
        product_id: i32,
        from_warehouse_id: i32,
        to_warehouse_id: i32,
        user_id: i32,
        magnitude: i32,
    ) -> (Self, Self) {
        let debit = Self {
            product_id,
            warehouse_id: from_warehouse_id,
            user_id,
            movement_type: MovementType::Transfer,
            quantity: -magnitude,
            reference: Some(format!("Transfer to warehouse {to_warehouse_id}")),
        };
        let credit = Self {
            product_id,
            warehouse_id: to_warehouse_id,
            user_id,
            movement_type: MovementType::Transfer,
            quantity: magnitude,
            reference: Some(format!("Transfer from warehouse {from_warehouse_id}")),
        };
        (debit, credit)
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Query definition used to list movements.
#[derive(Debug, Clone, Default)]
pub struct MovementListQuery {
    /// Optional movement type filter.
    pub movement_type: Option<MovementType>,
    /// Optional product filter.
    pub product_id: Option<i32>,
    /// Optional warehouse filter.
    pub warehouse_id: Option<i32>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl MovementListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to one movement type.
    pub fn movement_type(mut self, movement_type: MovementType) -> Self {
        self.movement_type = Some(movement_type);
        self
    }

    /// Restrict the results to one product.
    pub fn product(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// Restrict the results to one warehouse.
    pub fn warehouse(mut self, warehouse_id: i32) -> Self {
        self.warehouse_id = Some(warehouse_id);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

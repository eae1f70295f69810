use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::movement::{
    Movement as DomainMovement, MovementProduct, MovementWarehouse,
    NewMovement as DomainNewMovement,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::movements)]
pub struct Movement {
    pub id: i32,
    pub product_id: i32,
    pub warehouse_id: i32,
    pub user_id: i32,
    pub movement_type: String,
    pub quantity: i32,
    pub reference: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::movements)]
pub struct NewMovement<'a> {
    pub product_id: i32,
    pub warehouse_id: i32,
    pub user_id: i32,
    pub movement_type: String,
    pub quantity: i32,
    pub reference: Option<&'a str>,
}

impl Movement {
    /// Convert a bare row into a domain movement without joined summaries.
    pub fn into_domain(self) -> DomainMovement {
        DomainMovement {
            id: self.id,
            product_id: self.product_id,
            warehouse_id: self.warehouse_id,
            user_id: self.user_id,
            movement_type: self.movement_type.as_str().into(),
            quantity: self.quantity,
            reference: self.reference,
            created_at: self.created_at,
            product: None,
            warehouse: None,
        }
    }

    /// Convert a joined row into a domain movement carrying display summaries.
    pub fn into_domain_with(
        self,
        product: MovementProduct,
        warehouse: MovementWarehouse,
    ) -> DomainMovement {
        let mut movement = self.into_domain();
        movement.product = Some(product);
        movement.warehouse = Some(warehouse);
        movement
    }
}

impl From<Movement> for DomainMovement {
    fn from(value: Movement) -> Self {
        value.into_domain()
    }
}

impl<'a> From<&'a DomainNewMovement> for NewMovement<'a> {
    fn from(value: &'a DomainNewMovement) -> Self {
        Self {
            product_id: value.product_id,
            warehouse_id: value.warehouse_id,
            user_id: value.user_id,
            movement_type: value.movement_type.to_string(),
            quantity: value.quantity,
            reference: value.reference.as_deref(),
        }
    }
}

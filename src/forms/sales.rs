use serde::Deserialize;

use crate::domain::movement::{MovementType, NewMovement};
use crate::forms::inventory::{LedgerFormError, LedgerFormResult};

/// Form payload emitted by the "record sale" dialog. A sale is an OUT
/// movement carrying the customer or ticket reference.
#[derive(Debug, Deserialize)]
pub struct SaleForm {
    pub product_id: i32,
    pub warehouse_id: i32,
    /// Positive number of units sold.
    pub quantity: i32,
    /// Customer name or ticket number.
    pub reference: Option<String>,
}

impl SaleForm {
    pub fn into_new_movement(self, user_id: i32) -> LedgerFormResult<NewMovement> {
        if self.quantity <= 0 {
            return Err(LedgerFormError::InvalidQuantity {
                value: self.quantity,
            });
        }

        let mut movement = NewMovement::new(
            MovementType::Out,
            self.product_id,
            self.warehouse_id,
            user_id,
            self.quantity,
        );

        if let Some(reference) = self
            .reference
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            movement = movement.with_reference(reference);
        }

        Ok(movement)
    }
}

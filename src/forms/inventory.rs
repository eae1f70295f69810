use serde::Deserialize;
use thiserror::Error;

use crate::domain::movement::{MovementType, NewMovement};

/// Result type returned by the ledger form helpers.
pub type LedgerFormResult<T> = Result<T, LedgerFormError>;

/// Errors raised while turning ledger forms into movement payloads. All of
/// these fire before any storage call.
#[derive(Debug, Error)]
pub enum LedgerFormError {
    /// Quantity magnitudes must be positive integers.
    #[error("quantity must be a positive integer, got {value}")]
    InvalidQuantity { value: i32 },
    /// The submitted movement type is not one an adjustment may carry.
    #[error("`{value}` is not a valid adjustment type")]
    InvalidMovementType { value: String },
    /// Transfers need two distinct warehouses.
    #[error("source and destination warehouse must differ")]
    SameWarehouse,
}

/// Form payload emitted by the stock adjustment dialog.
#[derive(Debug, Deserialize)]
pub struct AdjustmentForm {
    /// One of `IN`, `OUT` or `ADJUSTMENT`.
    pub movement_type: String,
    pub product_id: i32,
    pub warehouse_id: i32,
    /// Positive magnitude; the sign is derived from the type.
    pub quantity: i32,
    pub reference: Option<String>,
}

impl AdjustmentForm {
    /// Validate the payload and build the signed movement.
    pub fn into_new_movement(self, user_id: i32) -> LedgerFormResult<NewMovement> {
        let movement_type = match self.movement_type.as_str() {
            "IN" => MovementType::In,
            "OUT" => MovementType::Out,
            "ADJUSTMENT" => MovementType::Adjustment,
            other => {
                return Err(LedgerFormError::InvalidMovementType {
                    value: other.to_string(),
                });
            }
        };

        if self.quantity <= 0 {
            return Err(LedgerFormError::InvalidQuantity {
                value: self.quantity,
            });
        }

        let mut movement = NewMovement::new(
            movement_type,
            self.product_id,
            self.warehouse_id,
            user_id,
            self.quantity,
        );

        if let Some(reference) = sanitize_reference(self.reference) {
            movement = movement.with_reference(reference);
        }

        Ok(movement)
    }
}

/// Form payload emitted by the warehouse transfer dialog.
#[derive(Debug, Deserialize)]
pub struct TransferForm {
    pub product_id: i32,
    pub from_warehouse_id: i32,
    pub to_warehouse_id: i32,
    /// Positive magnitude moved between the warehouses.
    pub quantity: i32,
}

impl TransferForm {
    /// Validate the payload and build the debit and credit legs.
    pub fn into_transfer_legs(self, user_id: i32) -> LedgerFormResult<(NewMovement, NewMovement)> {
        if self.from_warehouse_id == self.to_warehouse_id {
            return Err(LedgerFormError::SameWarehouse);
        }

        if self.quantity <= 0 {
            return Err(LedgerFormError::InvalidQuantity {
                value: self.quantity,
            });
        }

        Ok(NewMovement::transfer_legs(
            self.product_id,
            self.from_warehouse_id,
            self.to_warehouse_id,
            user_id,
            self.quantity,
        ))
    }
}

fn sanitize_reference(reference: Option<String>) -> Option<String> {
    reference
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

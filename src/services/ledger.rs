//! The movement ledger. Stock levels are never written directly: every
//! mutation is an immutable signed movement, and the storage layer derives
//! the inventory snapshot from them. This module owns movement construction
//! and submission, including the two-leg transfer protocol.

use crate::domain::auth::{AuthenticatedUser, Role};
use crate::domain::movement::{Movement, MovementType, NewMovement};
use crate::forms::inventory::{AdjustmentForm, TransferForm};
use crate::forms::sales::SaleForm;
use crate::repository::MovementWriter;
use crate::services::{ServiceError, ServiceResult, acting_profile_id, ensure_role};

/// Record a single IN/OUT/ADJUSTMENT movement. The form supplies a positive
/// magnitude; the persisted quantity carries the type's sign.
pub fn record_adjustment<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AdjustmentForm,
) -> ServiceResult<Movement>
where
    R: MovementWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;
    let user_id = acting_profile_id(user)?;

    let movement = form
        .into_new_movement(user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_movement(&movement).map_err(ServiceError::from)
}

/// Record a warehouse transfer as two linked TRANSFER movements: the debit
/// leg at the source first, then the credit leg at the destination once the
/// debit is committed.
///
/// The two inserts are not atomic. A credit-leg failure leaves the debit in
/// place and is surfaced as [`ServiceError::TransferPartiallyApplied`] with
/// the destination warehouse for manual reconciliation; no compensating
/// reversal is written.
pub fn record_transfer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: TransferForm,
) -> ServiceResult<(Movement, Movement)>
where
    R: MovementWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;
    let user_id = acting_profile_id(user)?;

    let (debit, credit) = form
        .into_transfer_legs(user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let debit_row = repo.create_movement(&debit).map_err(ServiceError::from)?;

    match repo.create_movement(&credit) {
        Ok(credit_row) => Ok((debit_row, credit_row)),
        Err(err) => {
            log::error!(
                "transfer credit leg failed after debit {} committed: {err}",
                debit_row.id
            );
            Err(ServiceError::TransferPartiallyApplied {
                product_id: credit.product_id,
                from_warehouse_id: debit.warehouse_id,
                to_warehouse_id: credit.warehouse_id,
                quantity: credit.quantity,
                source: err,
            })
        }
    }
}

/// Record a sale: an OUT movement carrying the customer or ticket reference.
/// No dedup is applied; submitting the same sale twice records two movements.
pub fn record_sale<R>(repo: &R, user: &AuthenticatedUser, form: SaleForm) -> ServiceResult<Movement>
where
    R: MovementWriter + ?Sized,
{
    ensure_role(user, Role::Operator)?;
    let user_id = acting_profile_id(user)?;

    let movement = form
        .into_new_movement(user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_movement(&movement).map_err(ServiceError::from)
}

/// Record the optional opening stock of a freshly created product as a single
/// IN movement. Callers decide whether to invoke this at all; product
/// creation is not rolled back when it fails.
pub fn record_initial_stock<R>(
    repo: &R,
    user_id: i32,
    product_id: i32,
    warehouse_id: i32,
    quantity: i32,
) -> ServiceResult<Movement>
where
    R: MovementWriter + ?Sized,
{
    if quantity <= 0 {
        return Err(ServiceError::Form(format!(
            "initial stock must be positive, got {quantity}"
        )));
    }

    let movement = NewMovement::new(MovementType::In, product_id, warehouse_id, user_id, quantity)
        .with_reference("Initial stock");

    repo.create_movement(&movement).map_err(ServiceError::from)
}

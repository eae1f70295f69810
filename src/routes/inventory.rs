use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::inventory::{AdjustmentForm, TransferForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, inventory, ledger};

#[get("/inventory")]
pub async fn show_inventory(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match inventory::load_inventory_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "inventory");
            context.insert("levels", &data.levels);
            context.insert("low_stock", &data.low_stock);
            context.insert("products", &data.products);
            context.insert("warehouses", &data.warehouses);
            render_template(&tera, "inventory/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to list inventory: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/inventory/adjust")]
pub async fn adjust_inventory(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AdjustmentForm>,
) -> impl Responder {
    match ledger::record_adjustment(repo.get_ref(), &user, form) {
        Ok(movement) => {
            FlashMessage::success(format!(
                "{} of {} units recorded.",
                movement.movement_type,
                movement.quantity.abs()
            ))
            .send();
            redirect("/inventory")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/inventory")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/inventory")
        }
        Err(err) => {
            log::error!("Failed to record a movement: {err}");
            FlashMessage::error("Failed to record the movement.").send();
            redirect("/inventory")
        }
    }
}

#[post("/inventory/transfer")]
pub async fn transfer_inventory(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<TransferForm>,
) -> impl Responder {
    match ledger::record_transfer(repo.get_ref(), &user, form) {
        Ok((debit, _credit)) => {
            FlashMessage::success(format!(
                "Transfer of {} units recorded.",
                debit.quantity.abs()
            ))
            .send();
            redirect("/inventory")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/inventory")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/inventory")
        }
        Err(err @ ServiceError::TransferPartiallyApplied { .. }) => {
            log::error!("{err}");
            FlashMessage::error(
                "Transfer incomplete: stock left the source warehouse but was not credited \
                 to the destination. Review the movement log.",
            )
            .send();
            redirect("/inventory")
        }
        Err(err) => {
            log::error!("Failed to record a transfer: {err}");
            FlashMessage::error("Failed to record the transfer.").send();
            redirect("/inventory")
        }
    }
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::sales::SaleForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::sales::SalesQuery;
use crate::services::{ServiceError, ledger, sales};

#[get("/sales")]
pub async fn show_sales(
    params: web::Query<SalesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match sales::load_sales_page(repo.get_ref(), &user, params.0) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "sales");
            context.insert("sales", &data.sales);
            context.insert("products", &data.products);
            context.insert("warehouses", &data.warehouses);
            render_template(&tera, "sales/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to list sales: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/sales")]
pub async fn add_sale(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaleForm>,
) -> impl Responder {
    match ledger::record_sale(repo.get_ref(), &user, form) {
        Ok(movement) => {
            FlashMessage::success(format!(
                "Sale of {} units recorded.",
                movement.quantity.abs()
            ))
            .send();
            redirect("/sales")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/sales")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/sales")
        }
        Err(err) => {
            log::error!("Failed to record a sale: {err}");
            FlashMessage::error("Failed to record the sale.").send();
            redirect("/sales")
        }
    }
}

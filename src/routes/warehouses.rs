use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::warehouses::WarehouseForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, warehouses};

#[get("/warehouses")]
pub async fn show_warehouses(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match warehouses::load_warehouses_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "warehouses");
            context.insert("warehouses", &data.warehouses);
            render_template(&tera, "warehouses/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to list warehouses: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/warehouses")]
pub async fn add_warehouse(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<WarehouseForm>,
) -> impl Responder {
    match warehouses::create_warehouse(repo.get_ref(), &user, form) {
        Ok(warehouse) => {
            FlashMessage::success(format!("Warehouse {} created.", warehouse.name)).send();
            redirect("/warehouses")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/warehouses")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/warehouses")
        }
        Err(err) => {
            log::error!("Failed to add a warehouse: {err}");
            FlashMessage::error("Failed to add the warehouse.").send();
            redirect("/warehouses")
        }
    }
}

#[post("/warehouses/{warehouse_id}/update")]
pub async fn update_warehouse(
    warehouse_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<WarehouseForm>,
) -> impl Responder {
    match warehouses::update_warehouse(repo.get_ref(), &user, warehouse_id.into_inner(), form) {
        Ok(warehouse) => {
            FlashMessage::success(format!("Warehouse {} updated.", warehouse.name)).send();
            redirect("/warehouses")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/warehouses")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Warehouse not found.").send();
            redirect("/warehouses")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/warehouses")
        }
        Err(err) => {
            log::error!("Failed to update a warehouse: {err}");
            FlashMessage::error("Failed to update the warehouse.").send();
            redirect("/warehouses")
        }
    }
}

#[post("/warehouses/{warehouse_id}/delete")]
pub async fn delete_warehouse(
    warehouse_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match warehouses::delete_warehouse(repo.get_ref(), &user, warehouse_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Warehouse deleted.").send();
            redirect("/warehouses")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/warehouses")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Warehouse not found.").send();
            redirect("/warehouses")
        }
        Err(err) => {
            log::error!("Failed to delete a warehouse: {err}");
            FlashMessage::error("Failed to delete the warehouse.").send();
            redirect("/warehouses")
        }
    }
}

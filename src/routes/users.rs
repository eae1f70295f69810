use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::users::{AddUserForm, UpdateRoleForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, users};

#[get("/users")]
pub async fn show_users(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match users::load_users_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "users");
            context.insert("profiles", &data.profiles);
            render_template(&tera, "users/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to list users: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/users")]
pub async fn add_user(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddUserForm>,
) -> impl Responder {
    match users::create_user(repo.get_ref(), &user, form) {
        Ok(profile) => {
            FlashMessage::success(format!("Account {} created.", profile.email)).send();
            redirect("/users")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/users")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/users")
        }
        Err(err) => {
            log::error!("Failed to add a user: {err}");
            FlashMessage::error("Failed to add the user.").send();
            redirect("/users")
        }
    }
}

#[post("/users/{profile_id}/role")]
pub async fn update_user_role(
    profile_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateRoleForm>,
) -> impl Responder {
    match users::change_role(repo.get_ref(), &user, profile_id.into_inner(), form) {
        Ok(profile) => {
            FlashMessage::success(format!("Role of {} updated.", profile.email)).send();
            redirect("/users")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/users")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("User not found.").send();
            redirect("/users")
        }
        Err(err) => {
            log::error!("Failed to update a role: {err}");
            FlashMessage::error("Failed to update the role.").send();
            redirect("/users")
        }
    }
}

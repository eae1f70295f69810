use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::auth::issue_token;
use crate::config::ServerConfig;
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::{redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};

#[get("/login")]
pub async fn show_login(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    // No signed-in user here, so the shared base context does not apply.
    let alerts: Vec<String> = flash_messages
        .iter()
        .filter(|message| message.level() >= Level::Warning)
        .map(|message| message.content().to_string())
        .collect();
    let mut context = Context::new();
    context.insert("alerts", &alerts);
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::authenticate(repo.get_ref(), &form) {
        Ok(profile) => {
            let token = match issue_token(&profile, &server_config.secret) {
                Ok(token) => token,
                Err(err) => {
                    log::error!("Failed to sign session token: {err}");
                    return HttpResponse::InternalServerError().finish();
                }
            };
            if let Err(err) = Identity::login(&request.extensions(), token) {
                log::error!("Failed to attach session identity: {err}");
                return HttpResponse::InternalServerError().finish();
            }
            redirect("/")
        }
        Err(ServiceError::InvalidCredentials) => {
            FlashMessage::error("Invalid email or password.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to authenticate: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/login")
}

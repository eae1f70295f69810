use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use stockroom::config::ServerConfig;
use stockroom::db::establish_connection_pool;
use stockroom::middleware::RedirectUnauthorized;
use stockroom::repository::DieselRepository;
use stockroom::routes::auth::{login, logout, show_login};
use stockroom::routes::inventory::{adjust_inventory, show_inventory, transfer_inventory};
use stockroom::routes::main::show_index;
use stockroom::routes::products::{add_product, delete_product, show_products, update_product};
use stockroom::routes::reports::show_reports;
use stockroom::routes::sales::{add_sale, show_sales};
use stockroom::routes::users::{add_user, show_users, update_user_role};
use stockroom::routes::warehouses::{
    add_warehouse, delete_warehouse, show_warehouses, update_warehouse,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret = env::var("SECRET_KEY");
    let secret_key = match &secret {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let server_config = ServerConfig {
        secret: secret.unwrap_or_default(),
    };

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_login)
            .service(login)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_products)
                    .service(add_product)
                    .service(update_product)
                    .service(delete_product)
                    .service(show_warehouses)
                    .service(add_warehouse)
                    .service(update_warehouse)
                    .service(delete_warehouse)
                    .service(show_inventory)
                    .service(adjust_inventory)
                    .service(transfer_inventory)
                    .service(show_sales)
                    .service(add_sale)
                    .service(show_users)
                    .service(add_user)
                    .service(update_user_role)
                    .service(show_reports)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}

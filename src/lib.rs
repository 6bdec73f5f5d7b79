use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{
    api_v1_create_listing, api_v1_delete_listing, api_v1_get_listing, api_v1_list_listings,
    api_v1_update_listing,
};
use crate::routes::booking::{add_booking, cancel_booking, show_bookings};
use crate::routes::listing::{add_review, show_listing};
use crate::routes::main::{logout, show_index, show_listings};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role required by the admin listings API.
pub const SERVICE_ADMIN_ROLE: &str = "admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_list_listings)
                    .service(api_v1_create_listing)
                    .service(api_v1_get_listing)
                    .service(api_v1_update_listing)
                    .service(api_v1_delete_listing),
            )
            .service(show_index)
            .service(show_listings)
            .service(show_listing)
            .service(add_review)
            .service(show_bookings)
            .service(add_booking)
            .service(cancel_booking)
            .service(logout)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

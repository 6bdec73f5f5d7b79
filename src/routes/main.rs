use actix_identity::Identity;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::dto::main::ListingsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::main as main_service;

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect("/listings")
}

#[get("/listings")]
pub async fn show_listings(
    params: web::Query<ListingsQuery>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match main_service::load_listings_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to load listings page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        user.as_ref(),
        "listings",
        &server_config.auth_service_url,
    );
    context.insert("listings", &data.listings);
    context.insert("filters", &data.filters);

    render_template(&tera, "listings/index.html", &context)
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}

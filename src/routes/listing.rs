use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::review::ReviewForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::listing as listing_service;
use crate::services::review as review_service;

#[get("/listings/{listing_id}")]
pub async fn show_listing(
    listing_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let listing_id = listing_id.into_inner();

    let data = match listing_service::load_listing_page(repo.get_ref(), listing_id) {
        Ok(data) => data,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
            return redirect("/listings");
        }
        Err(e) => {
            log::error!("Failed to load listing {listing_id}: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        user.as_ref(),
        "listings",
        &server_config.auth_service_url,
    );
    context.insert("listing", &data.listing);
    context.insert("reviews", &data.reviews);

    render_template(&tera, "listings/show.html", &context)
}

#[post("/listings/{listing_id}/reviews")]
pub async fn add_review(
    listing_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<ReviewForm>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect(&server_config.auth_service_url);
    };

    let listing_id = listing_id.into_inner();

    match review_service::add_review(repo.get_ref(), &user, listing_id, form) {
        Ok(_) => {
            FlashMessage::success("Review submitted.").send();
            redirect(&format!("/listings/{listing_id}"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
            redirect("/listings")
        }
        Err(ServiceError::Form(msg)) | Err(ServiceError::Validation(msg)) => {
            FlashMessage::error(msg).send();
            redirect(&format!("/listings/{listing_id}"))
        }
        Err(e) => {
            log::error!("Failed to add review: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

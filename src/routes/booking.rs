use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::booking::BookingForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::booking as booking_service;

#[get("/bookings")]
pub async fn show_bookings(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect(&server_config.auth_service_url);
    };

    let bookings = match booking_service::list_my_bookings(repo.get_ref(), &user) {
        Ok(bookings) => bookings,
        Err(e) => {
            log::error!("Failed to list bookings: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = base_context(
        &flash_messages,
        Some(&user),
        "bookings",
        &server_config.auth_service_url,
    );
    context.insert("bookings", &bookings);

    render_template(&tera, "bookings/index.html", &context)
}

#[post("/listings/{listing_id}/bookings")]
pub async fn add_booking(
    listing_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<BookingForm>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect(&server_config.auth_service_url);
    };

    let listing_id = listing_id.into_inner();

    match booking_service::create_booking(repo.get_ref(), &user, listing_id, form) {
        Ok(_) => {
            FlashMessage::success("Booking created.").send();
            redirect("/bookings")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
            redirect("/listings")
        }
        Err(e) => {
            log::error!("Failed to create booking: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/bookings/{booking_id}/cancel")]
pub async fn cancel_booking(
    booking_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let Some(user) = user else {
        return redirect(&server_config.auth_service_url);
    };

    match booking_service::cancel_booking(repo.get_ref(), &user, booking_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Booking cancelled.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Booking not found.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This booking is not yours to cancel.").send();
        }
        Err(e) => {
            log::error!("Failed to cancel booking: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    }
    redirect("/bookings")
}

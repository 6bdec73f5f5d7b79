//! Admin listings API. All endpoints require the admin role in the caller's
//! identity token.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::{ApiMessage, ListingPayload};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::api_error_response;
use crate::services::api as api_service;

#[get("/v1/listings")]
pub async fn api_v1_list_listings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_listings(repo.get_ref(), &user) {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(e) => api_error_response(&e),
    }
}

#[post("/v1/listings")]
pub async fn api_v1_create_listing(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<ListingPayload>,
) -> impl Responder {
    match api_service::create_listing(repo.get_ref(), &user, payload.into_inner()) {
        Ok(listing) => HttpResponse::Created().json(listing),
        Err(e) => api_error_response(&e),
    }
}

#[get("/v1/listings/{listing_id}")]
pub async fn api_v1_get_listing(
    listing_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::get_listing(repo.get_ref(), &user, listing_id.into_inner()) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(e) => api_error_response(&e),
    }
}

#[put("/v1/listings/{listing_id}")]
pub async fn api_v1_update_listing(
    listing_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<ListingPayload>,
) -> impl Responder {
    match api_service::update_listing(
        repo.get_ref(),
        &user,
        listing_id.into_inner(),
        payload.into_inner(),
    ) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(e) => api_error_response(&e),
    }
}

#[delete("/v1/listings/{listing_id}")]
pub async fn api_v1_delete_listing(
    listing_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::delete_listing(repo.get_ref(), &user, listing_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(ApiMessage {
            message: "Listing deleted successfully".to_string(),
        }),
        Err(e) => api_error_response(&e),
    }
}

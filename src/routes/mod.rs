//! Actix handlers and the small helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::services::ServiceError;

pub mod api;
pub mod booking;
pub mod listing;
pub mod main;

/// Returns true when `roles` contains `role`.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// 303 redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Maps flash levels to the alert classes used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Template context shared by every HTML page: alerts, the optional current
/// user, the active page marker, and the sign-in URL.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
    auth_service_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context.insert("auth_service_url", auth_service_url);
    context
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure onto the JSON API error contract.
pub fn api_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(serde_json::json!({ "error": "Unauthorized" }))
        }
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
        }
        ServiceError::Form(msg) | ServiceError::Validation(msg) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        ServiceError::Repository(e) => {
            log::error!("Repository failure: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Internal Server Error" }))
        }
    }
}

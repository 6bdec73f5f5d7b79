use actix_web::http::StatusCode;
use actix_web_flash_messages::Level;

use unistay::repository::errors::RepositoryError;
use unistay::routes::{alert_level_to_str, api_error_response, check_role};
use unistay::services::ServiceError;

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn test_check_role() {
    let roles = vec!["admin".to_string(), "landlord".to_string()];
    assert!(check_role("admin", &roles));
    assert!(!check_role("guest", &roles));
    assert!(!check_role("admin", &[]));
}

#[test]
fn test_api_error_response_status_codes() {
    assert_eq!(
        api_error_response(&ServiceError::Unauthorized).status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        api_error_response(&ServiceError::NotFound).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        api_error_response(&ServiceError::Form("bad input".to_string())).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        api_error_response(&ServiceError::Validation("unknown amenity".to_string())).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        api_error_response(&ServiceError::Repository(RepositoryError::ConnectionError(
            "pool exhausted".to_string()
        )))
        .status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

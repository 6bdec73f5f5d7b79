//! Caller identity extracted per request.
//!
//! Sign-in lives in an external auth service that issues a JWT; the token is
//! carried in the actix-identity cookie and verified here with the configured
//! secret. Handlers receive the identity as an explicit extractor argument
//! (or `Option` of it), never through ambient global state.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error::ErrorUnauthorized, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// Opaque user identifier.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    /// Expiration timestamp, seconds since the epoch.
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Signs the claims into a JWT for the identity cookie.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Verifies a JWT and returns the claims it carries.
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = (|| {
            let identity = Identity::from_request(req, payload)
                .into_inner()
                .map_err(|_| ErrorUnauthorized("not signed in"))?;
            let token = identity
                .id()
                .map_err(|_| ErrorUnauthorized("invalid identity"))?;
            let config = req
                .app_data::<web::Data<ServerConfig>>()
                .ok_or_else(|| ErrorUnauthorized("server configuration missing"))?;
            AuthenticatedUser::from_jwt(&token, &config.secret)
                .map_err(|_| ErrorUnauthorized("invalid identity token"))
        })();
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            email: "student@example.com".to_string(),
            name: "Student".to_string(),
            roles: vec!["admin".to_string()],
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        }
    }

    #[test]
    fn jwt_round_trip() {
        let user = sample_user();
        let token = user.to_jwt("secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "secret").unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn jwt_with_wrong_secret_is_rejected() {
        let token = sample_user().to_jwt("secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other").is_err());
    }
}

//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Secret used for session cookies and identity token verification.
    pub secret: String,
    /// External service users are sent to for sign-in.
    pub auth_service_url: String,
}

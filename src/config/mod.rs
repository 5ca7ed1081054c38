pub mod cors;
pub mod database;

use anyhow::{Context, Result};
use std::env;

/// Environment-derived configuration, read once at startup and passed to
/// component constructors.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub db_name: String,
    pub jwt_secret: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_uri: String,
    pub media_api_url: String,
    pub media_api_key: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_sender: String,
    pub frontend_url: String,
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} must be set", name))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: or_default("HOST", "127.0.0.1"),
            port: or_default("PORT", "8080")
                .parse()
                .context("PORT must be a valid port number")?,
            mongodb_uri: required("MONGODB_URI")?,
            db_name: required("DB_NAME")?,
            jwt_secret: required("JWT_SECRET_KEY")?,
            access_token_ttl_minutes: or_default("ACCESS_TOKEN_TTL_MINUTES", "60")
                .parse()
                .context("ACCESS_TOKEN_TTL_MINUTES must be a number")?,
            refresh_token_ttl_days: or_default("REFRESH_TOKEN_TTL_DAYS", "7")
                .parse()
                .context("REFRESH_TOKEN_TTL_DAYS must be a number")?,
            google_client_id: required("CLIENT_ID")?,
            google_client_secret: required("CLIENT_SECRET")?,
            google_redirect_uri: required("REDIRECT_URI")?,
            media_api_url: required("MEDIA_API_URL")?,
            media_api_key: required("MEDIA_API_KEY")?,
            mail_api_url: required("MAIL_API_URL")?,
            mail_api_key: required("MAIL_API_KEY")?,
            mail_sender: or_default("MAIL_SENDER", "no-reply@estatex.app"),
            frontend_url: or_default("FRONTEND_URL", "http://localhost:3000"),
        })
    }
}

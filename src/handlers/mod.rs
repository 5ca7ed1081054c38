pub mod admin_handler;
pub mod auth_handler;
pub mod oauth_handler;
pub mod property_handler;
pub mod upload_handler;
pub mod user_handler;

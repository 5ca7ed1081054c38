use actix_web::web;
use std::sync::Arc;

use crate::{
    config::{AppConfig, cors::configure_cors},
    handlers::auth_handler::{
        forgot_password_handler, login_handler, logout_handler, refresh_token_handler,
        register_user_handler, reset_password_handler, verify_email_handler,
    },
    handlers::oauth_handler::{oauth_callback_handler, oauth_login_handler},
    services::user_service::UserService,
};

pub fn configure_auth_routes(
    cfg: &mut web::ServiceConfig,
    config: &AppConfig,
    user_service_data: web::Data<Arc<UserService>>,
) {
    cfg.service(
        web::scope("/api/auth")
            .wrap(configure_cors(&config.frontend_url))
            .app_data(user_service_data)
            .route("/register", web::post().to(register_user_handler))
            .route("/login", web::post().to(login_handler))
            .route("/refresh", web::post().to(refresh_token_handler))
            .route("/logout", web::delete().to(logout_handler))
            .route("/verify-email", web::get().to(verify_email_handler))
            .route("/forgot-password", web::post().to(forgot_password_handler))
            .route("/reset-password", web::post().to(reset_password_handler))
            .route("/google", web::get().to(oauth_login_handler))
            .route("/google/callback", web::get().to(oauth_callback_handler)),
    );
}

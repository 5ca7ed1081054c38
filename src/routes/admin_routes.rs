use actix_web::web;
use std::sync::Arc;

use crate::{
    config::{AppConfig, cors::configure_cors},
    handlers::admin_handler::{
        delete_property_handler, delete_user_handler, list_properties_handler,
        list_users_handler, run_expiration_sweep_handler, set_property_status_handler,
        update_user_handler,
    },
    services::{property_service::PropertyService, user_service::UserService},
};

pub fn configure_admin_routes(
    cfg: &mut web::ServiceConfig,
    config: &AppConfig,
    user_service_data: web::Data<Arc<UserService>>,
    property_service_data: web::Data<Arc<PropertyService>>,
) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(configure_cors(&config.frontend_url))
            .app_data(user_service_data)
            .app_data(property_service_data)
            .route("/users", web::get().to(list_users_handler))
            .route("/users/{id}", web::put().to(update_user_handler))
            .route("/users/{id}", web::delete().to(delete_user_handler))
            .route("/properties", web::get().to(list_properties_handler))
            .route(
                "/properties/{id}/status",
                web::put().to(set_property_status_handler),
            )
            .route("/properties/{id}", web::delete().to(delete_property_handler))
            .route(
                "/maintenance/expire",
                web::post().to(run_expiration_sweep_handler),
            ),
    );
}

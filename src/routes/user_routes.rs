use actix_web::web;
use std::sync::Arc;

use crate::{
    config::{AppConfig, cors::configure_cors},
    handlers::user_handler::{
        add_saved_search_handler, delete_account_handler, get_profile_handler,
        list_favorites_handler, remove_avatar_handler, remove_saved_search_handler,
        set_avatar_handler, update_profile_handler,
    },
    services::{property_service::PropertyService, user_service::UserService},
};

pub fn configure_user_routes(
    cfg: &mut web::ServiceConfig,
    config: &AppConfig,
    user_service_data: web::Data<Arc<UserService>>,
    property_service_data: web::Data<Arc<PropertyService>>,
) {
    cfg.service(
        web::scope("/api/users")
            .wrap(configure_cors(&config.frontend_url))
            .app_data(user_service_data)
            .app_data(property_service_data)
            .route("/me", web::get().to(get_profile_handler))
            .route("/me", web::put().to(update_profile_handler))
            .route("/me", web::delete().to(delete_account_handler))
            .route("/me/favorites", web::get().to(list_favorites_handler))
            .route("/me/saved-searches", web::post().to(add_saved_search_handler))
            .route(
                "/me/saved-searches/{name}",
                web::delete().to(remove_saved_search_handler),
            )
            .route("/me/avatar", web::post().to(set_avatar_handler))
            .route("/me/avatar", web::delete().to(remove_avatar_handler)),
    );
}

use actix_web::web;
use std::sync::Arc;

use crate::{
    config::{AppConfig, cors::configure_cors},
    handlers::property_handler::{
        add_contact_request_handler, add_favorite_handler, add_review_handler,
        create_draft_handler, create_property_handler, delete_property_handler,
        get_property_handler, list_properties_handler, remove_favorite_handler,
        similar_properties_handler, update_property_handler,
    },
    handlers::upload_handler::{
        add_image_handler, remove_image_handler, reorder_images_handler, set_main_image_handler,
    },
    services::property_service::PropertyService,
};

pub fn configure_property_routes(
    cfg: &mut web::ServiceConfig,
    config: &AppConfig,
    property_service_data: web::Data<Arc<PropertyService>>,
) {
    // literal segments are registered before `/{id}` so `/draft` never
    // parses as an object id
    cfg.service(
        web::scope("/api/properties")
            .wrap(configure_cors(&config.frontend_url))
            .app_data(property_service_data)
            .route("", web::get().to(list_properties_handler))
            .route("", web::post().to(create_property_handler))
            .route("/draft", web::post().to(create_draft_handler))
            .route("/{id}", web::get().to(get_property_handler))
            .route("/{id}", web::put().to(update_property_handler))
            .route("/{id}", web::delete().to(delete_property_handler))
            .route("/{id}/favorites", web::post().to(add_favorite_handler))
            .route("/{id}/favorites", web::delete().to(remove_favorite_handler))
            .route("/{id}/reviews", web::post().to(add_review_handler))
            .route("/{id}/contacts", web::post().to(add_contact_request_handler))
            .route("/{id}/similar", web::get().to(similar_properties_handler))
            .route("/{id}/images", web::post().to(add_image_handler))
            .route("/{id}/images/reorder", web::put().to(reorder_images_handler))
            .route(
                "/{id}/images/{image_id}",
                web::delete().to(remove_image_handler),
            )
            .route(
                "/{id}/images/{image_id}/main",
                web::put().to(set_main_image_handler),
            ),
    );
}

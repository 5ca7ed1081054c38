use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::property_service::PropertyService,
    types::{
        errors::ServiceError,
        requests::upload::{
            image_upload_request::ImageUploadRequest, reorder_request::ReorderImagesRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::auth_utils::AuthenticatedUser,
    utils::object_id::parse_object_id,
};

pub async fn add_image_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<ImageUploadRequest>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let images = property_service
        .add_image(&id, &user.0, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Image uploaded", images)))
}

pub async fn remove_image_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (property_id, image_id) = path.into_inner();
    let id = parse_object_id(&property_id)?;
    let images = property_service.remove_image(&id, &image_id, &user.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Image removed", images)))
}

pub async fn reorder_images_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<ReorderImagesRequest>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let images = property_service
        .reorder_images(&id, &body.image_ids, &user.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Images reordered", images)))
}

pub async fn set_main_image_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (property_id, image_id) = path.into_inner();
    let id = parse_object_id(&property_id)?;
    let images = property_service
        .set_main_image(&id, &image_id, &user.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Main image updated", images)))
}

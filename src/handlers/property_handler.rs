use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, SIMILAR_LIMIT},
    services::property_service::PropertyService,
    types::{
        errors::ServiceError,
        models::property::status::PropertyStatus,
        requests::property::{
            contact_request::ContactRequestBody, create_property_request::CreatePropertyRequest,
            listing_query::ListingQuery, review_request::ReviewRequest,
            update_property_request::UpdatePropertyRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::auth_utils::{AuthenticatedUser, MaybeUser},
    utils::object_id::parse_object_id,
    utils::session_utils::{has_visited, visited_cookie, visited_ids},
};

pub async fn list_properties_handler(
    property_service: web::Data<Arc<PropertyService>>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse, ServiceError> {
    let public_status = PropertyStatus::Active.to_string();
    let page = property_service
        .list(&query, Some(public_status.as_str()), DEFAULT_PAGE_SIZE)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Properties fetched successfully", page)))
}

pub async fn get_property_handler(
    req: HttpRequest,
    property_service: web::Data<Arc<PropertyService>>,
    viewer: MaybeUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let hex = id.to_hex();

    let visited = visited_ids(&req);
    let already_visited = has_visited(&visited, &hex);

    let property = property_service
        .get(&id, viewer.0.as_ref(), already_visited)
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(visited_cookie(visited, &hex))
        .json(ApiResponse::success(
            "Property fetched successfully",
            property,
        )))
}

pub async fn create_property_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    body: web::Json<CreatePropertyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let property = property_service
        .create(body.into_inner(), &user.0, false)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Property successfully created",
        property,
    )))
}

pub async fn create_draft_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    body: web::Json<CreatePropertyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let property = property_service
        .create(body.into_inner(), &user.0, true)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Draft saved", property)))
}

pub async fn update_property_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<UpdatePropertyRequest>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let property = property_service
        .update(&id, body.into_inner(), &user.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Property successfully updated",
        property,
    )))
}

pub async fn delete_property_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    property_service.delete(&id, &user.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Property deleted")))
}

pub async fn add_favorite_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let favorites = property_service.add_favorite(&user.0, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Property added to favorites",
        json!({ "favorites": favorites }),
    )))
}

pub async fn remove_favorite_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let favorites = property_service.remove_favorite(&user.0, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Property removed from favorites",
        json!({ "favorites": favorites }),
    )))
}

pub async fn add_review_handler(
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<ReviewRequest>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let (review, average_rating) = property_service
        .add_review(&id, &user.0, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Review added",
        json!({ "review": review, "average_rating": average_rating }),
    )))
}

pub async fn add_contact_request_handler(
    property_service: web::Data<Arc<PropertyService>>,
    path: web::Path<String>,
    body: web::Json<ContactRequestBody>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    property_service
        .add_contact_request(&id, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::<()>::message(
        "Contact request sent to the agent",
    )))
}

pub async fn similar_properties_handler(
    property_service: web::Data<Arc<PropertyService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let id = parse_object_id(&path)?;
    let similar = property_service.similar(&id, SIMILAR_LIMIT).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Similar properties fetched successfully",
        similar,
    )))
}

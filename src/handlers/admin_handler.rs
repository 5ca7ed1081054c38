use actix_web::{HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

use crate::{
    constants::ADMIN_PAGE_SIZE,
    services::{property_service::PropertyService, user_service::UserService},
    types::{
        errors::ServiceError,
        requests::{
            property::{listing_query::ListingQuery, status_request::StatusUpdateRequest},
            user::{admin_update_user_request::AdminUpdateUserRequest, user_query::UserQuery},
        },
        responses::{
            api_response::ApiResponse, pagination::Paginated, user_response::UserResponse,
        },
    },
    utils::auth_utils::AuthenticatedUser,
    utils::object_id::parse_object_id,
};

pub async fn list_users_handler(
    user_service: web::Data<Arc<UserService>>,
    admin: AuthenticatedUser,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, ServiceError> {
    admin.0.require_admin()?;

    let page = user_service.admin_list_users(&query).await?;
    let page = Paginated {
        items: page.items.into_iter().map(UserResponse::from).collect(),
        pagination: page.pagination,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success("Users fetched successfully", page)))
}

pub async fn update_user_handler(
    user_service: web::Data<Arc<UserService>>,
    admin: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<AdminUpdateUserRequest>,
) -> Result<HttpResponse, ServiceError> {
    admin.0.require_admin()?;

    let id = parse_object_id(&path)?;
    let user = user_service.admin_update_user(&id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User updated",
        UserResponse::from(user),
    )))
}

pub async fn delete_user_handler(
    user_service: web::Data<Arc<UserService>>,
    property_service: web::Data<Arc<PropertyService>>,
    admin: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    admin.0.require_admin()?;

    let id = parse_object_id(&path)?;
    property_service.delete_all_managed_by(&id).await?;
    user_service.delete_user(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("User deleted")))
}

/// Admin listing: any status, larger default page size.
pub async fn list_properties_handler(
    property_service: web::Data<Arc<PropertyService>>,
    admin: AuthenticatedUser,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse, ServiceError> {
    admin.0.require_admin()?;

    let page = property_service.list(&query, None, ADMIN_PAGE_SIZE).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Properties fetched successfully", page)))
}

pub async fn set_property_status_handler(
    property_service: web::Data<Arc<PropertyService>>,
    admin: AuthenticatedUser,
    path: web::Path<String>,
    body: web::Json<StatusUpdateRequest>,
) -> Result<HttpResponse, ServiceError> {
    admin.0.require_admin()?;

    let id = parse_object_id(&path)?;
    property_service.set_status(&id, body.status, &admin.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Property status updated",
        json!({ "status": body.status }),
    )))
}

pub async fn delete_property_handler(
    property_service: web::Data<Arc<PropertyService>>,
    admin: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    admin.0.require_admin()?;

    let id = parse_object_id(&path)?;
    property_service.delete(&id, &admin.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Property deleted")))
}

/// Runs the expiration sweep on demand.
pub async fn run_expiration_sweep_handler(
    property_service: web::Data<Arc<PropertyService>>,
    admin: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    admin.0.require_admin()?;

    let deactivated = property_service.deactivate_expired().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Expiration sweep completed",
        json!({ "deactivated": deactivated }),
    )))
}

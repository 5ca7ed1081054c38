use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::{property_service::PropertyService, user_service::UserService},
    types::{
        errors::ServiceError,
        requests::{
            upload::avatar_request::AvatarUploadRequest,
            user::{
                saved_search_request::SavedSearchRequest,
                update_profile_request::UpdateProfileRequest,
            },
        },
        responses::{api_response::ApiResponse, user_response::UserResponse},
    },
    utils::auth_utils::AuthenticatedUser,
};

pub async fn get_profile_handler(
    user_service: web::Data<Arc<UserService>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let profile = user_service.get_user(&user.0.object_id()?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Profile fetched successfully",
        UserResponse::from(profile),
    )))
}

pub async fn update_profile_handler(
    user_service: web::Data<Arc<UserService>>,
    user: AuthenticatedUser,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ServiceError> {
    let profile = user_service
        .update_profile(&user.0.object_id()?, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Profile updated",
        UserResponse::from(profile),
    )))
}

/// Account deletion cascades to the user's listings (and their stored
/// images) before the account itself goes.
pub async fn delete_account_handler(
    user_service: web::Data<Arc<UserService>>,
    property_service: web::Data<Arc<PropertyService>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let id = user.0.object_id()?;
    property_service.delete_all_managed_by(&id).await?;
    user_service.delete_user(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Account deleted")))
}

pub async fn list_favorites_handler(
    user_service: web::Data<Arc<UserService>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let favorites = user_service
        .favorite_listings(&user.0.object_id()?)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Favorites fetched successfully",
        favorites,
    )))
}

pub async fn add_saved_search_handler(
    user_service: web::Data<Arc<UserService>>,
    user: AuthenticatedUser,
    body: web::Json<SavedSearchRequest>,
) -> Result<HttpResponse, ServiceError> {
    let search = user_service
        .add_saved_search(&user.0.object_id()?, body.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Search saved", search)))
}

pub async fn remove_saved_search_handler(
    user_service: web::Data<Arc<UserService>>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    user_service
        .remove_saved_search(&user.0.object_id()?, &path)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Saved search removed")))
}

pub async fn set_avatar_handler(
    user_service: web::Data<Arc<UserService>>,
    user: AuthenticatedUser,
    body: web::Json<AvatarUploadRequest>,
) -> Result<HttpResponse, ServiceError> {
    let avatar = user_service
        .set_avatar(&user.0.object_id()?, &body.data)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Avatar updated", avatar)))
}

pub async fn remove_avatar_handler(
    user_service: web::Data<Arc<UserService>>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    user_service.remove_avatar(&user.0.object_id()?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Avatar removed")))
}

use actix_web::{HttpResponse, web};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    config::AppConfig,
    constants::{ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME},
    services::{
        oauth_service::{authorization_url, exchange_code_for_token, fetch_user_info},
        user_service::UserService,
    },
    types::{
        errors::ServiceError,
        responses::{api_response::ApiResponse, user_response::UserResponse},
    },
    utils::auth_utils::auth_cookie,
};

pub async fn oauth_login_handler(
    config: web::Data<Arc<AppConfig>>,
) -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Found()
        .append_header(("Location", authorization_url(&config)))
        .finish())
}

pub async fn oauth_callback_handler(
    config: web::Data<Arc<AppConfig>>,
    user_service: web::Data<Arc<UserService>>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ServiceError> {
    let code = query
        .get("code")
        .ok_or_else(|| ServiceError::BadRequest("Authorization code is missing".to_string()))?;

    let tokens = exchange_code_for_token(code, &config)
        .await
        .map_err(ServiceError::Internal)?;
    let access_token = tokens["access_token"].as_str().unwrap_or_default();
    if access_token.is_empty() {
        return Err(ServiceError::Unauthorized(
            "The provider did not return an access token".to_string(),
        ));
    }

    let user_info = fetch_user_info(access_token)
        .await
        .map_err(ServiceError::Internal)?;
    let google_id = user_info["id"].as_str().unwrap_or_default();
    let email = user_info["email"].as_str().unwrap_or_default();
    let name = user_info["name"].as_str().unwrap_or_default();
    if google_id.is_empty() || email.is_empty() || name.is_empty() {
        return Err(ServiceError::Unauthorized(
            "Invalid user data from the OAuth provider".to_string(),
        ));
    }

    let (user, access, refresh) = user_service.oauth_login(google_id, email, name).await?;

    let access_cookie = auth_cookie(
        ACCESS_COOKIE_NAME,
        access.clone(),
        config.access_token_ttl_minutes * 60,
    );
    let refresh_cookie = auth_cookie(
        REFRESH_COOKIE_NAME,
        refresh.clone(),
        config.refresh_token_ttl_days * 24 * 3600,
    );

    Ok(HttpResponse::Ok()
        .cookie(access_cookie)
        .cookie(refresh_cookie)
        .json(ApiResponse::success(
            "Login successful",
            json!({
                "user": UserResponse::from(user),
                "access_token": access,
                "refresh_token": refresh,
            }),
        )))
}

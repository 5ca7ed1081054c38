use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

use crate::{
    config::AppConfig,
    constants::{ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME},
    services::user_service::UserService,
    types::{
        errors::ServiceError,
        requests::auth::{
            login_request::LoginRequest,
            password_reset::{ForgotPasswordRequest, ResetPasswordRequest, VerifyEmailQuery},
            register_request::RegisterRequest,
        },
        responses::{api_response::ApiResponse, user_response::UserResponse},
    },
    utils::auth_utils::{
        TokenKind, auth_cookie, decode_jwt, expired_cookie, refresh_cookie_value,
    },
    utils::validation_utils::{validate_login_data, validate_register_data},
};

pub async fn register_user_handler(
    user_service: web::Data<Arc<UserService>>,
    new_user: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ServiceError> {
    let data = new_user.into_inner();

    validate_register_data(&data)
        .map_err(|errors| ServiceError::validation("Invalid registration data", errors))?;

    let user = user_service.register_user(data).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(
        "User successfully registered. Please verify your email address.",
        UserResponse::from(user),
    )))
}

pub async fn login_handler(
    config: web::Data<Arc<AppConfig>>,
    user_service: web::Data<Arc<UserService>>,
    credentials: web::Json<LoginRequest>,
) -> Result<HttpResponse, ServiceError> {
    let data = credentials.into_inner();

    validate_login_data(&data)
        .map_err(|errors| ServiceError::validation("Invalid login credentials", errors))?;

    let (user, access, refresh) = user_service
        .authenticate_user(&data.email, &data.password)
        .await?;

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

pub async fn refresh_token_handler(
    req: HttpRequest,
    config: web::Data<Arc<AppConfig>>,
    user_service: web::Data<Arc<UserService>>,
) -> Result<HttpResponse, ServiceError> {
    let token = refresh_cookie_value(&req)
        .ok_or_else(|| ServiceError::Unauthorized("Missing refresh token".to_string()))?;

    let claims = decode_jwt(&token, &config.jwt_secret)?;
    if claims.token_type != TokenKind::Refresh {
        return Err(ServiceError::Unauthorized(
            "An access token cannot be used to refresh".to_string(),
        ));
    }

    let (user, access) = user_service
        .refresh_access_token(&claims.object_id()?)
        .await?;

    let access_cookie = auth_cookie(
        ACCESS_COOKIE_NAME,
        access.clone(),
        config.access_token_ttl_minutes * 60,
    );

    Ok(HttpResponse::Ok().cookie(access_cookie).json(ApiResponse::success(
        "Token refreshed",
        json!({
            "user": UserResponse::from(user),
            "access_token": access,
        }),
    )))
}

pub async fn logout_handler() -> Result<HttpResponse, ServiceError> {
    Ok(HttpResponse::Ok()
        .cookie(expired_cookie(ACCESS_COOKIE_NAME))
        .cookie(expired_cookie(REFRESH_COOKIE_NAME))
        .json(ApiResponse::<()>::message("Logged out successfully.")))
}

pub async fn verify_email_handler(
    user_service: web::Data<Arc<UserService>>,
    query: web::Query<VerifyEmailQuery>,
) -> Result<HttpResponse, ServiceError> {
    user_service.verify_email(&query.token).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Email address verified.")))
}

pub async fn forgot_password_handler(
    user_service: web::Data<Arc<UserService>>,
    body: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, ServiceError> {
    user_service.forgot_password(&body.email).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(
        "If the address exists, a reset email has been sent.",
    )))
}

pub async fn reset_password_handler(
    user_service: web::Data<Arc<UserService>>,
    body: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ServiceError> {
    let data = body.into_inner();
    user_service.reset_password(&data.token, &data.password).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(
        "Password has been reset. You can now log in.",
    )))
}

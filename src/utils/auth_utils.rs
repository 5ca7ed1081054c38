use actix_web::{
    FromRequest, HttpRequest,
    cookie::{Cookie, SameSite, time::Duration as CookieDuration},
    dev::Payload,
    web,
};
use anyhow::anyhow;
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use bson::oid::ObjectId;
use chrono::{Duration, Utc};
use futures::future::{Ready, ready};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::{Rng, distributions::Alphanumeric, thread_rng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    config::AppConfig,
    constants::{ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME},
    models::user_model::User,
    types::errors::ServiceError,
    types::models::user::role::UserRole,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id as 24-char hex.
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub token_type: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn object_id(&self) -> Result<ObjectId, ServiceError> {
        ObjectId::parse_str(&self.sub)
            .map_err(|_| ServiceError::Unauthorized("Invalid token subject".to_string()))
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_agent(&self) -> bool {
        self.role == UserRole::Agent
    }

    pub fn require_admin(&self) -> Result<(), ServiceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(
                "Administrator privileges required".to_string(),
            ))
        }
    }
}

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("password hashing failed: {e}"))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("stored hash is malformed: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn generate_token(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub fn generate_jwt(
    user: &User,
    kind: TokenKind,
    config: &AppConfig,
) -> anyhow::Result<String> {
    let user_id = user._id.ok_or_else(|| anyhow!("user has no id"))?;
    let now = Utc::now();
    let ttl = match kind {
        TokenKind::Access => Duration::minutes(config.access_token_ttl_minutes),
        TokenKind::Refresh => Duration::days(config.refresh_token_ttl_days),
    };
    let claims = Claims {
        sub: user_id.to_hex(),
        email: user.email.clone(),
        role: user.role,
        token_type: kind,
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| anyhow!("JWT generation failed: {e}"))
}

pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, ServiceError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ServiceError::Unauthorized("Invalid or expired token".to_string()))
}

pub fn auth_cookie(name: &'static str, token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(name, token)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(CookieDuration::seconds(max_age_seconds))
        .finish()
}

pub fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(CookieDuration::new(0, 0))
        .finish()
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    if let Some(header) = req.headers().get("Authorization") {
        if let Ok(value) = header.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.trim().to_string());
            }
        }
    }
    req.cookie(ACCESS_COOKIE_NAME).map(|c| c.value().to_string())
}

fn claims_from_request(req: &HttpRequest) -> Result<Claims, ServiceError> {
    let config = req
        .app_data::<web::Data<Arc<AppConfig>>>()
        .ok_or_else(|| ServiceError::Internal(anyhow!("AppConfig missing from app data")))?;

    let token = bearer_token(req)
        .ok_or_else(|| ServiceError::Unauthorized("Authentication required".to_string()))?;

    let claims = decode_jwt(&token, &config.jwt_secret)?;
    if claims.token_type != TokenKind::Access {
        return Err(ServiceError::Unauthorized(
            "A refresh token cannot be used for authentication".to_string(),
        ));
    }
    Ok(claims)
}

/// Extractor for protected routes; rejects with 401 when no valid access
/// token is presented.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            claims_from_request(req)
                .map(AuthenticatedUser)
                .map_err(actix_web::Error::from),
        )
    }
}

/// Extractor for routes that behave differently for signed-in users but
/// stay public; never rejects.
pub struct MaybeUser(pub Option<Claims>);

impl FromRequest for MaybeUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(MaybeUser(claims_from_request(req).ok())))
    }
}

pub fn refresh_cookie_value(req: &HttpRequest) -> Option<String> {
    req.cookie(REFRESH_COOKIE_NAME)
        .map(|c| c.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            db_name: "estatex_test".to_string(),
            jwt_secret: "test-secret".to_string(),
            access_token_ttl_minutes: 60,
            refresh_token_ttl_days: 7,
            google_client_id: String::new(),
            google_client_secret: String::new(),
            google_redirect_uri: String::new(),
            media_api_url: String::new(),
            media_api_key: String::new(),
            mail_api_url: String::new(),
            mail_api_key: String::new(),
            mail_sender: String::new(),
            frontend_url: String::new(),
        }
    }

    fn user() -> User {
        User {
            _id: Some(ObjectId::new()),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            phone: None,
            password: None,
            google_id: None,
            role: UserRole::Agent,
            is_verified: true,
            is_active: true,
            favorites: Default::default(),
            saved_searches: Vec::new(),
            agent_profile: None,
            avatar: None,
            verification_token: None,
            reset_token: None,
            reset_token_expires: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn jwt_round_trip_preserves_claims() {
        let config = config();
        let user = user();
        let token = generate_jwt(&user, TokenKind::Access, &config).unwrap();
        let claims = decode_jwt(&token, &config.jwt_secret).unwrap();
        assert_eq!(claims.sub, user._id.unwrap().to_hex());
        assert_eq!(claims.role, UserRole::Agent);
        assert_eq!(claims.token_type, TokenKind::Access);
    }

    #[test]
    fn jwt_rejects_a_different_secret() {
        let config = config();
        let token = generate_jwt(&user(), TokenKind::Access, &config).unwrap();
        assert!(decode_jwt(&token, "other-secret").is_err());
    }

    #[test]
    fn password_hash_verifies_and_rejects() {
        let hash = hash_password("Str0ng!pass").unwrap();
        assert!(verify_password("Str0ng!pass", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn generated_tokens_are_alphanumeric_of_requested_length() {
        let token = generate_token(32);
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

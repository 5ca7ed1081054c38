use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::types::responses::api_response::ApiResponse;

/// Error taxonomy shared by every handler. Implements
/// [`actix_web::ResponseError`] so handlers propagate with `?` and the
/// translation into the response envelope stays in one place.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: ValidationErrors,
    },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Duplicate(String),
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),
    #[error(transparent)]
    Serialization(#[from] bson::ser::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>, errors: ValidationErrors) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{} not found", what))
    }
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) | Self::Duplicate(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Serialization(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation { message, errors } => HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error(message, Some(json!(errors)))),
            Self::BadRequest(msg) | Self::Duplicate(msg) => {
                HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg, None))
            }
            Self::Unauthorized(msg) => {
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error(msg, None))
            }
            Self::Forbidden(msg) => {
                HttpResponse::Forbidden().json(ApiResponse::<()>::error(msg, None))
            }
            Self::NotFound(msg) => {
                HttpResponse::NotFound().json(ApiResponse::<()>::error(msg, None))
            }
            Self::Database(_) | Self::Serialization(_) | Self::Internal(_) => {
                let correlation_id = Uuid::new_v4();
                log::error!("[{}] {:#}", correlation_id, self);

                let correlation_id = correlation_id.to_string();
                let errors = if cfg!(debug_assertions) {
                    json!({ "correlationId": correlation_id, "detail": self.to_string() })
                } else {
                    json!({ "correlationId": correlation_id })
                };
                HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Internal server error", Some(errors)))
            }
        }
    }
}

use serde_json::json;
use std::{borrow::Cow, collections::HashMap};
use validator::{ValidationError, ValidationErrors};

use crate::{
    types::requests::auth::{login_request::LoginRequest, register_request::RegisterRequest},
    types::requests::user::update_profile_request::UpdateProfileRequest,
    validations::{
        email::validate_email, name::validate_name, password::validate_password,
        phone::validate_phone,
    },
};

pub fn add_error(code: &'static str, message: String, field_value: &str) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

pub fn validate_register_data(data: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_name(&data.name) {
        errors.add("name", e);
    }
    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password(&data.password) {
        errors.add("password", e);
    }
    if let Some(phone) = data.phone.as_deref() {
        if let Err(e) = validate_phone(phone) {
            errors.add("phone", e);
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_login_data(data: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_email(&data.email) {
        errors.add("email", e);
    }
    if data.password.is_empty() {
        errors.add(
            "password",
            add_error("password.empty", "Password must not be empty".to_string(), ""),
        );
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_profile_update(data: &UpdateProfileRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(name) = data.name.as_deref() {
        if let Err(e) = validate_name(name) {
            errors.add("name", e);
        }
    }
    if let Some(phone) = data.phone.as_deref() {
        if let Err(e) = validate_phone(phone) {
            errors.add("phone", e);
        }
    }
    if let Some(password) = data.password.as_deref() {
        if let Err(e) = validate_password(password) {
            errors.add("password", e);
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

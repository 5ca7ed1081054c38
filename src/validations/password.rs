use rayon::prelude::*;
use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

fn has_min_length(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

fn has_max_length(password: &str) -> Result<(), String> {
    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be no more than {} characters long",
            MAX_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

fn has_no_space(password: &str) -> Result<(), String> {
    if password.contains(' ') {
        return Err("Password must not contain spaces".to_string());
    }
    Ok(())
}

fn has_uppercase(password: &str) -> Result<(), String> {
    if !password.chars().any(|char| char.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    Ok(())
}

fn has_lowercase(password: &str) -> Result<(), String> {
    if !password.chars().any(|char| char.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    Ok(())
}

fn has_digit(password: &str) -> Result<(), String> {
    if !password.chars().any(|char| char.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }
    Ok(())
}

fn has_special_char(password: &str) -> Result<(), String> {
    if !password.chars().any(|char| !char.is_alphanumeric()) {
        return Err("Password must contain at least one special character".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let validations = vec![
        has_min_length,
        has_max_length,
        has_no_space,
        has_uppercase,
        has_lowercase,
        has_digit,
        has_special_char,
    ];

    let errors: Vec<String> = validations
        .par_iter()
        .filter_map(|validate_fn| validate_fn(password).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        // never echo the password back in the error params
        Err(add_error("password.invalid", errors.join(", "), ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_strong_password() {
        assert!(validate_password("Str0ng!pass").is_ok());
    }

    #[test]
    fn rejects_missing_digit() {
        assert!(validate_password("Strong!pass").is_err());
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_password("S1!a").is_err());
    }
}

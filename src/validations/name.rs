use rayon::prelude::*;
use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;

fn is_not_empty(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name must not be empty".to_string());
    }
    Ok(())
}

fn has_min_length(name: &str) -> Result<(), String> {
    if name.len() < MIN_NAME_LENGTH {
        return Err(format!(
            "Name must be at least {} characters long",
            MIN_NAME_LENGTH
        ));
    }
    Ok(())
}

fn has_max_length(name: &str) -> Result<(), String> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!("Name must be less than {} characters", MAX_NAME_LENGTH));
    }
    Ok(())
}

fn has_valid_chars(name: &str) -> Result<(), String> {
    if !name
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
    {
        return Err("Name can only contain letters, spaces, hyphens and apostrophes".to_string());
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let validations = [
        is_not_empty,
        has_min_length,
        has_max_length,
        has_valid_chars,
    ];

    let errors: Vec<String> = validations
        .par_iter()
        .filter_map(|f| f(name).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(add_error("name.invalid", errors.join(", "), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_names() {
        assert!(validate_name("Dana Ben-Ari").is_ok());
    }

    #[test]
    fn rejects_digits() {
        assert!(validate_name("Dana 3").is_err());
    }

    #[test]
    fn rejects_single_character() {
        assert!(validate_name("D").is_err());
    }
}

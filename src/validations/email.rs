use email_address::EmailAddress;
use rayon::prelude::*;
use validator::ValidationError;

use crate::utils::validation_utils::add_error;

const MIN_EMAIL_LENGTH: usize = 5;
const MAX_EMAIL_LENGTH: usize = 254;
const MIN_DOMAIN_SEGMENT_LENGTH: usize = 2;
const MIN_TLD_LENGTH: usize = 2;

fn has_min_length(email: &str) -> Result<(), String> {
    if email.len() < MIN_EMAIL_LENGTH {
        return Err(format!(
            "Email must be at least {} characters",
            MIN_EMAIL_LENGTH
        ));
    }
    Ok(())
}

fn has_max_length(email: &str) -> Result<(), String> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email must be less than {} characters",
            MAX_EMAIL_LENGTH
        ));
    }
    Ok(())
}

fn has_at_and_dot(email: &str) -> Result<(), String> {
    if !email.contains('@') || !email.contains('.') {
        return Err("Email must contain '@' and '.'".to_string());
    }
    Ok(())
}

fn is_at_before_dot(email: &str) -> Result<(), String> {
    if let (Some(at_index), Some(dot_index)) = (email.find('@'), email.rfind('.')) {
        if at_index >= dot_index {
            return Err("The '@' must come before the last '.'".to_string());
        }
    }
    Ok(())
}

fn has_no_invalid_chars(email: &str) -> Result<(), String> {
    if email.chars().any(|c| c == ' ' || !c.is_ascii()) {
        return Err("Email must not contain spaces or non-ASCII characters".to_string());
    }
    Ok(())
}

fn has_no_consecutive_dots(email: &str) -> Result<(), String> {
    if email.contains("..") {
        return Err("Email must not contain consecutive dots".to_string());
    }
    Ok(())
}

fn has_no_leading_or_trailing_dot(email: &str) -> Result<(), String> {
    if email.starts_with('.') || email.ends_with('.') {
        return Err("Email must not start or end with a dot".to_string());
    }
    Ok(())
}

fn get_domain(email: &str) -> Option<&str> {
    email.split('@').nth(1)
}

fn domain_exists(email: &str) -> Result<(), String> {
    if get_domain(email).is_none() {
        return Err("Email must have a domain part after '@'".to_string());
    }
    Ok(())
}

fn is_structure_valid_domain(email: &str) -> Result<(), String> {
    if let Some(domain) = get_domain(email) {
        if !domain.contains('.') || domain.contains(' ') || domain.is_empty() {
            return Err("The domain part of the email is invalid".to_string());
        }
        if domain.starts_with('.') {
            return Err("The domain part must not start with a dot".to_string());
        }
    }
    Ok(())
}

fn has_valid_domain_segment_length(email: &str) -> Result<(), String> {
    if let Some(domain) = get_domain(email) {
        if let Some(first_dot_index) = domain.find('.') {
            if first_dot_index < MIN_DOMAIN_SEGMENT_LENGTH {
                return Err(format!(
                    "The domain part (after '@') must have at least {} characters before the first dot",
                    MIN_DOMAIN_SEGMENT_LENGTH
                ));
            }
        }
    }
    Ok(())
}

fn has_valid_tld_format(email: &str) -> Result<(), String> {
    if let Some(domain) = get_domain(email) {
        if let Some(last_dot_index) = domain.rfind('.') {
            let tld = &domain[last_dot_index + 1..];
            if tld.len() < MIN_TLD_LENGTH || !tld.chars().all(|c| c.is_alphabetic()) {
                return Err(format!(
                    "The TLD (after the last '.') must be at least {} characters long and alphabetic",
                    MIN_TLD_LENGTH
                ));
            }
        }
    }
    Ok(())
}

fn is_overall_format_valid(email: &str) -> Result<(), String> {
    if !EmailAddress::is_valid(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let validations = vec![
        has_min_length,
        has_max_length,
        has_at_and_dot,
        is_at_before_dot,
        has_no_invalid_chars,
        has_no_consecutive_dots,
        has_no_leading_or_trailing_dot,
        domain_exists,
        is_structure_valid_domain,
        has_valid_domain_segment_length,
        has_valid_tld_format,
    ];

    let mut errors: Vec<String> = validations
        .par_iter()
        .filter_map(|validate| validate(email).err())
        .collect();

    if errors.is_empty() {
        if let Err(msg) = is_overall_format_valid(email) {
            errors.push(msg);
        }
    }

    if !errors.is_empty() {
        return Err(add_error("email.invalid", errors.join(", "), email));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_address() {
        assert!(validate_email("dana@example.com").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(validate_email("dana.example.com").is_err());
    }

    #[test]
    fn rejects_consecutive_dots() {
        assert!(validate_email("dana..levy@example.com").is_err());
    }

    #[test]
    fn rejects_numeric_tld() {
        assert!(validate_email("dana@example.c1").is_err());
    }
}

use validator::ValidationError;

use crate::utils::validation_utils::add_error;

/// Expects international format; parsing without a default region requires
/// a leading `+`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let parsed = phonenumber::parse(None, phone)
        .ok()
        .filter(phonenumber::is_valid);

    if parsed.is_none() {
        return Err(add_error(
            "phone.invalid",
            "Phone number must be a valid international number".to_string(),
            phone,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_format() {
        assert!(validate_phone("+972521234567").is_ok());
    }

    #[test]
    fn rejects_free_text() {
        assert!(validate_phone("call me maybe").is_err());
    }
}

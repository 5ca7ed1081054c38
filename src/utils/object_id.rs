use bson::oid::ObjectId;

use crate::types::errors::ServiceError;

/// Path-parameter guard: ids must be 24-character hex before any handler
/// or store work happens.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ServiceError> {
    let raw = raw.trim();
    if raw.len() != 24 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ServiceError::BadRequest(format!(
            "'{raw}' is not a valid object id"
        )));
    }
    ObjectId::parse_str(raw)
        .map_err(|_| ServiceError::BadRequest(format!("'{raw}' is not a valid object id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_canonical_id() {
        let id = ObjectId::new();
        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_object_id("abc123").is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}

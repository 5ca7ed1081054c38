use actix_web::{HttpRequest, cookie::Cookie};

use crate::constants::VISITED_COOKIE_NAME;

const SEPARATOR: char = '-';

fn is_hex_id(value: &str) -> bool {
    value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Listing ids this session has already viewed, read from the session
/// cookie. Unknown garbage in the cookie is dropped.
pub fn visited_ids(req: &HttpRequest) -> Vec<String> {
    req.cookie(VISITED_COOKIE_NAME)
        .map(|cookie| parse_visited(cookie.value()))
        .unwrap_or_default()
}

pub fn parse_visited(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .filter(|part| is_hex_id(part))
        .map(str::to_string)
        .collect()
}

pub fn has_visited(visited: &[String], id: &str) -> bool {
    visited.iter().any(|v| v == id)
}

/// Session cookie (no max-age) carrying the updated visited list. The list
/// is unbounded and lives only as long as the browser session.
pub fn visited_cookie(mut visited: Vec<String>, id: &str) -> Cookie<'static> {
    if !has_visited(&visited, id) {
        visited.push(id.to_string());
    }
    Cookie::build(VISITED_COOKIE_NAME, visited.join("-"))
        .http_only(true)
        .path("/")
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::oid::ObjectId;

    #[test]
    fn round_trips_through_the_cookie_value() {
        let a = ObjectId::new().to_hex();
        let b = ObjectId::new().to_hex();
        let cookie = visited_cookie(vec![a.clone()], &b);
        let parsed = parse_visited(cookie.value());
        assert_eq!(parsed, vec![a, b]);
    }

    #[test]
    fn repeat_visit_is_not_appended_twice() {
        let a = ObjectId::new().to_hex();
        let cookie = visited_cookie(vec![a.clone()], &a);
        assert_eq!(parse_visited(cookie.value()).len(), 1);
    }

    #[test]
    fn garbage_entries_are_dropped() {
        let a = ObjectId::new().to_hex();
        let parsed = parse_visited(&format!("junk-{a}-zz"));
        assert_eq!(parsed, vec![a]);
    }

    #[test]
    fn fresh_session_has_not_visited_anything() {
        assert!(!has_visited(&[], &ObjectId::new().to_hex()));
    }
}

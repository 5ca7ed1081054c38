use mongodb::bson::{Document, doc};
use serde::Deserialize;

use crate::constants::MAX_PAGE_SIZE;

/// Admin user-list filter; same lenient parsing rules as the listing
/// query.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQuery {
    pub role: Option<String>,
    pub search: Option<String>,
    pub is_active: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl UserQuery {
    pub fn filter_document(&self) -> Document {
        let mut filter = Document::new();

        if let Some(role) = self.role.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            filter.insert("role", role);
        }

        if let Some(active) = self
            .is_active
            .as_deref()
            .and_then(|s| s.trim().parse::<bool>().ok())
        {
            filter.insert("is_active", active);
        }

        if let Some(search) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let pattern = doc! { "$regex": regex::escape(search), "$options": "i" };
            filter.insert(
                "$or",
                vec![
                    doc! { "name": pattern.clone() },
                    doc! { "email": pattern },
                ],
            );
        }

        filter
    }

    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| p as u64)
            .unwrap_or(1)
    }

    pub fn limit(&self, default: i64) -> i64 {
        self.limit
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(default)
            .min(MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_name_or_email() {
        let mut q = UserQuery::default();
        q.search = Some("dana".to_string());
        let filter = q.filter_document();
        let alternatives = filter.get_array("$or").unwrap();
        assert_eq!(alternatives.len(), 2);
    }

    #[test]
    fn malformed_flags_are_ignored() {
        let mut q = UserQuery::default();
        q.is_active = Some("maybe".to_string());
        assert!(q.filter_document().is_empty());
    }
}

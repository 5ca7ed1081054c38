use mongodb::bson::{Document, doc};
use serde::Deserialize;

use crate::constants::MAX_PAGE_SIZE;

/// Recognized listing filter/sort/pagination parameters.
///
/// Numeric parameters are carried as strings and parsed leniently: a value
/// that does not parse is treated as absent rather than rejected. Requests
/// with structurally invalid bodies are rejected upstream; query strings
/// are never a hard error at this layer.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQuery {
    pub status: Option<String>,
    pub property_type: Option<String>,
    pub transaction_type: Option<String>,
    pub city: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub area_min: Option<String>,
    pub area_max: Option<String>,
    pub rooms: Option<String>,
    pub rooms_min: Option<String>,
    pub bedrooms: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn lenient_f64(raw: Option<&String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn lenient_i64(raw: Option<&String>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

fn non_empty(raw: Option<&String>) -> Option<&str> {
    raw.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn range_filter(min: Option<f64>, max: Option<f64>) -> Option<Document> {
    let mut range = Document::new();
    if let Some(min) = min {
        range.insert("$gte", min);
    }
    if let Some(max) = max {
        range.insert("$lte", max);
    }
    if range.is_empty() { None } else { Some(range) }
}

impl ListingQuery {
    /// Builds the store filter. `default_status` applies when the request
    /// carries no `status` parameter; `None` (admin listings) leaves the
    /// status unconstrained.
    pub fn filter_document(&self, default_status: Option<&str>) -> Document {
        let mut filter = Document::new();

        match non_empty(self.status.as_ref()) {
            Some(status) => {
                filter.insert("status", status);
            }
            None => {
                if let Some(status) = default_status {
                    filter.insert("status", status);
                }
            }
        }

        if let Some(property_type) = non_empty(self.property_type.as_ref()) {
            filter.insert("property_type", property_type);
        }
        if let Some(transaction_type) = non_empty(self.transaction_type.as_ref()) {
            filter.insert("transaction_type", transaction_type);
        }

        // case-insensitive substring match
        if let Some(city) = non_empty(self.city.as_ref()) {
            filter.insert(
                "location.city",
                doc! { "$regex": regex::escape(city), "$options": "i" },
            );
        }

        if let Some(range) = range_filter(
            lenient_f64(self.price_min.as_ref()),
            lenient_f64(self.price_max.as_ref()),
        ) {
            filter.insert("price.amount", range);
        }
        if let Some(range) = range_filter(
            lenient_f64(self.area_min.as_ref()),
            lenient_f64(self.area_max.as_ref()),
        ) {
            filter.insert("details.area", range);
        }

        let mut rooms = Document::new();
        if let Some(exact) = lenient_i64(self.rooms.as_ref()) {
            rooms.insert("$eq", exact);
        }
        if let Some(min) = lenient_i64(self.rooms_min.as_ref()) {
            rooms.insert("$gte", min);
        }
        if !rooms.is_empty() {
            filter.insert("details.rooms", rooms);
        }

        if let Some(bedrooms) = lenient_i64(self.bedrooms.as_ref()) {
            filter.insert("details.bedrooms", bedrooms);
        }

        if let Some(search) = non_empty(self.search.as_ref()) {
            filter.insert("$text", doc! { "$search": search });
        }

        filter
    }

    /// Maps the human-facing sort key to the stored field path. Unknown
    /// keys fall back to newest-first.
    pub fn sort_document(&self) -> Document {
        let raw = self.sort.as_deref().unwrap_or("").trim();
        let (key, direction) = match raw.strip_prefix('-') {
            Some(rest) => (rest, -1),
            None => (raw, 1),
        };

        let path = match key {
            "price" => "price.amount",
            "area" => "details.area",
            "views" => "views.total",
            "createdAt" => "created_at",
            _ => return doc! { "created_at": -1 },
        };
        doc! { path: direction }
    }

    /// 1-based page number; malformed or non-positive values become 1.
    pub fn page(&self) -> u64 {
        lenient_i64(self.page.as_ref())
            .filter(|p| *p >= 1)
            .map(|p| p as u64)
            .unwrap_or(1)
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`; malformed values take the
    /// caller's default.
    pub fn limit(&self, default: i64) -> i64 {
        lenient_i64(self.limit.as_ref())
            .filter(|l| *l >= 1)
            .unwrap_or(default)
            .min(MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_PAGE_SIZE;

    fn query() -> ListingQuery {
        ListingQuery::default()
    }

    #[test]
    fn empty_query_defaults_to_active_status() {
        let filter = query().filter_document(Some("active"));
        assert_eq!(filter, doc! { "status": "active" });
    }

    #[test]
    fn explicit_status_overrides_the_default() {
        let mut q = query();
        q.status = Some("sold".to_string());
        let filter = q.filter_document(Some("active"));
        assert_eq!(filter.get_str("status").unwrap(), "sold");
    }

    #[test]
    fn admin_listing_leaves_status_unconstrained() {
        let filter = query().filter_document(None);
        assert!(filter.is_empty());
    }

    #[test]
    fn city_matches_case_insensitive_substring_with_escaping() {
        let mut q = query();
        q.city = Some("Tel Aviv (center)".to_string());
        let filter = q.filter_document(None);
        let city = filter.get_document("location.city").unwrap();
        assert_eq!(city.get_str("$regex").unwrap(), r"Tel Aviv \(center\)");
        assert_eq!(city.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn price_bounds_are_inclusive_on_the_nested_amount() {
        let mut q = query();
        q.price_min = Some("1000000".to_string());
        q.price_max = Some("3000000".to_string());
        let filter = q.filter_document(None);
        let range = filter.get_document("price.amount").unwrap();
        assert_eq!(range.get_f64("$gte").unwrap(), 1_000_000.0);
        assert_eq!(range.get_f64("$lte").unwrap(), 3_000_000.0);
    }

    #[test]
    fn malformed_numbers_are_treated_as_absent() {
        let mut q = query();
        q.price_min = Some("cheap".to_string());
        q.area_max = Some("NaN".to_string());
        q.bedrooms = Some("two".to_string());
        let filter = q.filter_document(None);
        assert!(!filter.contains_key("price.amount"));
        assert!(!filter.contains_key("details.area"));
        assert!(!filter.contains_key("details.bedrooms"));
    }

    #[test]
    fn rooms_exact_and_lower_bound_combine() {
        let mut q = query();
        q.rooms = Some("4".to_string());
        q.rooms_min = Some("3".to_string());
        let filter = q.filter_document(None);
        let rooms = filter.get_document("details.rooms").unwrap();
        assert_eq!(rooms.get_i64("$eq").unwrap(), 4);
        assert_eq!(rooms.get_i64("$gte").unwrap(), 3);
    }

    #[test]
    fn search_uses_the_text_operator() {
        let mut q = query();
        q.search = Some("sea view".to_string());
        let filter = q.filter_document(None);
        let text = filter.get_document("$text").unwrap();
        assert_eq!(text.get_str("$search").unwrap(), "sea view");
    }

    #[test]
    fn sort_keys_map_to_stored_paths() {
        let mut q = query();
        q.sort = Some("price".to_string());
        assert_eq!(q.sort_document(), doc! { "price.amount": 1 });

        q.sort = Some("-views".to_string());
        assert_eq!(q.sort_document(), doc! { "views.total": -1 });

        q.sort = Some("createdAt".to_string());
        assert_eq!(q.sort_document(), doc! { "created_at": 1 });
    }

    #[test]
    fn unknown_sort_key_falls_back_to_newest_first() {
        let mut q = query();
        q.sort = Some("shoe_size".to_string());
        assert_eq!(q.sort_document(), doc! { "created_at": -1 });
        q.sort = None;
        assert_eq!(q.sort_document(), doc! { "created_at": -1 });
    }

    #[test]
    fn page_and_limit_coerce_malformed_input() {
        let mut q = query();
        q.page = Some("zero".to_string());
        q.limit = Some("-5".to_string());
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(DEFAULT_PAGE_SIZE), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn parameters_deserialize_from_camel_case() {
        let q: ListingQuery = serde_json::from_value(serde_json::json!({
            "priceMin": "1000000",
            "priceMax": "3000000",
            "city": "Tel Aviv",
            "transactionType": "sale",
            "roomsMin": "3",
        }))
        .unwrap();
        assert_eq!(q.price_min.as_deref(), Some("1000000"));
        assert_eq!(q.price_max.as_deref(), Some("3000000"));
        assert_eq!(q.transaction_type.as_deref(), Some("sale"));
        assert_eq!(q.rooms_min.as_deref(), Some("3"));
    }

    #[test]
    fn limit_is_capped() {
        let mut q = query();
        q.limit = Some("5000".to_string());
        assert_eq!(q.limit(DEFAULT_PAGE_SIZE), MAX_PAGE_SIZE);
    }
}

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SavedSearchRequest {
    pub name: String,
    pub criteria: Value,
}

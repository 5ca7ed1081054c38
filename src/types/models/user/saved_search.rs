use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named filter-criteria blob a user can re-run later. The criteria are
/// stored opaquely; they are interpreted by the listing query on replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub name: String,
    pub criteria: Value,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

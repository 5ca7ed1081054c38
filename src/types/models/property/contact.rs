use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inbound inquiry from a site visitor, embedded on the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Contact shown publicly on the listing page. At most two per listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicContact {
    pub name: String,
    pub phone: String,
}

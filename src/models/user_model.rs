use crate::types::models::user::{
    agent_profile::AgentProfile, avatar::Avatar, defaults::default_is_active, role::UserRole,
    saved_search::SavedSearch,
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub name: String,

    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Argon2 hash. Absent for accounts created through an external
    /// provider; required when `google_id` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,

    #[serde(default)]
    pub role: UserRole,

    #[serde(default)]
    pub is_verified: bool,

    #[serde(default = "default_is_active")]
    pub is_active: bool,

    #[serde(default)]
    pub favorites: HashSet<ObjectId>,

    #[serde(default)]
    pub saved_searches: Vec<SavedSearch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_profile: Option<AgentProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_token_expires: Option<DateTime<Utc>>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

use serde::{Deserialize, Serialize};

use crate::types::models::user::agent_profile::AgentProfile;

/// Self-service profile update; serialized into `$set`, so all fields
/// skip when absent. Password changes take the separate `password` field
/// and are hashed before persisting.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_profile: Option<AgentProfile>,

    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

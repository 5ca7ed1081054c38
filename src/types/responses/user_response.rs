use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::user_model::User;
use crate::types::models::user::{agent_profile::AgentProfile, avatar::Avatar, role::UserRole};

/// Safe projection of a [`User`] for API responses. Credential and token
/// fields never leave the service.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    pub favorites: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_profile: Option<AgentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Avatar>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user._id.map(|id| id.to_hex()).unwrap_or_default();
        let favorites = user.favorites.iter().map(|id| id.to_hex()).collect();
        Self {
            id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            is_verified: user.is_verified,
            is_active: user.is_active,
            favorites,
            agent_profile: user.agent_profile,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

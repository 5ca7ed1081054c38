use serde::{Deserialize, Serialize};

use crate::types::models::user::role::UserRole;

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminUpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

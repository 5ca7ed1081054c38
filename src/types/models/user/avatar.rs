use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub url: String,
    pub public_id: String,
}

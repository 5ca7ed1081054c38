use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewCounters {
    pub total: u64,
    /// Best-effort: deduplicated per session, not per identity.
    pub unique: u64,
}

use serde::Deserialize;

use crate::types::models::property::status::PropertyStatus;

/// Enum membership is the only constraint the state machine enforces;
/// deserialization rejects anything outside it.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: PropertyStatus,
}

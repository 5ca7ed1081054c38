use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Condition {
    New,
    Renovated,
    Good,
    NeedsRenovation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDetails {
    /// Square meters.
    pub area: f64,
    pub rooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    pub bathrooms: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

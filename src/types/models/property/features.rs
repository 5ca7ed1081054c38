use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub parking: bool,
    pub elevator: bool,
    pub balcony: bool,
    pub storage: bool,
    pub air_conditioning: bool,
    pub heating: bool,
    pub furnished: bool,
    pub pets_allowed: bool,
}

use serde::{Deserialize, Serialize};

use crate::types::models::property::{
    contact::PublicContact, details::PropertyDetails, features::FeatureSet, location::Location,
    price::Price, property_type::PropertyType, status::PropertyStatus,
    transaction_type::TransactionType,
};

/// Partial update; absent fields are left untouched. Serialized directly
/// into the `$set` document, so every field skips when `None`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePropertyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<PropertyDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_contacts: Option<Vec<PublicContact>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
}

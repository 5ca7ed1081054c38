use serde::Deserialize;

use crate::types::models::property::{
    contact::PublicContact, details::PropertyDetails, features::FeatureSet, location::Location,
    price::Price, property_type::PropertyType, transaction_type::TransactionType,
};

#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub title: String,

    pub description: String,

    pub property_type: PropertyType,

    pub transaction_type: TransactionType,

    pub price: Price,

    pub location: Location,

    pub details: PropertyDetails,

    #[serde(default)]
    pub features: Option<FeatureSet>,

    #[serde(default)]
    pub public_contacts: Option<Vec<PublicContact>>,

    /// Owning party when the listing is managed on someone's behalf;
    /// 24-char hex id.
    #[serde(default)]
    pub owner_id: Option<String>,
}

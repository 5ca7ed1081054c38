use crate::types::models::property::{
    contact::{ContactRequest, PublicContact},
    defaults::{default_expires_at, default_status},
    details::PropertyDetails,
    features::FeatureSet,
    image::PropertyImage,
    location::Location,
    price::Price,
    property_type::PropertyType,
    review::Review,
    status::PropertyStatus,
    transaction_type::TransactionType,
    views::ViewCounters,
};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Property {
    #[serde(default)]
    pub _id: Option<ObjectId>,

    pub title: String,

    pub description: String,

    pub property_type: PropertyType,

    pub transaction_type: TransactionType,

    pub price: Price,

    pub location: Location,

    pub details: PropertyDetails,

    #[serde(default)]
    pub features: FeatureSet,

    #[serde(default)]
    pub images: Vec<PropertyImage>,

    #[serde(default = "default_status")]
    pub status: PropertyStatus,

    #[serde(default)]
    pub contact_requests: Vec<ContactRequest>,

    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Mean of the embedded reviews' ratings, recomputed on every review
    /// mutation. Zero when there are no reviews.
    #[serde(default)]
    pub average_rating: f64,

    #[serde(default)]
    pub public_contacts: Vec<PublicContact>,

    #[serde(default)]
    pub views: ViewCounters,

    pub agent_id: ObjectId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<ObjectId>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,

    #[serde(default = "default_expires_at")]
    pub expires_at: DateTime<Utc>,
}

impl Property {
    pub fn is_managed_by(&self, user_id: &ObjectId) -> bool {
        self.agent_id == *user_id || self.owner_id.as_ref() == Some(user_id)
    }
}

use crate::config::database::get_collection;
use crate::constants::{PROPERTY_COL_NAME, SIMILAR_PRICE_BAND};
use crate::models::property_model::Property;
use crate::types::models::property::{
    contact::ContactRequest, image::PropertyImage, review::Review, status::PropertyStatus,
};
use bson::Document;
use chrono::{DateTime, Utc};
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_bson};
use mongodb::{Client, Collection, error::Result};

pub struct PropertyRepository {
    pub collection: Collection<Property>,
}

impl PropertyRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        Self {
            collection: get_collection(client, db_name, PROPERTY_COL_NAME),
        }
    }

    pub async fn insert(&self, mut property: Property) -> Result<Property> {
        let insert_result = self.collection.insert_one(&property).await?;
        if property._id.is_none() {
            property._id = insert_result.inserted_id.as_object_id();
        }
        Ok(property)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Property>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn find_by_ids(&self, ids: Vec<ObjectId>) -> Result<Vec<Property>> {
        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids } })
            .await?;
        cursor.try_collect().await
    }

    pub async fn count(&self, filter: Document) -> Result<u64> {
        self.collection.count_documents(filter).await
    }

    /// Second step of the count-then-fetch pagination contract; the two
    /// reads share a filter but not a snapshot.
    pub async fn find_page(
        &self,
        filter: Document,
        sort: Document,
        page: u64,
        limit: i64,
    ) -> Result<Vec<Property>> {
        let skip = (page.saturating_sub(1)) * limit as u64;
        let cursor = self
            .collection
            .find(filter)
            .sort(sort)
            .skip(skip)
            .limit(limit)
            .await?;
        cursor.try_collect().await
    }

    pub async fn update_fields(&self, id: &ObjectId, update: Document) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }

    /// Single atomic `$inc`; the unique counter rides along only for
    /// first-time visits of the session.
    pub async fn increment_views(&self, id: &ObjectId, unique: bool) -> Result<()> {
        let inc = if unique {
            doc! { "views.total": 1_i64, "views.unique": 1_i64 }
        } else {
            doc! { "views.total": 1_i64 }
        };
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$inc": inc })
            .await?;
        Ok(())
    }

    /// Fallback path when the combined counter update fails.
    pub async fn increment_total_views(&self, id: &ObjectId) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$inc": { "views.total": 1_i64 } })
            .await?;
        Ok(())
    }

    pub async fn push_review(
        &self,
        id: &ObjectId,
        review: &Review,
        new_average: f64,
    ) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$push": { "reviews": to_bson(review)? },
                    "$set": { "average_rating": new_average, "updated_at": to_bson(&Utc::now())? },
                },
            )
            .await?;
        Ok(())
    }

    pub async fn push_contact_request(
        &self,
        id: &ObjectId,
        contact: &ContactRequest,
    ) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$push": { "contact_requests": to_bson(contact)? } },
            )
            .await?;
        Ok(())
    }

    pub async fn set_status(&self, id: &ObjectId, status: PropertyStatus) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "status": status.to_string(), "updated_at": to_bson(&Utc::now())? } },
            )
            .await?;
        Ok(())
    }

    pub async fn set_images(&self, id: &ObjectId, images: &[PropertyImage]) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "images": to_bson(images)?, "updated_at": to_bson(&Utc::now())? } },
            )
            .await?;
        Ok(())
    }

    /// Same city, type and transaction within the ±30% price band, active
    /// listings only, excluding the listing itself.
    pub async fn find_similar(&self, property: &Property, limit: i64) -> Result<Vec<Property>> {
        let amount = property.price.amount;
        let mut filter = doc! {
            "status": PropertyStatus::Active.to_string(),
            "location.city": &property.location.city,
            "property_type": property.property_type.to_string(),
            "transaction_type": property.transaction_type.to_string(),
            "price.amount": {
                "$gte": amount * (1.0 - SIMILAR_PRICE_BAND),
                "$lte": amount * (1.0 + SIMILAR_PRICE_BAND),
            },
        };
        if let Some(id) = property._id {
            filter.insert("_id", doc! { "$ne": id });
        }

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;
        cursor.try_collect().await
    }

    /// Expiration sweep: `active` listings past `expires_at` become
    /// `inactive`. Returns how many were flipped.
    pub async fn deactivate_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = self
            .collection
            .update_many(
                doc! {
                    "status": PropertyStatus::Active.to_string(),
                    "expires_at": { "$lt": to_bson(&now)? },
                },
                doc! { "$set": { "status": PropertyStatus::Inactive.to_string(), "updated_at": to_bson(&now)? } },
            )
            .await?;
        Ok(result.modified_count)
    }

    pub async fn find_managed_by(&self, user_id: &ObjectId) -> Result<Vec<Property>> {
        let cursor = self
            .collection
            .find(doc! { "$or": [ { "agent_id": user_id }, { "owner_id": user_id } ] })
            .await?;
        cursor.try_collect().await
    }
}

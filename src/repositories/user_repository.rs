use crate::config::database::get_collection;
use crate::constants::USER_COL_NAME;
use crate::models::user_model::User;
use bson::Document;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_bson};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, error::Result};
use std::collections::HashSet;

pub struct UserRepository {
    pub collection: Collection<User>,
}

impl UserRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        Self {
            collection: get_collection(client, db_name, USER_COL_NAME),
        }
    }

    pub async fn create_user(&self, mut user: User) -> Result<User> {
        let insert_result = self.collection.insert_one(&user).await?;
        if user._id.is_none() {
            user._id = insert_result.inserted_id.as_object_id();
        }
        Ok(user)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.collection.find_one(doc! { "email": email }).await
    }

    pub async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>> {
        self.collection
            .find_one(doc! { "google_id": google_id })
            .await
    }

    pub async fn find_by_verification_token(&self, token: &str) -> Result<Option<User>> {
        self.collection
            .find_one(doc! { "verification_token": token })
            .await
    }

    pub async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>> {
        self.collection
            .find_one(doc! { "reset_token": token })
            .await
    }

    pub async fn update_fields(&self, id: &ObjectId, update: Document) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?;
        Ok(())
    }

    pub async fn unset_fields(&self, id: &ObjectId, fields: Document) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$unset": fields })
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }

    /// Idempotent by construction: `$addToSet` is a no-op when present.
    pub async fn add_favorite(
        &self,
        user_id: &ObjectId,
        property_id: &ObjectId,
    ) -> Result<Option<HashSet<ObjectId>>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": user_id },
                doc! { "$addToSet": { "favorites": property_id } },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(|user| user.favorites))
    }

    /// Idempotent: `$pull` of an absent id is a no-op.
    pub async fn remove_favorite(
        &self,
        user_id: &ObjectId,
        property_id: &ObjectId,
    ) -> Result<Option<HashSet<ObjectId>>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "_id": user_id },
                doc! { "$pull": { "favorites": property_id } },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(|user| user.favorites))
    }

    /// Cascade step of property deletion: no user keeps a dangling
    /// favorite reference.
    pub async fn pull_favorite_from_all(&self, property_id: &ObjectId) -> Result<u64> {
        let result = self
            .collection
            .update_many(
                doc! { "favorites": property_id },
                doc! { "$pull": { "favorites": property_id } },
            )
            .await?;
        Ok(result.modified_count)
    }

    pub async fn push_saved_search(&self, id: &ObjectId, search: Document) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": id }, doc! { "$push": { "saved_searches": search } })
            .await?;
        Ok(())
    }

    pub async fn pull_saved_search(&self, id: &ObjectId, name: &str) -> Result<u64> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$pull": { "saved_searches": { "name": name } } },
            )
            .await?;
        Ok(result.modified_count)
    }

    pub async fn count(&self, filter: Document) -> Result<u64> {
        self.collection.count_documents(filter).await
    }

    pub async fn find_page(
        &self,
        filter: Document,
        page: u64,
        limit: i64,
    ) -> Result<Vec<User>> {
        let skip = (page.saturating_sub(1)) * limit as u64;
        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(limit)
            .await?;
        cursor.try_collect().await
    }

    pub async fn set_password(&self, id: &ObjectId, password_hash: &str) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": { "password": password_hash, "updated_at": to_bson(&chrono::Utc::now())? },
                    "$unset": { "reset_token": "", "reset_token_expires": "" },
                },
            )
            .await?;
        Ok(())
    }
}

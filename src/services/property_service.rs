use anyhow::anyhow;
use bson::oid::ObjectId;
use chrono::Utc;
use log::{info, warn};
use mongodb::bson::to_document;
use std::sync::Arc;

use crate::{
    models::property_model::Property,
    repositories::{property_repository::PropertyRepository, user_repository::UserRepository},
    services::media_service::MediaService,
    types::errors::ServiceError,
    types::models::property::{
        contact::ContactRequest,
        defaults::default_expires_at,
        image::{PropertyImage, normalize_images},
        review::{Review, average_rating, has_review_by},
        status::PropertyStatus,
        views::ViewCounters,
    },
    types::requests::property::{
        contact_request::ContactRequestBody, create_property_request::CreatePropertyRequest,
        listing_query::ListingQuery, review_request::ReviewRequest,
        update_property_request::UpdatePropertyRequest,
    },
    types::requests::upload::image_upload_request::ImageUploadRequest,
    types::responses::pagination::{PageInfo, Paginated},
    utils::auth_utils::Claims,
    utils::object_id::parse_object_id,
    validations::property::{
        validate_contact_request, validate_new_property, validate_rating,
    },
};

pub struct PropertyService {
    pub property_repository: Arc<PropertyRepository>,
    pub user_repository: Arc<UserRepository>,
    pub media_service: Arc<MediaService>,
}

impl PropertyService {
    pub fn new(
        property_repository: Arc<PropertyRepository>,
        user_repository: Arc<UserRepository>,
        media_service: Arc<MediaService>,
    ) -> Self {
        Self {
            property_repository,
            user_repository,
            media_service,
        }
    }

    fn authorize_manager(property: &Property, claims: &Claims) -> Result<(), ServiceError> {
        if claims.is_admin() || property.is_managed_by(&claims.object_id()?) {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(
                "Only the listing's agent, owner or an administrator may do this".to_string(),
            ))
        }
    }

    /// Count-then-fetch over the same filter; no snapshot consistency is
    /// promised between the two reads.
    pub async fn list(
        &self,
        query: &ListingQuery,
        default_status: Option<&str>,
        default_limit: i64,
    ) -> Result<Paginated<Property>, ServiceError> {
        let filter = query.filter_document(default_status);
        let total_items = self.property_repository.count(filter.clone()).await?;

        let page = query.page();
        let limit = query.limit(default_limit);
        let items = self
            .property_repository
            .find_page(filter, query.sort_document(), page, limit)
            .await?;

        Ok(Paginated {
            items,
            pagination: PageInfo::new(page, limit, total_items),
        })
    }

    /// Single-listing fetch with the view-count side effect. Drafts are
    /// visible only to their manager or an admin; the counter update can
    /// never fail the read.
    pub async fn get(
        &self,
        id: &ObjectId,
        viewer: Option<&Claims>,
        already_visited: bool,
    ) -> Result<Property, ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;

        if property.status == PropertyStatus::Draft {
            let allowed = match viewer {
                Some(claims) => claims.is_admin() || property.is_managed_by(&claims.object_id()?),
                None => false,
            };
            if !allowed {
                // drafts are indistinguishable from absent listings
                return Err(ServiceError::not_found("Property"));
            }
        }

        if let Err(err) = self
            .property_repository
            .increment_views(id, !already_visited)
            .await
        {
            warn!("view counter update failed for {}: {}", id.to_hex(), err);
            if let Err(err) = self.property_repository.increment_total_views(id).await {
                warn!(
                    "fallback view counter update failed for {}: {}",
                    id.to_hex(),
                    err
                );
            }
        }

        Ok(property)
    }

    pub async fn create(
        &self,
        data: CreatePropertyRequest,
        claims: &Claims,
        as_draft: bool,
    ) -> Result<Property, ServiceError> {
        validate_new_property(&data)
            .map_err(|errors| ServiceError::validation("Invalid listing data", errors))?;

        let status = if as_draft {
            PropertyStatus::Draft
        } else if claims.is_admin() || claims.is_agent() {
            PropertyStatus::Active
        } else {
            PropertyStatus::Pending
        };

        let owner_id = match data.owner_id.as_deref() {
            Some(raw) => Some(parse_object_id(raw)?),
            None => None,
        };

        let now = Utc::now();
        let property = Property {
            _id: Some(ObjectId::new()),
            title: data.title,
            description: data.description,
            property_type: data.property_type,
            transaction_type: data.transaction_type,
            price: data.price,
            location: data.location,
            details: data.details,
            features: data.features.unwrap_or_default(),
            images: Vec::new(),
            status,
            contact_requests: Vec::new(),
            reviews: Vec::new(),
            average_rating: 0.0,
            public_contacts: data.public_contacts.unwrap_or_default(),
            views: ViewCounters::default(),
            agent_id: claims.object_id()?,
            owner_id,
            created_at: now,
            updated_at: now,
            expires_at: default_expires_at(),
        };

        Ok(self.property_repository.insert(property).await?)
    }

    pub async fn update(
        &self,
        id: &ObjectId,
        data: UpdatePropertyRequest,
        claims: &Claims,
    ) -> Result<Property, ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Self::authorize_manager(&property, claims)?;

        if let Some(contacts) = &data.public_contacts {
            crate::validations::property::validate_public_contacts(contacts).map_err(|e| {
                let mut errors = validator::ValidationErrors::new();
                errors.add("public_contacts", e);
                ServiceError::validation("Invalid listing data", errors)
            })?;
        }

        let mut update = to_document(&data)?;
        if !update.is_empty() {
            update.insert("updated_at", bson::to_bson(&Utc::now())?);
            self.property_repository.update_fields(id, update).await?;
        }

        self.property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))
    }

    pub async fn set_status(
        &self,
        id: &ObjectId,
        status: PropertyStatus,
        claims: &Claims,
    ) -> Result<(), ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Self::authorize_manager(&property, claims)?;

        self.property_repository.set_status(id, status).await?;
        Ok(())
    }

    async fn delete_cascade(&self, property: &Property) -> Result<(), ServiceError> {
        let id = property
            ._id
            .ok_or_else(|| ServiceError::Internal(anyhow!("property has no id")))?;

        let pulled = self.user_repository.pull_favorite_from_all(&id).await?;
        if pulled > 0 {
            info!("removed listing {} from {} favorites lists", id.to_hex(), pulled);
        }

        // stored-image cleanup is best effort and never blocks the delete
        for image in &property.images {
            if let Err(err) = self.media_service.destroy(&image.public_id).await {
                warn!("failed to delete image {}: {:#}", image.public_id, err);
            }
        }

        self.property_repository.delete(&id).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &ObjectId, claims: &Claims) -> Result<(), ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Self::authorize_manager(&property, claims)?;

        self.delete_cascade(&property).await
    }

    /// Cascade step of account deletion.
    pub async fn delete_all_managed_by(&self, user_id: &ObjectId) -> Result<(), ServiceError> {
        let properties = self.property_repository.find_managed_by(user_id).await?;
        for property in &properties {
            self.delete_cascade(property).await?;
        }
        Ok(())
    }

    pub async fn add_favorite(
        &self,
        claims: &Claims,
        property_id: &ObjectId,
    ) -> Result<Vec<String>, ServiceError> {
        self.property_repository
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;

        let favorites = self
            .user_repository
            .add_favorite(&claims.object_id()?, property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        Ok(favorites.iter().map(|id| id.to_hex()).collect())
    }

    pub async fn remove_favorite(
        &self,
        claims: &Claims,
        property_id: &ObjectId,
    ) -> Result<Vec<String>, ServiceError> {
        let favorites = self
            .user_repository
            .remove_favorite(&claims.object_id()?, property_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        Ok(favorites.iter().map(|id| id.to_hex()).collect())
    }

    /// One review per user per property, enforced by a linear scan of the
    /// embedded list at write time.
    pub async fn add_review(
        &self,
        id: &ObjectId,
        claims: &Claims,
        data: ReviewRequest,
    ) -> Result<(Review, f64), ServiceError> {
        validate_rating(data.rating).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("rating", e);
            ServiceError::validation("Invalid review", errors)
        })?;

        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;

        let user_id = claims.object_id()?;
        if has_review_by(&property.reviews, &user_id) {
            return Err(ServiceError::Duplicate(
                "You have already reviewed this property".to_string(),
            ));
        }

        let review = Review {
            user_id,
            rating: data.rating,
            comment: data.comment,
            created_at: Utc::now(),
        };

        let mut reviews = property.reviews;
        reviews.push(review.clone());
        let new_average = average_rating(&reviews);

        self.property_repository
            .push_review(id, &review, new_average)
            .await?;
        Ok((review, new_average))
    }

    pub async fn add_contact_request(
        &self,
        id: &ObjectId,
        data: ContactRequestBody,
    ) -> Result<(), ServiceError> {
        validate_contact_request(&data)
            .map_err(|errors| ServiceError::validation("Invalid contact request", errors))?;

        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        if property.status == PropertyStatus::Draft {
            return Err(ServiceError::not_found("Property"));
        }

        let contact = ContactRequest {
            name: data.name,
            email: data.email,
            phone: data.phone,
            message: data.message,
            created_at: Utc::now(),
        };
        self.property_repository
            .push_contact_request(id, &contact)
            .await?;
        Ok(())
    }

    pub async fn similar(&self, id: &ObjectId, limit: i64) -> Result<Vec<Property>, ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Ok(self.property_repository.find_similar(&property, limit).await?)
    }

    pub async fn add_image(
        &self,
        id: &ObjectId,
        claims: &Claims,
        data: ImageUploadRequest,
    ) -> Result<Vec<PropertyImage>, ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Self::authorize_manager(&property, claims)?;

        let uploaded = self
            .media_service
            .upload(&data.data, "properties")
            .await
            .map_err(ServiceError::Internal)?;

        let mut images = property.images;
        images.push(PropertyImage {
            url: uploaded.url,
            public_id: uploaded.public_id,
            alt: data.alt.unwrap_or_default(),
            is_main: data.is_main,
            order: images.len() as u32,
        });
        normalize_images(&mut images);

        self.property_repository.set_images(id, &images).await?;
        Ok(images)
    }

    pub async fn remove_image(
        &self,
        id: &ObjectId,
        image_id: &str,
        claims: &Claims,
    ) -> Result<Vec<PropertyImage>, ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Self::authorize_manager(&property, claims)?;

        let mut images = property.images;
        let index = images
            .iter()
            .position(|image| image.public_id == image_id)
            .ok_or_else(|| ServiceError::not_found("Image"))?;
        let removed = images.remove(index);

        if let Err(err) = self.media_service.destroy(&removed.public_id).await {
            warn!("failed to delete image {}: {:#}", removed.public_id, err);
        }

        normalize_images(&mut images);
        self.property_repository.set_images(id, &images).await?;
        Ok(images)
    }

    pub async fn reorder_images(
        &self,
        id: &ObjectId,
        image_ids: &[String],
        claims: &Claims,
    ) -> Result<Vec<PropertyImage>, ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Self::authorize_manager(&property, claims)?;

        let mut remaining = property.images;
        if image_ids.len() != remaining.len() {
            return Err(ServiceError::BadRequest(
                "image_ids must name exactly the listing's images".to_string(),
            ));
        }

        let mut images = Vec::with_capacity(remaining.len());
        for image_id in image_ids {
            let index = remaining
                .iter()
                .position(|image| image.public_id == *image_id)
                .ok_or_else(|| {
                    ServiceError::BadRequest(format!("unknown image id '{image_id}'"))
                })?;
            images.push(remaining.remove(index));
        }
        normalize_images(&mut images);

        self.property_repository.set_images(id, &images).await?;
        Ok(images)
    }

    pub async fn set_main_image(
        &self,
        id: &ObjectId,
        image_id: &str,
        claims: &Claims,
    ) -> Result<Vec<PropertyImage>, ServiceError> {
        let property = self
            .property_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Property"))?;
        Self::authorize_manager(&property, claims)?;

        let mut images = property.images;
        if !images.iter().any(|image| image.public_id == image_id) {
            return Err(ServiceError::not_found("Image"));
        }
        for image in images.iter_mut() {
            image.is_main = image.public_id == image_id;
        }
        normalize_images(&mut images);

        self.property_repository.set_images(id, &images).await?;
        Ok(images)
    }

    pub async fn deactivate_expired(&self) -> Result<u64, ServiceError> {
        let flipped = self
            .property_repository
            .deactivate_expired(Utc::now())
            .await?;
        if flipped > 0 {
            info!("expiration sweep deactivated {} listings", flipped);
        }
        Ok(flipped)
    }
}

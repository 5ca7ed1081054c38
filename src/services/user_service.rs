use anyhow::anyhow;
use bson::oid::ObjectId;
use chrono::{Duration, Utc};
use log::{info, warn};
use mongodb::bson::{doc, to_bson, to_document};
use std::sync::Arc;

use crate::{
    config::AppConfig,
    constants::{ADMIN_PAGE_SIZE, RESET_TOKEN_TTL_MINUTES, VERIFICATION_TOKEN_LENGTH},
    models::{property_model::Property, user_model::User},
    repositories::{property_repository::PropertyRepository, user_repository::UserRepository},
    services::{mail_service::MailService, media_service::MediaService},
    types::errors::ServiceError,
    types::models::user::{avatar::Avatar, role::UserRole, saved_search::SavedSearch},
    types::requests::{
        auth::register_request::RegisterRequest,
        user::{
            admin_update_user_request::AdminUpdateUserRequest,
            saved_search_request::SavedSearchRequest,
            update_profile_request::UpdateProfileRequest, user_query::UserQuery,
        },
    },
    types::responses::pagination::{PageInfo, Paginated},
    utils::auth_utils::{TokenKind, generate_jwt, generate_token, hash_password, verify_password},
    utils::validation_utils::validate_profile_update,
    validations::password::validate_password,
};

pub struct UserService {
    pub user_repository: Arc<UserRepository>,
    pub property_repository: Arc<PropertyRepository>,
    pub mail_service: Arc<MailService>,
    pub media_service: Arc<MediaService>,
    pub config: Arc<AppConfig>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<UserRepository>,
        property_repository: Arc<PropertyRepository>,
        mail_service: Arc<MailService>,
        media_service: Arc<MediaService>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            user_repository,
            property_repository,
            mail_service,
            media_service,
            config,
        }
    }

    pub async fn register_user(&self, data: RegisterRequest) -> Result<User, ServiceError> {
        if self
            .user_repository
            .find_by_email(&data.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::Duplicate(
                "A user with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&data.password)?;
        let role = match data.role.as_deref() {
            Some("agent") => UserRole::Agent,
            _ => UserRole::User,
        };
        let verification_token = generate_token(VERIFICATION_TOKEN_LENGTH);

        let now = Utc::now();
        let user = User {
            _id: Some(ObjectId::new()),
            name: data.name,
            email: data.email,
            phone: data.phone,
            password: Some(password_hash),
            google_id: None,
            role,
            is_verified: false,
            is_active: true,
            favorites: Default::default(),
            saved_searches: Vec::new(),
            agent_profile: None,
            avatar: None,
            verification_token: Some(verification_token.clone()),
            reset_token: None,
            reset_token_expires: None,
            created_at: now,
            updated_at: now,
        };

        let user = self.user_repository.create_user(user).await?;

        if let Err(err) = self
            .mail_service
            .send_verification_email(&user.email, &verification_token)
            .await
        {
            warn!(
                "failed to send verification email to {}: {:#}",
                user.email, err
            );
        }

        Ok(user)
    }

    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, String, String), ServiceError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("Invalid credentials".to_string()))?;

        if !user.is_active {
            return Err(ServiceError::Forbidden(
                "This account has been deactivated".to_string(),
            ));
        }

        let stored_hash = user
            .password
            .as_deref()
            .ok_or_else(|| ServiceError::Unauthorized("Invalid credentials".to_string()))?;
        if !verify_password(password, stored_hash)? {
            return Err(ServiceError::Unauthorized(
                "Invalid credentials".to_string(),
            ));
        }

        let access = generate_jwt(&user, TokenKind::Access, &self.config)?;
        let refresh = generate_jwt(&user, TokenKind::Refresh, &self.config)?;
        info!("user {} logged in", user.email);
        Ok((user, access, refresh))
    }

    /// Finds or provisions the account behind an external-provider login.
    /// Provider accounts carry no password; the email is considered
    /// verified by the provider.
    pub async fn oauth_login(
        &self,
        google_id: &str,
        email: &str,
        name: &str,
    ) -> Result<(User, String, String), ServiceError> {
        let user = match self.user_repository.find_by_google_id(google_id).await? {
            Some(user) => user,
            None => match self.user_repository.find_by_email(email).await? {
                Some(existing) => {
                    let id = existing
                        ._id
                        .ok_or_else(|| ServiceError::Internal(anyhow!("user has no id")))?;
                    self.user_repository
                        .update_fields(
                            &id,
                            doc! {
                                "google_id": google_id,
                                "is_verified": true,
                                "updated_at": to_bson(&Utc::now())?,
                            },
                        )
                        .await?;
                    self.user_repository
                        .find_by_id(&id)
                        .await?
                        .ok_or_else(|| ServiceError::not_found("User"))?
                }
                None => {
                    let now = Utc::now();
                    let user = User {
                        _id: Some(ObjectId::new()),
                        name: name.to_string(),
                        email: email.to_string(),
                        phone: None,
                        password: None,
                        google_id: Some(google_id.to_string()),
                        role: UserRole::User,
                        is_verified: true,
                        is_active: true,
                        favorites: Default::default(),
                        saved_searches: Vec::new(),
                        agent_profile: None,
                        avatar: None,
                        verification_token: None,
                        reset_token: None,
                        reset_token_expires: None,
                        created_at: now,
                        updated_at: now,
                    };
                    self.user_repository.create_user(user).await?
                }
            },
        };

        if !user.is_active {
            return Err(ServiceError::Forbidden(
                "This account has been deactivated".to_string(),
            ));
        }

        let access = generate_jwt(&user, TokenKind::Access, &self.config)?;
        let refresh = generate_jwt(&user, TokenKind::Refresh, &self.config)?;
        Ok((user, access, refresh))
    }

    pub async fn refresh_access_token(
        &self,
        user_id: &ObjectId,
    ) -> Result<(User, String), ServiceError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("Account no longer exists".to_string()))?;
        if !user.is_active {
            return Err(ServiceError::Forbidden(
                "This account has been deactivated".to_string(),
            ));
        }
        let access = generate_jwt(&user, TokenKind::Access, &self.config)?;
        Ok((user, access))
    }

    pub async fn verify_email(&self, token: &str) -> Result<(), ServiceError> {
        let user = self
            .user_repository
            .find_by_verification_token(token)
            .await?
            .ok_or_else(|| ServiceError::BadRequest("Invalid verification token".to_string()))?;
        let id = user
            ._id
            .ok_or_else(|| ServiceError::Internal(anyhow!("user has no id")))?;

        self.user_repository
            .update_fields(
                &id,
                doc! { "is_verified": true, "updated_at": to_bson(&Utc::now())? },
            )
            .await?;
        self.user_repository
            .unset_fields(&id, doc! { "verification_token": "" })
            .await?;
        Ok(())
    }

    /// Always answers success; whether the address exists is not leaked.
    pub async fn forgot_password(&self, email: &str) -> Result<(), ServiceError> {
        let Some(user) = self.user_repository.find_by_email(email).await? else {
            info!("password reset requested for unknown address");
            return Ok(());
        };
        let id = user
            ._id
            .ok_or_else(|| ServiceError::Internal(anyhow!("user has no id")))?;

        let token = generate_token(VERIFICATION_TOKEN_LENGTH);
        let expires = Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES);
        self.user_repository
            .update_fields(
                &id,
                doc! {
                    "reset_token": &token,
                    "reset_token_expires": to_bson(&expires)?,
                    "updated_at": to_bson(&Utc::now())?,
                },
            )
            .await?;

        if let Err(err) = self
            .mail_service
            .send_password_reset_email(&user.email, &token)
            .await
        {
            warn!("failed to send reset email to {}: {:#}", user.email, err);
        }
        Ok(())
    }

    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        validate_password(new_password).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("password", e);
            ServiceError::validation("Invalid password", errors)
        })?;

        let user = self
            .user_repository
            .find_by_reset_token(token)
            .await?
            .ok_or_else(|| {
                ServiceError::BadRequest("Invalid or expired reset token".to_string())
            })?;

        let expired = user
            .reset_token_expires
            .map(|expires| expires < Utc::now())
            .unwrap_or(true);
        if expired {
            return Err(ServiceError::BadRequest(
                "Invalid or expired reset token".to_string(),
            ));
        }

        let id = user
            ._id
            .ok_or_else(|| ServiceError::Internal(anyhow!("user has no id")))?;
        let hash = hash_password(new_password)?;
        self.user_repository.set_password(&id, &hash).await?;
        Ok(())
    }

    pub async fn get_user(&self, id: &ObjectId) -> Result<User, ServiceError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    pub async fn update_profile(
        &self,
        id: &ObjectId,
        data: UpdateProfileRequest,
    ) -> Result<User, ServiceError> {
        validate_profile_update(&data)
            .map_err(|errors| ServiceError::validation("Invalid profile data", errors))?;

        // agent subfields exist only on agent accounts
        if data.agent_profile.is_some() {
            let current = self.get_user(id).await?;
            if current.role != UserRole::Agent && current.role != UserRole::Admin {
                return Err(ServiceError::Forbidden(
                    "Only agent accounts carry an agent profile".to_string(),
                ));
            }
        }

        let mut update = to_document(&data)?;
        if let Some(password) = data.password.as_deref() {
            update.insert("password", hash_password(password)?);
        }
        if !update.is_empty() {
            update.insert("updated_at", to_bson(&Utc::now())?);
            self.user_repository.update_fields(id, update).await?;
        }

        self.get_user(id).await
    }

    /// Hard delete. The caller is responsible for cascading to the user's
    /// listings first.
    pub async fn delete_user(&self, id: &ObjectId) -> Result<(), ServiceError> {
        let user = self.get_user(id).await?;
        if let Some(avatar) = &user.avatar {
            if let Err(err) = self.media_service.destroy(&avatar.public_id).await {
                warn!("failed to delete avatar {}: {:#}", avatar.public_id, err);
            }
        }
        self.user_repository.delete(id).await?;
        info!("deleted account {}", user.email);
        Ok(())
    }

    pub async fn favorite_listings(&self, id: &ObjectId) -> Result<Vec<Property>, ServiceError> {
        let user = self.get_user(id).await?;
        let ids: Vec<ObjectId> = user.favorites.into_iter().collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.property_repository.find_by_ids(ids).await?)
    }

    /// Saving under an existing name replaces the previous criteria.
    pub async fn add_saved_search(
        &self,
        id: &ObjectId,
        data: SavedSearchRequest,
    ) -> Result<SavedSearch, ServiceError> {
        if data.name.trim().is_empty() {
            return Err(ServiceError::BadRequest(
                "Saved search name must not be empty".to_string(),
            ));
        }

        let search = SavedSearch {
            name: data.name,
            criteria: data.criteria,
            created_at: Utc::now(),
        };
        self.user_repository
            .pull_saved_search(id, &search.name)
            .await?;
        self.user_repository
            .push_saved_search(id, to_document(&search)?)
            .await?;
        Ok(search)
    }

    /// Removing an unknown name is a no-op.
    pub async fn remove_saved_search(&self, id: &ObjectId, name: &str) -> Result<(), ServiceError> {
        self.user_repository.pull_saved_search(id, name).await?;
        Ok(())
    }

    pub async fn set_avatar(&self, id: &ObjectId, data: &str) -> Result<Avatar, ServiceError> {
        let user = self.get_user(id).await?;

        if let Some(old) = &user.avatar {
            if let Err(err) = self.media_service.destroy(&old.public_id).await {
                warn!("failed to delete avatar {}: {:#}", old.public_id, err);
            }
        }

        let uploaded = self
            .media_service
            .upload(data, "avatars")
            .await
            .map_err(ServiceError::Internal)?;
        let avatar = Avatar {
            url: uploaded.url,
            public_id: uploaded.public_id,
        };
        self.user_repository
            .update_fields(
                id,
                doc! { "avatar": to_bson(&avatar)?, "updated_at": to_bson(&Utc::now())? },
            )
            .await?;
        Ok(avatar)
    }

    pub async fn remove_avatar(&self, id: &ObjectId) -> Result<(), ServiceError> {
        let user = self.get_user(id).await?;
        if let Some(avatar) = &user.avatar {
            if let Err(err) = self.media_service.destroy(&avatar.public_id).await {
                warn!("failed to delete avatar {}: {:#}", avatar.public_id, err);
            }
        }
        self.user_repository
            .unset_fields(id, doc! { "avatar": "" })
            .await?;
        Ok(())
    }

    pub async fn admin_list_users(
        &self,
        query: &UserQuery,
    ) -> Result<Paginated<User>, ServiceError> {
        let filter = query.filter_document();
        let total_items = self.user_repository.count(filter.clone()).await?;

        let page = query.page();
        let limit = query.limit(ADMIN_PAGE_SIZE);
        let items = self.user_repository.find_page(filter, page, limit).await?;

        Ok(Paginated {
            items,
            pagination: PageInfo::new(page, limit, total_items),
        })
    }

    pub async fn admin_update_user(
        &self,
        id: &ObjectId,
        data: AdminUpdateUserRequest,
    ) -> Result<User, ServiceError> {
        // ensure the target exists before writing
        self.get_user(id).await?;

        let mut update = to_document(&data)?;
        if !update.is_empty() {
            update.insert("updated_at", to_bson(&Utc::now())?);
            self.user_repository.update_fields(id, update).await?;
        }
        self.get_user(id).await
    }
}

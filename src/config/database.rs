use crate::{
    config::AppConfig,
    constants::{PROPERTY_COL_NAME, USER_COL_NAME},
    models::{property_model::Property, user_model::User},
};
use mongodb::{
    Client, Collection, IndexModel,
    bson::doc,
    error::Error as MongoError,
    options::{ClientOptions, IndexOptions},
};

pub async fn connect_to_database(config: &AppConfig) -> Result<Client, MongoError> {
    let client_options = ClientOptions::parse(&config.mongodb_uri).await?;
    Client::with_options(client_options)
}

pub fn get_collection<T>(client: &Client, db_name: &str, collection_name: &str) -> Collection<T>
where
    T: serde::de::DeserializeOwned + serde::Serialize + Unpin + Send + Sync,
{
    client.database(db_name).collection::<T>(collection_name)
}

async fn create_partial_unique_index(
    collection: &Collection<User>,
    field: &str,
) -> Result<(), MongoError> {
    let index = IndexModel::builder()
        .keys(doc! { field: 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .partial_filter_expression(doc! { field: { "$exists": true, "$type": "string" } })
                .build(),
        )
        .build();

    collection.create_index(index).await?;
    Ok(())
}

async fn create_listing_indexes(collection: &Collection<Property>) -> Result<(), MongoError> {
    // backs the `search` query parameter
    let text_index = IndexModel::builder()
        .keys(doc! {
            "title": "text",
            "description": "text",
            "location.address": "text",
        })
        .build();
    collection.create_index(text_index).await?;

    let listing_index = IndexModel::builder()
        .keys(doc! { "status": 1, "created_at": -1 })
        .build();
    collection.create_index(listing_index).await?;

    Ok(())
}

pub async fn create_indexes(client: &Client, config: &AppConfig) -> Result<(), MongoError> {
    let users = get_collection::<User>(client, &config.db_name, USER_COL_NAME);
    create_partial_unique_index(&users, "email").await?;

    let properties = get_collection::<Property>(client, &config.db_name, PROPERTY_COL_NAME);
    create_listing_indexes(&properties).await?;

    Ok(())
}

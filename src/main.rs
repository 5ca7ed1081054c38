mod config;
mod constants;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;
mod types;
mod utils;
mod validations;

use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::{
        AppConfig,
        database::{connect_to_database, create_indexes},
    },
    repositories::{property_repository::PropertyRepository, user_repository::UserRepository},
    services::{
        mail_service::MailService, media_service::MediaService,
        property_service::PropertyService, user_service::UserService,
    },
    routes::{
        admin_routes::configure_admin_routes, auth_routes::configure_auth_routes,
        property_routes::configure_property_routes, user_routes::configure_user_routes,
    },
};

const EXPIRATION_SWEEP_INTERVAL_SECS: u64 = 3600;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Arc::new(AppConfig::from_env()?);
    let client = connect_to_database(&config).await?;
    create_indexes(&client, &config).await?;

    let user_repository = Arc::new(UserRepository::new(&client, &config.db_name));
    let property_repository = Arc::new(PropertyRepository::new(&client, &config.db_name));
    let media_service = Arc::new(MediaService::new(&config));
    let mail_service = Arc::new(MailService::new(&config));

    let property_service = Arc::new(PropertyService::new(
        property_repository.clone(),
        user_repository.clone(),
        media_service.clone(),
    ));
    let user_service = Arc::new(UserService::new(
        user_repository,
        property_repository,
        mail_service,
        media_service,
        config.clone(),
    ));

    // hourly expiration sweep; also triggerable through the admin endpoint
    {
        let sweeper = property_service.clone();
        actix_rt::spawn(async move {
            let mut interval =
                actix_rt::time::interval(Duration::from_secs(EXPIRATION_SWEEP_INTERVAL_SECS));
            loop {
                interval.tick().await;
                if let Err(err) = sweeper.deactivate_expired().await {
                    warn!("expiration sweep failed: {:#}", err);
                }
            }
        });
    }

    let config_data = web::Data::new(config.clone());
    let user_service_data = web::Data::new(user_service);
    let property_service_data = web::Data::new(property_service);

    let bind_addr = (config.host.clone(), config.port);
    info!("starting server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .configure(|cfg| {
                configure_auth_routes(cfg, &config, user_service_data.clone());
                configure_property_routes(cfg, &config, property_service_data.clone());
                configure_user_routes(
                    cfg,
                    &config,
                    user_service_data.clone(),
                    property_service_data.clone(),
                );
                configure_admin_routes(
                    cfg,
                    &config,
                    user_service_data.clone(),
                    property_service_data.clone(),
                );
            })
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}

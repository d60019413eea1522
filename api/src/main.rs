use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use kg_api::app::{self, AppState};
use kg_api::middleware::RequestLogging;
use kg_core::token::{SigningKeys, TokenService, TokenServiceConfig};
use kg_infra::RedisSessionStore;
use kg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("starting keygate");

    let keys = SigningKeys::from_files(
        &config.token.private_key_path,
        &config.token.public_key_path,
    )
    .context("loading signing keys")?;
    info!("signing keys loaded");

    let store = RedisSessionStore::connect(&config.cache)
        .await
        .context("connecting to session store")?;

    let service_config = TokenServiceConfig {
        access_token_expiry_minutes: config.token.access_token_expiry_minutes,
        refresh_token_expiry_days: config.token.refresh_token_expiry_days,
    };
    let token_service = Arc::new(TokenService::new(store, &keys, service_config));
    let state = web::Data::new(AppState { token_service });

    let bind_address = config.server.bind_address();
    info!("listening on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(RequestLogging::new())
            .configure(app::configure::<RedisSessionStore>)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

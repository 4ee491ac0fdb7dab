//! Taskdesk HTTP server.
//!
//! Usage:
//!
//! ```text
//! TASKDESK_CONFIG=taskdesk.toml taskdesk
//! ```
//!
//! Settings come from the TOML file named by `TASKDESK_CONFIG` (default
//! `taskdesk.toml`, optional) overlaid with `TASKDESK__<SECTION>__<KEY>`
//! environment variables. Without `database.url` the server keeps all data
//! in memory for the lifetime of the process.

use std::error::Error;
use std::sync::Arc;
use taskdesk::access::AccessPolicy;
use taskdesk::auth::TokenService;
use taskdesk::bootstrap::{Services, Stores, seed};
use taskdesk::config::AppConfig;
use taskdesk::database;
use taskdesk::http::{AppState, router, serve};
use taskdesk::identity::adapters::argon2::Argon2CredentialHasher;
use taskdesk::logging;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    logging::init(&config.logging);

    let stores = match config.database.url.as_deref() {
        Some(url) => {
            let pool = database::connect(url, config.database.max_connections)?;
            database::apply_schema(&pool).await?;
            info!("using postgres stores");
            Stores::postgres(&pool)
        }
        None => {
            warn!("database.url is not set; data will not survive a restart");
            Stores::in_memory()
        }
    };

    let policy = AccessPolicy::new(config.access.status_change);
    info!(status_change = ?policy.status_change(), "access policy loaded");
    let services = Services::new(&stores, Arc::new(Argon2CredentialHasher::new()), policy);
    seed(&services, &stores, &config.bootstrap).await?;

    let tokens = TokenService::from_config(&config.auth)?;
    let app = router(AppState::new(services, Arc::new(tokens)));
    let listener = TcpListener::bind(&config.server.bind_address).await?;

    serve(listener, app, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

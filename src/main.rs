use dotenv::dotenv;
use eyre::{Result, WrapErr};
use log::{error, info};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{MySqlPool, SqlitePool};
use tap::TapFallible;

use crate::config::Config;
use crate::error::Error;
use crate::repository::source::DoctorRegistrationRepository;
use crate::service::sync::SyncService;

mod config;
mod domain;
mod error;
mod repository;
mod service;

const TARGET_DB_PATH: &str = "webui.db";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let source_pool = MySqlPool::connect_with(config.source_connect_options())
        .await
        .tap_err(|e| error!("Failed to connect to source database: {e}"))
        .wrap_err(Error::SourceConnection)?;
    info!("Connected to source database {}", config.database);

    let target_pool = SqlitePool::connect_with(SqliteConnectOptions::new().filename(TARGET_DB_PATH))
        .await
        .tap_err(|e| error!("Failed to open {TARGET_DB_PATH}: {e}"))
        .wrap_err(Error::TargetOpen)?;

    let service = SyncService {
        source: DoctorRegistrationRepository::new(source_pool),
        target: target_pool,
    };
    let summary = service.run().await?;

    info!(
        "auth table: {} inserted, {} updated, {} processed",
        summary.auth.inserted,
        summary.auth.updated,
        summary.auth.total()
    );
    info!(
        "user table: {} inserted, {} updated, {} processed",
        summary.users.inserted,
        summary.users.updated,
        summary.users.total()
    );
    Ok(())
}

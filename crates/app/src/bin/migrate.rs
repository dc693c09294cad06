// TalentLink - apply database migrations

use talentlink_common::{telemetry, Config};
use talentlink_store::PgRecordStore;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format, &config.rust_log)?;

    info!("Applying TalentLink database migrations");

    let store = PgRecordStore::connect(&config.database())
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {}", e);
            anyhow::anyhow!("Database connection failed: {}", e)
        })?;

    store.migrate().await.map_err(|e| {
        error!("Failed to apply migrations: {}", e);
        anyhow::anyhow!("Migration failed: {}", e)
    })?;

    info!("Migrations applied");
    Ok(())
}

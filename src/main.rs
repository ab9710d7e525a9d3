use dotenvy::dotenv;
use godown_buddy::{
    bot::{self, BotData},
    client::{HttpInventoryClient, InventoryApi},
    config,
    errors::{Error, Result},
};
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings (config.toml plus environment overrides)
    let settings = Arc::new(
        config::load_default_settings()
            .inspect_err(|e| error!("Critical error loading settings: {}", e))?,
    );

    // 4. Build the inventory client
    let api: Arc<dyn InventoryApi> = Arc::new(
        HttpInventoryClient::new(&settings.api)
            .inspect_err(|e| error!("Failed to build inventory client: {}", e))?,
    );
    info!("Inventory backend: {}", settings.api.trimmed_base_url());

    // 5. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in Settings
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(api, settings)).await
}

//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord dashboard for Godown Buddy: slash commands that list
//! and edit inventory, autocomplete handlers, the shared bot context, and the runner.

/// Discord command implementations (product, godown, stock, general)
pub mod commands;
/// Text formatting shared by the commands
pub mod format;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;

use crate::{
    client::InventoryApi,
    config::Settings,
    core::RecentMovements,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Shared data available to all bot commands.
/// Holds the inventory client, the loaded settings, and the session stock log.
pub struct BotData {
    /// Inventory backend
    pub api: Arc<dyn InventoryApi>,
    /// Settings loaded at startup
    pub settings: Arc<Settings>,
    /// Stock movements made through the bot since startup
    pub recent: RwLock<RecentMovements>,
}

impl BotData {
    /// Creates a new `BotData` instance with the given client and settings.
    #[must_use]
    pub fn new(api: Arc<dyn InventoryApi>, settings: Arc<Settings>) -> Self {
        Self {
            api,
            settings,
            recent: RwLock::new(RecentMovements::default()),
        }
    }

    /// The inventory backend as a trait object.
    #[must_use]
    pub fn api(&self) -> &dyn InventoryApi {
        self.api.as_ref()
    }

    /// Configured low-stock threshold.
    #[must_use]
    pub fn low_threshold(&self) -> u64 {
        self.settings.stock.low_threshold
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            if error.is_validation() {
                warn!("Rejected `{}`: {}", ctx.command().name, error);
            } else {
                error!("Error in command `{}`: {:?}", ctx.command().name, error);
            }
            if let Err(e) = ctx.say(error.user_message()).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Every command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::ping(),
        commands::help(),
        commands::products(),
        commands::transactions(),
        commands::product_add(),
        commands::product_edit(),
        commands::product_delete(),
        commands::godowns(),
        commands::godown(),
        commands::godown_add(),
        commands::stock(),
        commands::summary(),
    ]
}

/// Connects to Discord and serves commands until the client stops.
#[instrument(skip_all)]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}

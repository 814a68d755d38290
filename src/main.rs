//! # Islamic Companion Bot Main Entry Point
//!
//! Initializes logging, loads configuration, opens the registration store,
//! starts the reminder service and the health server, and runs the bot.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use islamic_companion_bot::bot::context::BotContext;
use islamic_companion_bot::bot::handlers::BotHandler;
use islamic_companion_bot::config::Config;
use islamic_companion_bot::database::connection::DatabaseManager;
use islamic_companion_bot::database::store::{
    InMemoryRegistrationStore, RegistrationStore, SqliteRegistrationStore,
};
use islamic_companion_bot::services::content::{ContentSource, HttpContentClient};
use islamic_companion_bot::services::health::HealthService;
use islamic_companion_bot::services::reminder::{ReminderDispatcher, ReminderService};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "islamic_companion_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Islamic Companion Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Database: {}, HTTP Port: {}, Reminder schedule: {}",
        config.database_url, config.http_port, config.reminder_schedule);

    let store: Arc<dyn RegistrationStore> = if config.uses_memory_store() {
        tracing::warn!("Using in-memory registration store; registrations are lost on restart");
        Arc::new(InMemoryRegistrationStore::new())
    } else {
        info!("Initializing database connection...");
        let db_manager = DatabaseManager::new(&config.database_url).await?;
        info!("Running database migrations...");
        db_manager.run_migrations().await?;
        info!("Database initialized successfully");
        Arc::new(SqliteRegistrationStore::new(db_manager))
    };

    let content: Arc<dyn ContentSource> = Arc::new(
        HttpContentClient::new(config.endpoints.clone(), config.http_timeout)
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?,
    );

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let dispatcher = Arc::new(ReminderDispatcher::new(
        store.clone(),
        content.clone(),
        Arc::new(bot.clone()),
    ));
    let handler = BotHandler::new(BotContext::new(&config, store.clone(), content, dispatcher.clone()));

    // Initialize and start reminder service
    info!("Initializing reminder service...");
    let mut reminder_service = ReminderService::new(dispatcher, config.reminder_schedule.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create reminder service: {}", e))?;

    if let Err(e) = reminder_service.start().await {
        tracing::error!("Failed to start reminder service: {}", e);
    }

    let health_service = HealthService::new(store);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .default_handler(|upd| async move {
                tracing::debug!("Unhandled update: {:?}", upd.id);
            })
            .error_handler(teloxide::error_handlers::LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if reminder_service.is_running() {
        if let Err(e) = reminder_service.stop().await {
            tracing::warn!("Error stopping reminder service: {}", e);
        }
    }

    info!("Application stopped");
    Ok(())
}

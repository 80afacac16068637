//! Tavus Coach server entry point.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tavus_coach::adapters::{app_router, ConversationAppState, TavusConfig, TavusProvider};
use tavus_coach::application::StartConversationHandler;
use tavus_coach::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;

    let provider = TavusProvider::new(
        TavusConfig::new(config.tavus.api_key_or_empty())
            .with_base_url(&config.tavus.base_url)
            .with_timeout(config.tavus.timeout()),
    )?;

    if !config.session.is_launchable() {
        warn!("Persona or replica id not configured; POST /start will fail until both are set");
    }

    let handler = StartConversationHandler::new(config.session.to_settings(), Arc::new(provider));
    let state = ConversationAppState::new(Arc::new(handler), config.script.to_script());
    let app = app_router(state, config.server.request_timeout());

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()?).await?;
    info!(
        addr = %listener.local_addr()?,
        environment = %config.server.environment,
        "Tavus coach listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

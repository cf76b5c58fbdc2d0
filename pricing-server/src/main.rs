use anyhow::Context;
use pricing_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, config, logging)
    let config = setup_environment();

    print_banner();
    tracing::info!(environment = %config.environment, "🦀 Pricing server starting...");

    // 2. Tariff schedule
    let state = ServerState::initialize(&config).context("failed to initialize server state")?;

    // 3. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

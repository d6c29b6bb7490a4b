use anyhow::Context;

use fullstack_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fullstack_observability::init();

    let config = ApiConfig::from_env()?;
    let services = app::services::build_services(&config)?;
    let router = app::build_app(services, &config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!(
        cors_origin = %config.cors_origin,
        chat_model = %config.chat.model,
        "listening on {local_addr}"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

use anyhow::{Context, Result};
use mf_compactor::ModeFormatter;
use mf_server::{app_with_state, config::ServerConfig, state::AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args().nth(1);
    let config = ServerConfig::load(path.as_deref())?;
    let formatter = ModeFormatter::new(config.formatter.clone())?;
    info!(days = config.formatter.day_count(), "Formatter ready");

    let app = app_with_state(AppState::new(formatter));
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

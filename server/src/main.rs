use std::fs::OpenOptions;

use clap::Parser;
use server::{app, config::ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    std::fs::create_dir_all(&config.log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("{}=trace", env!("CARGO_CRATE_NAME")).into())
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file))
        .init();

    tracing::info!("Starting server...");

    if !config.dist.join("index.html").exists() {
        tracing::warn!("No index.html in {}, build the frontend with `trunk build` first", config.dist.display());
    }

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("Listening on http://{}", config.addr());

    axum::serve(listener, app::router(&config.dist)).await?;
    Ok(())
}

use anyhow::Result;
use rnd_predictor::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());
    if log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .is_err()
    {
        anyhow::bail!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            log_level
        );
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .json()
        .init();

    info!(
        "Starting R&D prediction server with log level: {}",
        log_level
    );

    server::run(config).await?;

    Ok(())
}

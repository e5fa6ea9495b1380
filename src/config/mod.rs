mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    apply_env_overrides(&mut config)?;

    Ok(config)
}

/// Deployment platforms assign the port via the environment, so PORT and
/// MODEL_PATH take precedence over the config file.
fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(raw) = env::var("PORT") {
        config.server.port = raw
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: {}", raw)))?;
    }
    if let Ok(path) = env::var("MODEL_PATH") {
        config.model.artifact_path = path;
    }
    Ok(())
}

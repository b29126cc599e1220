use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::info;
use url::Url;

use super::EndpointConfig;

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Loads the daemon endpoint configuration from `path`, creating the file
/// from the embedded default on first run. Environment variables prefixed
/// with `WALLETD` override file values (e.g. `WALLETD_DAEMON__PASSWORD`).
pub fn load_configuration(path: &Path) -> Result<EndpointConfig> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    let cfg = Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix("WALLETD").prefix_separator("_").separator("__"))
        .build()
        .context("Could not build config")?;

    let url_str = cfg
        .get_string("daemon.url")
        .context("Missing daemon.url configuration")?;
    let url = Url::parse(&url_str).context("Invalid daemon.url")?;
    let username = cfg
        .get_string("daemon.username")
        .context("Missing daemon.username configuration")?;
    let password = cfg
        .get_string("daemon.password")
        .context("Missing daemon.password configuration")?;

    Ok(EndpointConfig::new(url, username, password))
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}

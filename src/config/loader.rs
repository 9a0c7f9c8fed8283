// Configuration loader
// Loads settings from ~/.devscout/config.toml, with environment overrides

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{API_URL_ENV, CONFIG_DIR, CONFIG_FILE};
use super::settings::Config;

/// Location of the user's config file.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// The config file to read: `path` when given, else the default location.
pub fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

/// Load configuration from a specific file.
///
/// A missing file yields the defaults. `DEVSCOUT_API_URL` overrides the
/// directory URL either way.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let mut config = if path.exists() {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str::<Config>(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?
    } else {
        Config::default()
    };

    apply_env_override(&mut config, std::env::var(API_URL_ENV).ok());

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn apply_env_override(config: &mut Config, api_url: Option<String>) {
    if let Some(url) = api_url {
        if !url.trim().is_empty() {
            config.api.base_url = url.trim().to_string();
        }
    }
}

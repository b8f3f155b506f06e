// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use holidaze_api::ApiConfig;
use holidaze_core::{APP_NAME, Config as CoreConfig};
use tokio::fs;

const HOLIDAZE_CONFIG_ENV: &str = "HOLIDAZE_CONFIG";
const HOLIDAZE_DEV_ENV: &str = "HOLIDAZE_DEV";

const HOLIDAZE_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const HOLIDAZE_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(HOLIDAZE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({HOLIDAZE_DEV_ENV} is set): config must be explicitly specified via --config or {HOLIDAZE_CONFIG_ENV} environment variable",
            ).into());
        }
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, Config { api: a.api }))
}

/// Front-end settings of the Holidaze CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// How to reach the API.
    pub api: ApiConfig,
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    api: ApiConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(HOLIDAZE_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if HOLIDAZE_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if HOLIDAZE_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. Treating as unset.",
            HOLIDAZE_DEV_ENV,
            val,
            HOLIDAZE_DEV_VALID_TRUE.join(", "),
            HOLIDAZE_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}

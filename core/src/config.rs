// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;

use crate::calendar::WeekStart;
use crate::error::ConfigError;

/// The name of the Holidaze application.
pub const APP_NAME: &str = "holidaze";

const SESSION_FILE: &str = "session.json";

/// Core settings, the `[core]` table of the config file.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory for storing application state such as the session.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// First column of the calendar.
    #[serde(default)]
    pub week_start: WeekStart,

    /// Zone the API timestamps are read in: `UTC`, `local`, or an IANA name.
    #[serde(default = "default_booking_timezone")]
    pub booking_timezone: String,

    /// If true, a failed bookings fetch also blocks submitting.
    #[serde(default = "default_true")]
    pub fail_closed_on_fetch_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            week_start: WeekStart::default(),
            booking_timezone: default_booking_timezone(),
            fail_closed_on_fetch_error: true,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        match &self.state_dir {
            Some(a) => self.state_dir = Some(expand_path(a)?),
            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        }

        // Fail early on unknown zones
        self.time_zone()?;
        Ok(())
    }

    /// The zone booking timestamps are interpreted in.
    pub fn time_zone(&self) -> Result<TimeZone, ConfigError> {
        let name = self.booking_timezone.trim();
        if name.eq_ignore_ascii_case("utc") {
            Ok(TimeZone::UTC)
        } else if name.eq_ignore_ascii_case("local") {
            Ok(TimeZone::system())
        } else {
            TimeZone::get(name).map_err(|source| ConfigError::TimeZone {
                name: name.to_string(),
                source,
            })
        }
    }

    /// Where the signed-in session is stored, if a state directory is known.
    pub fn session_path(&self) -> Option<PathBuf> {
        self.state_dir.as_ref().map(|a| a.join(SESSION_FILE))
    }
}

fn default_booking_timezone() -> String {
    "UTC".to_string()
}

const fn default_true() -> bool {
    true
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path
        .to_str()
        .ok_or_else(|| ConfigError::Path(format!("{} is not valid UTF-8", path.display())))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or_else(|| ConfigError::Path("home directory not found".into()))
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| ConfigError::Path("config directory not found".into()))
}

fn get_state_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| ConfigError::Path("state directory not found".into()))
}

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use holidaze_api::ApiConfig;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// The signed-in profile, as kept between runs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Profile name.
    pub name: String,

    /// Profile e-mail.
    #[serde(default)]
    pub email: Option<String>,

    /// Bearer token from the login response.
    pub access_token: String,

    /// API key to send instead of the configured one.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Whether the profile manages venues.
    #[serde(default)]
    pub venue_manager: bool,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("venue_manager", &self.venue_manager)
            .finish()
    }
}

impl Session {
    /// Reads the session at `path`; a missing file means nobody is signed in.
    pub async fn load(path: &Path) -> Result<Option<Self>, SessionError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no session file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let session: Self = serde_json::from_str(&raw)?;
        tracing::debug!(?session, "session loaded");
        Ok(Some(session))
    }

    /// Writes the session to `path`, creating parent directories.
    pub async fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, raw).await?;
        tracing::debug!(path = %path.display(), "session saved");
        Ok(())
    }

    /// Removes the session file. Returns whether there was one.
    pub async fn clear(path: &Path) -> Result<bool, SessionError> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Applies the credentials of this session to an API configuration.
    ///
    /// The session's API key wins over the configured one.
    #[must_use]
    pub fn authorize(&self, config: ApiConfig) -> ApiConfig {
        let mut config = config.with_bearer(self.access_token.clone());
        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        config
    }
}

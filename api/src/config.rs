// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Authentication used on requests to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication, only public endpoints can be reached.
    #[serde(rename = "none")]
    #[default]
    None,
    /// Bearer token issued by the login endpoint.
    #[serde(rename = "bearer")]
    Bearer {
        /// Access token.
        token: String,
    },
}

/// Holidaze API configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/holidaze` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Key sent as `X-Noroff-API-Key`; required by authenticated endpoints.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Authentication method.
    #[serde(skip)]
    pub auth: AuthMethod,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    /// Returns a copy authenticated with the given bearer token.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthMethod::Bearer {
            token: token.into(),
        };
        self
    }
}

fn default_base_url() -> String {
    "https://v2.api.noroff.dev".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("holidaze-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, sync::Arc};

use holidaze_api::NoroffClient;
use holidaze_core::{Config as CoreConfig, ControllerOptions, Notifier, Session};
use jiff::{Zoned, civil::Date, tz::TimeZone};

use crate::config::Config;
use crate::notifier::TerminalNotifier;

/// Everything a command needs: settings, the signed-in profile and the API.
#[derive(Debug)]
pub struct Context {
    pub core: CoreConfig,
    pub client: NoroffClient,
    pub session: Option<Session>,
    pub tz: TimeZone,
    pub today: Date,
    pub notifier: Arc<dyn Notifier>,
}

impl Context {
    pub async fn new(core: CoreConfig, config: Config) -> Result<Self, Box<dyn Error>> {
        let session = match core.session_path() {
            Some(path) => Session::load(&path).await.unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), err = %e, "ignoring unreadable session");
                None
            }),
            None => None,
        };

        let api = match &session {
            Some(session) => session.authorize(config.api),
            None => config.api,
        };
        let client = NoroffClient::new(api)?;
        let tz = core.time_zone()?;

        Ok(Self {
            core,
            client,
            session,
            tz,
            today: Zoned::now().date(),
            notifier: Arc::new(TerminalNotifier::new()),
        })
    }

    pub fn options(&self) -> ControllerOptions {
        ControllerOptions::from(&self.core)
    }

    /// The signed-in profile, or an error telling how to sign in.
    pub fn require_session(&self) -> Result<&Session, Box<dyn Error>> {
        self.session.as_ref().ok_or_else(|| {
            "Not signed in. Run `holidaze session set <NAME> --token <TOKEN>` first".into()
        })
    }

    pub fn session_path(&self) -> Result<PathBuf, Box<dyn Error>> {
        self.core
            .session_path()
            .ok_or_else(|| "No state directory configured for the session file".into())
    }
}

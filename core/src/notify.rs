// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! User-facing notices and confirmations.
//!
//! The core never prints or prompts by itself. It hands [`Notice`]s to a
//! [`Notifier`] and asks it for yes/no answers; the front end decides how
//! they are shown.

use std::fmt;

use async_trait::async_trait;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Neutral information.
    Info,
    /// An operation succeeded.
    Success,
    /// Something degraded but the flow continues.
    Warning,
    /// An operation failed.
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: Level,
    /// Human readable text.
    pub message: String,
}

impl Notice {
    /// An informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    /// A warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

/// Shows notices and asks for confirmation.
#[async_trait]
pub trait Notifier: fmt::Debug + Send + Sync {
    /// Shows a notice; never blocks on the user.
    fn notify(&self, notice: Notice);

    /// Asks a yes/no question; `true` means the user agreed.
    async fn request(&self, message: &str) -> bool;
}

/// Routes notices to `tracing` and declines every question.
///
/// Used where nobody can be asked, such as scripted runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Info | Level::Success => tracing::info!(message = %notice.message),
            Level::Warning => tracing::warn!(message = %notice.message),
            Level::Error => tracing::error!(message = %notice.message),
        }
    }

    async fn request(&self, message: &str) -> bool {
        tracing::info!(message, "declined confirmation, nobody to ask");
        false
    }
}

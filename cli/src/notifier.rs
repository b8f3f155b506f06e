// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use colored::Colorize;
use holidaze_core::{Level, Notice, Notifier};

/// Prints notices to the terminal and asks questions with `cliclack`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that prints as usual but never prompts; every question is
    /// answered with yes.
    pub fn assuming_yes() -> Self {
        Self { assume_yes: true }
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        let message = notice.message;
        match notice.level {
            Level::Info => println!("{} {message}", "Info:".blue()),
            Level::Success => println!("{} {message}", "Done:".green()),
            Level::Warning => eprintln!("{} {message}", "Warning:".yellow()),
            Level::Error => eprintln!("{} {message}", "Error:".red()),
        }
    }

    async fn request(&self, message: &str) -> bool {
        if self.assume_yes {
            tracing::debug!(message, "assuming yes");
            return true;
        }

        let message = message.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            cliclack::confirm(message).initial_value(false).interact()
        })
        .await;

        match answer {
            Ok(Ok(yes)) => yes,
            Ok(Err(e)) => {
                tracing::warn!(err = %e, "confirmation prompt failed, treating as declined");
                false
            }
            Err(e) => {
                tracing::error!(err = %e, "confirmation task panicked");
                false
            }
        }
    }
}

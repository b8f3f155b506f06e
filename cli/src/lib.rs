// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal front end for Holidaze.

mod arg;
mod booking_formatter;
mod calendar_formatter;
mod cli;
mod cmd_booking;
mod cmd_calendar;
mod cmd_session;
mod cmd_venue;
mod config;
mod context;
mod notifier;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use holidaze_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_booking::{CmdBook, CmdBookingCancel, CmdBookingEdit, CmdBookingList};
use crate::cmd_calendar::CmdCalendar;
use crate::cmd_session::{CmdSessionClear, CmdSessionSet, CmdSessionShow};
use crate::cmd_venue::CmdVenueBookings;
use crate::config::parse_config;
use crate::context::Context;

/// Run the Holidaze command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                eprintln!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => eprintln!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Holidaze: check venue availability and manage your bookings.")
            .author("Holidaze Contributors")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/holidaze/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/holidaze/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(CmdBook::command())
            .subcommand(
                Command::new("booking")
                    .alias("b")
                    .about("Manage your bookings")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdBookingEdit::command())
                    .subcommand(CmdBookingCancel::command())
                    .subcommand(CmdBookingList::command()),
            )
            .subcommand(
                Command::new("venue")
                    .alias("v")
                    .about("Look at the venues you manage")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdVenueBookings::command()),
            )
            .subcommand(
                Command::new("session")
                    .about("Manage the signed-in profile")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdSessionSet::command())
                    .subcommand(CmdSessionShow::command())
                    .subcommand(CmdSessionClear::command()),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdBook::NAME, matches)) => Book(CmdBook::from(matches)),
            Some(("booking", matches)) => match matches.subcommand() {
                Some((CmdBookingEdit::NAME, matches)) => BookingEdit(CmdBookingEdit::from(matches)),
                Some((CmdBookingCancel::NAME, matches)) => {
                    BookingCancel(CmdBookingCancel::from(matches))
                }
                Some((CmdBookingList::NAME, matches)) => BookingList(CmdBookingList::from(matches)),
                _ => unreachable!(),
            },
            Some(("venue", matches)) => match matches.subcommand() {
                Some((CmdVenueBookings::NAME, matches)) => {
                    VenueBookings(CmdVenueBookings::from(matches))
                }
                _ => unreachable!(),
            },
            Some(("session", matches)) => match matches.subcommand() {
                Some((CmdSessionSet::NAME, matches)) => SessionSet(CmdSessionSet::from(matches)),
                Some((CmdSessionShow::NAME, _)) => SessionShow(CmdSessionShow),
                Some((CmdSessionClear::NAME, _)) => SessionClear(CmdSessionClear),
                _ => unreachable!(),
            },
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the availability calendar of a venue
    Calendar(CmdCalendar),

    /// Book a venue
    Book(CmdBook),

    /// Change a booking
    BookingEdit(CmdBookingEdit),

    /// Cancel a booking
    BookingCancel(CmdBookingCancel),

    /// List your bookings
    BookingList(CmdBookingList),

    /// List the bookings of a venue
    VenueBookings(CmdVenueBookings),

    /// Store the signed-in profile
    SessionSet(CmdSessionSet),

    /// Show the signed-in profile
    SessionShow(CmdSessionShow),

    /// Forget the signed-in profile
    SessionClear(CmdSessionClear),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Calendar(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Book(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            BookingEdit(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            BookingCancel(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            BookingList(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            VenueBookings(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            SessionSet(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            SessionShow(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            SessionClear(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Context) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let (mut core_config, config) = parse_config(config).await?;
        core_config.normalize()?;
        let mut ctx = Context::new(core_config, config).await?;

        f(&mut ctx).await
    }
}

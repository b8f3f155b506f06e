// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use holidaze_api::VenueId;
use holidaze_core::{Notice, fetch_venue_entries};

use crate::arg::{BookingArgs, CommonArgs};
use crate::booking_formatter::BookingFormatter;
use crate::context::Context;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdVenueBookings {
    pub venue: VenueId,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdVenueBookings {
    pub const NAME: &str = "bookings";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the bookings of a venue you manage")
            .arg(BookingArgs::venue())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            venue: BookingArgs::get_venue(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing venue bookings...");
        let session = ctx.require_session()?;
        let (venue, entries) = fetch_venue_entries(&ctx.client, &self.venue, &ctx.tz).await?;

        if venue.owner.as_deref() != Some(session.name.as_str()) {
            ctx.notifier.notify(Notice::warning(format!(
                "{} is not managed by {}; customer details may be missing",
                venue.name, session.name
            )));
        }

        if self.output_format == OutputFormat::Table {
            println!(
                "{}  {} bookings, up to {} guests",
                venue.name.bold(),
                entries.len(),
                venue.max_guests
            );
        }
        let formatter = BookingFormatter::for_manager(ctx.today)
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        print!("{}", formatter.format(&entries));
        Ok(())
    }
}

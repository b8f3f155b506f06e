// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use clap::{ArgMatches, Command};
use colored::Colorize;
use holidaze_api::{BookingId, VenueId};
use holidaze_core::{
    Booking, BookingController, BookingGateway, BookingPanel, Notifier, Target, Venue,
    bookings_from_records, cancel_booking, fetch_my_bookings, fetch_venue, format_iso_date,
};
use jiff::civil::Date;

use crate::arg::{BookingArgs, CommonArgs};
use crate::booking_formatter::BookingFormatter;
use crate::calendar_formatter::{BookingSummary, CalendarFormatter};
use crate::cmd_calendar::select_dates;
use crate::context::Context;
use crate::notifier::TerminalNotifier;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdBook {
    pub venue: VenueId,
    pub from: String,
    pub to: String,
    pub guests: Option<i64>,
}

impl CmdBook {
    pub const NAME: &str = "book";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Book a venue")
            .arg(BookingArgs::venue())
            .arg(BookingArgs::from(true))
            .arg(BookingArgs::to(true))
            .arg(BookingArgs::guests())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            venue: BookingArgs::get_venue(matches),
            from: BookingArgs::get_from(matches).unwrap_or_default(),
            to: BookingArgs::get_to(matches).unwrap_or_default(),
            guests: BookingArgs::get_guests(matches),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "booking venue...");
        let record = fetch_venue(&ctx.client, &self.venue).await?;
        let venue = Venue::from(&record);
        let target = Target::Create {
            venue_id: venue.id.clone(),
        };

        let Some(mut ctl) = open_form(ctx, venue, target) else {
            return Ok(());
        };
        ctl.apply_fetch(bookings_from_records(&record.bookings, &ctx.tz));
        select_dates(
            &mut ctl,
            ctx.today,
            Some(self.from.as_str()),
            Some(self.to.as_str()),
            ctx.notifier.as_ref(),
        )?;
        if let Some(guests) = self.guests {
            ctl.set_guests(guests);
        }

        submit(&mut ctl, &ctx.client).await;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdBookingEdit {
    pub booking: BookingId,
    pub from: Option<String>,
    pub to: Option<String>,
    pub guests: Option<i64>,
}

impl CmdBookingEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Change the dates or guests of a booking")
            .arg(BookingArgs::booking())
            .arg(BookingArgs::from(false))
            .arg(BookingArgs::to(false))
            .arg(BookingArgs::guests())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            booking: BookingArgs::get_booking(matches),
            from: BookingArgs::get_from(matches),
            to: BookingArgs::get_to(matches),
            guests: BookingArgs::get_guests(matches),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing booking...");
        ctx.require_session()?;

        let existing = ctx.client.get_booking(&self.booking).await?;
        let venue_id = existing
            .venue
            .as_ref()
            .map(|v| v.id.clone())
            .ok_or_else(|| format!("Booking {} does not name its venue", self.booking))?;
        let current = Booking::from_record(&existing, &ctx.tz)?;

        let record = fetch_venue(&ctx.client, &venue_id).await?;
        let target = Target::Update {
            booking_id: self.booking.clone(),
        };
        let Some(mut ctl) = open_form(ctx, Venue::from(&record), target) else {
            return Ok(());
        };
        ctl.apply_fetch(bookings_from_records(&record.bookings, &ctx.tz));
        ctl.preset(current.date_from, current.date_to, current.guests);

        if self.from.is_some() || self.to.is_some() {
            let from = self
                .from
                .unwrap_or_else(|| format_iso_date(current.date_from));
            let to = self.to.unwrap_or_else(|| format_iso_date(current.date_to));
            let applied = reselect_dates(&mut ctl, ctx.today, &from, &to, ctx.notifier.as_ref())?;
            if !applied {
                println!("Booking {} was not changed.", self.booking);
                return Ok(());
            }
        }
        if let Some(guests) = self.guests {
            ctl.set_guests(guests);
        }

        submit(&mut ctl, &ctx.client).await;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdBookingCancel {
    pub booking: BookingId,
    pub yes: bool,
}

impl CmdBookingCancel {
    pub const NAME: &str = "cancel";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Cancel a booking")
            .arg(BookingArgs::booking())
            .arg(BookingArgs::yes())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            booking: BookingArgs::get_booking(matches),
            yes: BookingArgs::get_yes(matches),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "cancelling booking...");
        ctx.require_session()?;

        let notifier: Arc<dyn Notifier> = match self.yes {
            true => Arc::new(TerminalNotifier::assuming_yes()),
            false => ctx.notifier.clone(),
        };
        match cancel_booking(&ctx.client, notifier.as_ref(), &self.booking).await {
            Ok(true) => {}
            Ok(false) => println!("Booking {} was kept.", self.booking),
            // Already reported by the notifier
            Err(e) => tracing::debug!(err = %e, "cancel rejected"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdBookingList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdBookingList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your bookings")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing bookings...");
        let session = ctx.require_session()?;
        let entries = fetch_my_bookings(&ctx.client, session, &ctx.tz).await?;

        if entries.is_empty() && self.output_format == OutputFormat::Table {
            println!("No bookings yet.");
            return Ok(());
        }

        let formatter = BookingFormatter::for_guest(ctx.today)
            .with_output_format(self.output_format)
            .with_verbose(self.verbose);
        print!("{}", formatter.format(&entries));
        Ok(())
    }
}

/// Replaces the preset stay of an edit with `from..to`.
///
/// Returns `false` when either day could not be applied; the old stay is gone
/// from the form then, so nothing can be submitted by accident.
fn reselect_dates(
    ctl: &mut BookingController,
    today: Date,
    from: &str,
    to: &str,
    notifier: &dyn Notifier,
) -> Result<bool, Box<dyn Error>> {
    ctl.clear_selection();
    let applied = select_dates(ctl, today, Some(from), Some(to), notifier)?;
    Ok(applied && ctl.selection().range().is_some())
}

/// Opens the booking form, or prints the sign-in prompt and returns `None`.
fn open_form(ctx: &Context, venue: Venue, target: Target) -> Option<Box<BookingController>> {
    let panel = BookingPanel::open(
        ctx.session.as_ref(),
        venue,
        target,
        ctx.today,
        ctx.notifier.clone(),
        ctx.options(),
    );
    match panel {
        BookingPanel::Interactive(ctl) => Some(ctl),
        BookingPanel::SignInRequired(prompt) => {
            println!("{}", prompt.message.yellow());
            println!("Run `holidaze session set <NAME> --token <TOKEN>` to sign in.");
            None
        }
    }
}

/// Shows the form and submits it when nothing blocks submission.
///
/// Failures are reported by the controller's notifier.
async fn submit<G: BookingGateway + ?Sized>(ctl: &mut BookingController, gateway: &G) {
    println!("{}", CalendarFormatter::new().format(&ctl.render()));
    print!("{}", BookingSummary::new(ctl));
    if !ctl.can_submit() {
        return;
    }

    match ctl.submit(gateway).await {
        Ok(record) => println!("Booking id: {}", record.id.as_str().bold()),
        Err(e) => tracing::debug!(err = %e, "submission failed"),
    }
}

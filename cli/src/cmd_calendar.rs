// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use holidaze_api::{BookingId, VenueId};
use holidaze_core::{
    BookingController, ClickOutcome, DayState, Notice, Notifier, Target, Venue,
    bookings_from_records, fetch_venue,
};
use jiff::civil::Date;

use crate::arg::BookingArgs;
use crate::calendar_formatter::{BookingSummary, CalendarFormatter};
use crate::context::Context;
use crate::util::{parse_date, parse_month};

#[derive(Debug, Clone)]
pub struct CmdCalendar {
    pub venue: VenueId,
    pub month: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub edit: Option<BookingId>,
    pub guests: Option<i64>,
    pub legend: bool,
}

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the availability calendar of a venue")
            .arg(BookingArgs::venue())
            .arg(arg!(-m --month <MONTH> "Month to show (YYYY-MM), defaults to the check-in month"))
            .arg(BookingArgs::from(false))
            .arg(BookingArgs::to(false).requires("from"))
            .arg(arg!(--edit <BOOKING> "Show the days of this booking as free, as when editing it"))
            .arg(BookingArgs::guests())
            .arg(arg!(--"no-legend" "Do not print the legend under the calendar"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            venue: BookingArgs::get_venue(matches),
            month: matches.get_one("month").cloned(),
            from: BookingArgs::get_from(matches),
            to: BookingArgs::get_to(matches),
            edit: matches
                .get_one::<String>("edit")
                .map(|a| BookingId::from(a.as_str())),
            guests: BookingArgs::get_guests(matches),
            legend: !matches.get_flag("no-legend"),
        }
    }

    pub async fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar...");
        let record = fetch_venue(&ctx.client, &self.venue).await?;
        let venue = Venue::from(&record);
        let target = match self.edit {
            Some(booking_id) => {
                ctx.notifier.notify(Notice::info(format!(
                    "Days of booking {booking_id} are shown as free."
                )));
                Target::Update { booking_id }
            }
            None => Target::Create {
                venue_id: venue.id.clone(),
            },
        };

        let mut ctl = BookingController::new(
            venue,
            target,
            ctx.today,
            ctx.notifier.clone(),
            ctx.options(),
        );
        ctl.apply_fetch(bookings_from_records(&record.bookings, &ctx.tz));

        select_dates(
            &mut ctl,
            ctx.today,
            self.from.as_deref(),
            self.to.as_deref(),
            ctx.notifier.as_ref(),
        )?;
        if let Some(guests) = self.guests {
            ctl.set_guests(guests);
        }
        if let Some(month) = &self.month {
            ctl.show(parse_month(month)?);
        }

        let formatter = CalendarFormatter::new().with_legend(self.legend);
        println!("{}", formatter.format(&ctl.render()));
        print!("{}", BookingSummary::new(&ctl));
        Ok(())
    }
}

/// Clicks the check-in and check-out days in order and shows the check-in
/// month.
///
/// Returns whether every given day was applied. Stops at the first click that
/// did not apply; overlaps are already reported by the controller, ignored
/// days are reported here.
pub fn select_dates(
    ctl: &mut BookingController,
    today: Date,
    from: Option<&str>,
    to: Option<&str>,
    notifier: &dyn Notifier,
) -> Result<bool, Box<dyn Error>> {
    let from = from.map(|s| parse_date(today, s)).transpose()?;
    let to = to.map(|s| parse_date(today, s)).transpose()?;

    let mut applied = true;
    for day in [from, to].into_iter().flatten() {
        match ctl.click_day(day) {
            Ok(ClickOutcome::Applied) => {}
            Ok(ClickOutcome::Ignored(state)) => {
                let reason = match state {
                    DayState::Past => "in the past",
                    DayState::Booked => "already booked",
                    _ => "not selectable",
                };
                notifier.notify(Notice::warning(format!(
                    "{day} is {reason}, pick another day"
                )));
                applied = false;
                break;
            }
            Err(e) => {
                tracing::debug!(err = %e, "selection rejected");
                applied = false;
                break;
            }
        }
    }

    if let Some(from) = from {
        ctl.show(from);
    }
    Ok(applied)
}

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use holidaze_api::{BookingId, VenueId};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BookingArgs;

impl BookingArgs {
    pub fn venue() -> Arg {
        arg!(venue: <VENUE> "The id of the venue")
    }

    pub fn get_venue(matches: &ArgMatches) -> VenueId {
        matches
            .get_one::<String>("venue")
            .map(|a| VenueId::from(a.as_str()))
            .expect("venue is required")
    }

    pub fn booking() -> Arg {
        arg!(booking: <BOOKING> "The id of the booking")
    }

    pub fn get_booking(matches: &ArgMatches) -> BookingId {
        matches
            .get_one::<String>("booking")
            .map(|a| BookingId::from(a.as_str()))
            .expect("booking is required")
    }

    pub fn from(required: bool) -> Arg {
        arg!(--from <DATE> "Check-in day (YYYY-MM-DD, today or tomorrow)").required(required)
    }

    pub fn get_from(matches: &ArgMatches) -> Option<String> {
        matches.get_one("from").cloned()
    }

    pub fn to(required: bool) -> Arg {
        arg!(--to <DATE> "Check-out day (YYYY-MM-DD, today or tomorrow)").required(required)
    }

    pub fn get_to(matches: &ArgMatches) -> Option<String> {
        matches.get_one("to").cloned()
    }

    pub fn guests() -> Arg {
        arg!(-g --guests <GUESTS> "Number of guests, clamped to what the venue allows")
            .value_parser(value_parser!(i64))
    }

    pub fn get_guests(matches: &ArgMatches) -> Option<i64> {
        matches.get_one("guests").copied()
    }

    pub fn yes() -> Arg {
        arg!(-y --yes "Do not ask for confirmation")
    }

    pub fn get_yes(matches: &ArgMatches) -> bool {
        matches.get_flag("yes")
    }
}

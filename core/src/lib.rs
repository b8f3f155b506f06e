// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Booking availability core for Holidaze venues.
//!
//! Fetches bookings, lays out a month calendar, drives the two-click date
//! selection and submits bookings through a [`BookingGateway`].

mod accessor;
mod booking;
mod calendar;
mod config;
mod controller;
mod error;
mod gateway;
mod interval;
mod notify;
mod selection;
mod session;

pub use crate::accessor::{
    BookingCache, BookingEntry, VenueBookings, bookings_from_records, fetch_my_bookings,
    fetch_venue, fetch_venue_bookings, fetch_venue_entries,
};
pub use crate::booking::{Booking, Venue, find_overlap};
pub use crate::calendar::{
    CalendarGrid, CalendarMonth, ClickOutcome, DayCell, DayState, WeekStart, classify,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::controller::{
    Availability, BookingController, BookingPanel, ControllerOptions, SignInPrompt, Target,
    cancel_booking, total_price,
};
pub use crate::error::{ConfigError, FetchError, OverlapError, SessionError, SubmissionError};
pub use crate::gateway::BookingGateway;
pub use crate::interval::{
    format_iso_date, nights_between, parse_api_date, ranges_overlap, to_local_iso_date,
};
pub use crate::notify::{Level, LogNotifier, Notice, Notifier};
pub use crate::selection::DateSelection;
pub use crate::session::Session;

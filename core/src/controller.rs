// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The booking form: selection, guests, price and submission.

use std::sync::Arc;

use holidaze_api::{BookingId, BookingRecord, BookingUpdateRequest, NewBookingRequest, VenueId};
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::accessor::fetch_venue_bookings;
use crate::booking::{Booking, Venue};
use crate::calendar::{CalendarGrid, CalendarMonth, ClickOutcome, WeekStart};
use crate::config::Config;
use crate::error::{FetchError, OverlapError, SubmissionError};
use crate::gateway::BookingGateway;
use crate::interval::format_iso_date;
use crate::notify::{Notice, Notifier};
use crate::selection::DateSelection;
use crate::session::Session;

/// What a submission does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Book the venue.
    Create {
        /// Venue to book.
        venue_id: VenueId,
    },
    /// Change an existing booking; its own days stay selectable.
    Update {
        /// Booking to change.
        booking_id: BookingId,
    },
}

impl Target {
    /// The booking whose days count as free.
    pub const fn ignored(&self) -> Option<&BookingId> {
        match self {
            Self::Create { .. } => None,
            Self::Update { booking_id } => Some(booking_id),
        }
    }
}

/// Whether the booking list behind the calendar can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// No fetch has finished yet.
    Loading,
    /// Bookings were fetched.
    Known,
    /// The fetch failed; the calendar shows no bookings.
    Unknown,
}

/// Behaviour switches taken from the configuration.
#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    /// First column of the calendar.
    pub week_start: WeekStart,
    /// Block submission while availability is not known.
    pub fail_closed_on_fetch_error: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            fail_closed_on_fetch_error: true,
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            week_start: config.week_start,
            fail_closed_on_fetch_error: config.fail_closed_on_fetch_error,
        }
    }
}

/// Price of a selection at `price_per_night`; `0` unless it spans a night.
#[allow(clippy::cast_precision_loss)]
pub fn total_price(selection: &DateSelection, price_per_night: f64) -> f64 {
    match selection.nights() {
        n if n > 0 => n as f64 * price_per_night,
        _ => 0.0,
    }
}

/// What an anonymous visitor sees instead of the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInPrompt {
    /// Text asking the visitor to sign in.
    pub message: String,
}

/// The booking area of a venue page.
#[derive(Debug)]
pub enum BookingPanel {
    /// Nobody is signed in; nothing can be collected.
    SignInRequired(SignInPrompt),
    /// The interactive form.
    Interactive(Box<BookingController>),
}

impl BookingPanel {
    /// Builds the panel for `session`, a form only when someone is signed in.
    pub fn open(
        session: Option<&Session>,
        venue: Venue,
        target: Target,
        today: Date,
        notifier: Arc<dyn Notifier>,
        options: ControllerOptions,
    ) -> Self {
        match session {
            None => Self::SignInRequired(SignInPrompt {
                message: format!("Sign in to book {}.", venue.name),
            }),
            Some(session) => {
                tracing::debug!(profile = %session.name, venue = %venue.id, "opening booking form");
                Self::Interactive(Box::new(BookingController::new(
                    venue, target, today, notifier, options,
                )))
            }
        }
    }
}

/// State of one booking or edit session.
#[derive(Debug)]
pub struct BookingController {
    venue: Venue,
    target: Target,
    grid: CalendarGrid,
    selection: DateSelection,
    guests: u32,
    availability: Availability,
    fail_closed: bool,
    pending_error: Option<String>,
    busy: bool,
    notifier: Arc<dyn Notifier>,
}

impl BookingController {
    /// Creates a form for `venue` with no bookings known yet.
    pub fn new(
        venue: Venue,
        target: Target,
        today: Date,
        notifier: Arc<dyn Notifier>,
        options: ControllerOptions,
    ) -> Self {
        let grid = CalendarGrid::new(today, Vec::new())
            .ignoring(target.ignored().cloned())
            .with_week_start(options.week_start);
        Self {
            venue,
            target,
            grid,
            selection: DateSelection::Empty,
            guests: 1,
            availability: Availability::Loading,
            fail_closed: options.fail_closed_on_fetch_error,
            pending_error: None,
            busy: false,
            notifier,
        }
    }

    /// Stores the outcome of a bookings fetch.
    ///
    /// On failure the calendar shows no bookings and the error is announced.
    pub fn apply_fetch(&mut self, result: Result<Vec<Booking>, FetchError>) {
        match result {
            Ok(bookings) => {
                self.grid.set_bookings(bookings);
                self.availability = Availability::Known;
            }
            Err(e) => {
                tracing::warn!(venue = %self.venue.id, err = %e, "showing calendar without bookings");
                self.grid.set_bookings(Vec::new());
                self.availability = Availability::Unknown;
                self.notifier.notify(Notice::error(e.to_string()));
            }
        }
    }

    /// Fetches the venue's bookings and applies them.
    pub async fn load_bookings<G: BookingGateway + ?Sized>(&mut self, gateway: &G, tz: &TimeZone) {
        self.availability = Availability::Loading;
        let result = fetch_venue_bookings(gateway, &self.venue.id, tz).await;
        self.apply_fetch(result);
    }

    /// Starts from an existing stay, e.g. the booking being edited.
    ///
    /// The dates are taken as given, without an overlap check, and the month
    /// of `from` is shown.
    pub fn preset(&mut self, from: Date, to: Date, guests: u32) {
        self.selection = if from <= to {
            DateSelection::Complete { from, to }
        } else {
            DateSelection::StartOnly { from }
        };
        self.grid.show(from);
        self.set_guests(i64::from(guests));
    }

    /// Drops the current selection, e.g. before picking new dates for an edit.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.pending_error = None;
    }

    /// Handles a click on `day`.
    ///
    /// An overlap is announced through the notifier once and kept as the
    /// pending error until the next interaction.
    pub fn click_day(&mut self, day: Date) -> Result<ClickOutcome, OverlapError> {
        self.pending_error = None;
        match self.grid.click(&mut self.selection, day) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                let message = e.to_string();
                self.notifier.notify(Notice::error(message.clone()));
                self.pending_error = Some(message);
                Err(e)
            }
        }
    }

    /// Sets the guest count, clamped to `[1, max_guests]`.
    pub fn set_guests(&mut self, guests: i64) {
        self.pending_error = None;
        let max = i64::from(self.venue.max_guests.max(1));
        let clamped = guests.clamp(1, max);
        self.guests = u32::try_from(clamped).unwrap_or(1);
    }

    /// Shows the previous month.
    pub fn prev_month(&mut self) {
        self.grid.prev_month();
    }

    /// Shows the next month.
    pub fn next_month(&mut self) {
        self.grid.next_month();
    }

    /// Shows the month containing `day`.
    pub fn show(&mut self, day: Date) {
        self.grid.show(day);
    }

    /// The displayed month.
    pub fn render(&self) -> CalendarMonth {
        self.grid.render(&self.selection)
    }

    pub fn venue(&self) -> &Venue {
        &self.venue
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn pending_error(&self) -> Option<&str> {
        self.pending_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn bookings(&self) -> &[Booking] {
        self.grid.bookings()
    }

    /// Nights of the current selection.
    pub fn nights(&self) -> i64 {
        self.selection.nights()
    }

    /// Price of the current selection.
    pub fn total_price(&self) -> f64 {
        total_price(&self.selection, self.venue.price)
    }

    /// Why submitting is disabled right now, if it is.
    pub fn submit_blocker(&self) -> Option<&'static str> {
        if self.busy {
            return Some("a request is already in flight");
        }
        if self.pending_error.is_some() {
            return Some("resolve the error first");
        }
        if self.fail_closed && self.availability != Availability::Known {
            return Some("availability could not be confirmed");
        }
        let Some((from, to)) = self.selection.range() else {
            return Some("select a check-in and a check-out date");
        };
        if from > to || self.nights() <= 0 {
            return Some("the stay must be at least one night");
        }
        if self.guests < 1 {
            return Some("at least one guest is required");
        }
        None
    }

    /// Whether [`BookingController::submit`] would send a request.
    pub fn can_submit(&self) -> bool {
        self.submit_blocker().is_none()
    }

    /// Sends the create or update request.
    ///
    /// Success clears selection, guests and error, and returns the stored
    /// booking. Failure keeps the selection and announces the API message;
    /// the form stays submittable so the same request can be sent again.
    pub async fn submit<G: BookingGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<BookingRecord, SubmissionError> {
        if let Some(reason) = self.submit_blocker() {
            return Err(SubmissionError::NotReady(reason));
        }
        let Some((from, to)) = self.selection.range() else {
            return Err(SubmissionError::NotReady("select a check-in and a check-out date"));
        };

        let date_from = format_iso_date(from);
        let date_to = format_iso_date(to);
        tracing::debug!(submission = ?self.target, %date_from, %date_to, guests = self.guests, "submitting booking");

        self.busy = true;
        let result = match &self.target {
            Target::Create { venue_id } => {
                let request = NewBookingRequest {
                    date_from,
                    date_to,
                    guests: self.guests,
                    venue_id: venue_id.clone(),
                };
                gateway.create_booking(&request).await
            }
            Target::Update { booking_id } => {
                let request = BookingUpdateRequest {
                    date_from,
                    date_to,
                    guests: self.guests,
                };
                gateway.update_booking(booking_id, &request).await
            }
        };
        self.busy = false;

        match result {
            Ok(record) => {
                self.selection.clear();
                self.guests = 1;
                self.pending_error = None;
                let message = match self.target {
                    Target::Create { .. } => format!("Booked {}.", self.venue.name),
                    Target::Update { .. } => format!("Updated booking at {}.", self.venue.name),
                };
                self.notifier.notify(Notice::success(message));
                Ok(record)
            }
            Err(e) => {
                self.notifier.notify(Notice::error(e.to_string()));
                Err(e.into())
            }
        }
    }
}

/// Cancels `booking_id` after the user confirms.
///
/// Returns `Ok(false)` when the user declined; no request is sent then.
pub async fn cancel_booking<G: BookingGateway + ?Sized>(
    gateway: &G,
    notifier: &dyn Notifier,
    booking_id: &BookingId,
) -> Result<bool, SubmissionError> {
    let question = format!("Cancel booking {booking_id}? This cannot be undone.");
    if !notifier.request(&question).await {
        tracing::debug!(booking = %booking_id, "cancel declined");
        return Ok(false);
    }

    match gateway.cancel_booking(booking_id).await {
        Ok(()) => {
            notifier.notify(Notice::success(format!("Booking {booking_id} cancelled.")));
            Ok(true)
        }
        Err(e) => {
            notifier.notify(Notice::error(e.to_string()));
            Err(e.into())
        }
    }
}

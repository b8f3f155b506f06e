// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid for the availability calendar.
//!
//! [`CalendarMonth`] is a pure snapshot of one month. [`CalendarGrid`] keeps
//! the displayed month and the known bookings, and routes day clicks into the
//! [`DateSelection`] state machine.

use holidaze_api::BookingId;
use jiff::ToSpan;
use jiff::civil::Date;

use crate::booking::Booking;
use crate::error::OverlapError;
use crate::selection::DateSelection;

/// How a day is drawn, in order of precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Before today; not clickable.
    Past,
    /// Covered by an existing booking; only reachable as the end of a range,
    /// which is then rejected.
    Booked,
    /// The first day of the current selection.
    SelectionStart,
    /// After the start, up to and including the end of a complete selection.
    SelectionRange,
    /// Free to pick.
    Available,
}

/// First column of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO weeks.
    #[default]
    Monday,
    /// US-style weeks.
    Sunday,
}

impl WeekStart {
    /// Column headers, two letters each.
    pub const fn labels(self) -> [&'static str; 7] {
        match self {
            Self::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            Self::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        }
    }

    /// Column of `date` in a week starting on this day, `0..7`.
    fn column(self, date: Date) -> u8 {
        let offset = match self {
            Self::Monday => date.weekday().to_monday_zero_offset(),
            Self::Sunday => date.weekday().to_sunday_zero_offset(),
        };
        offset.unsigned_abs()
    }
}

/// One day of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The day.
    pub date: Date,
    /// How to draw it.
    pub state: DayState,
}

/// Classifies one day.
///
/// `past` wins over `booked`, which wins over the selection marks. A booking
/// whose id equals `ignore` is treated as absent.
pub fn classify(
    day: Date,
    today: Date,
    bookings: &[Booking],
    selection: &DateSelection,
    ignore: Option<&BookingId>,
) -> DayState {
    if day < today {
        DayState::Past
    } else if bookings
        .iter()
        .any(|b| Some(&b.id) != ignore && b.occupies(day))
    {
        DayState::Booked
    } else if selection.is_start(day) {
        DayState::SelectionStart
    } else if selection.is_in_range(day) {
        DayState::SelectionRange
    } else {
        DayState::Available
    }
}

/// A rendered month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    /// Year shown.
    pub year: i16,
    /// Month shown, `1..=12`.
    pub month: i8,
    /// Empty cells before the first day.
    pub leading_blanks: u8,
    /// Column order.
    pub week_start: WeekStart,
    /// Every day of the month, in order.
    pub days: Vec<DayCell>,
}

impl CalendarMonth {
    /// Computes the month containing `any_day`.
    pub fn compute(
        any_day: Date,
        today: Date,
        bookings: &[Booking],
        selection: &DateSelection,
        ignore: Option<&BookingId>,
        week_start: WeekStart,
    ) -> Self {
        let first = any_day.first_of_month();
        let len = usize::from(first.days_in_month().unsigned_abs());
        let days = first
            .series(1.day())
            .take(len)
            .map(|date| DayCell {
                date,
                state: classify(date, today, bookings, selection, ignore),
            })
            .collect();

        Self {
            year: first.year(),
            month: first.month(),
            leading_blanks: week_start.column(first),
            week_start,
            days,
        }
    }

    /// The cell for `date`, if it belongs to this month.
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        self.days.iter().find(|c| c.date == date)
    }

    /// Lays the days out in rows of seven, padding with `None`.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let mut slots: Vec<Option<&DayCell>> = vec![None; usize::from(self.leading_blanks)];
        slots.extend(self.days.iter().map(Some));
        slots
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                for (slot, cell) in row.iter_mut().zip(chunk) {
                    *slot = *cell;
                }
                row
            })
            .collect()
    }
}

/// What a day click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The day was past, or booked and not ending a range; nothing changed.
    Ignored(DayState),
    /// The selection moved to a new state.
    Applied,
}

/// The displayed month plus the bookings it is checked against.
#[derive(Debug, Clone)]
pub struct CalendarGrid {
    shown: Date,
    today: Date,
    bookings: Vec<Booking>,
    ignore: Option<BookingId>,
    week_start: WeekStart,
}

impl CalendarGrid {
    /// Creates a grid showing the month of `today`.
    pub fn new(today: Date, bookings: Vec<Booking>) -> Self {
        Self {
            shown: today.first_of_month(),
            today,
            bookings,
            ignore: None,
            week_start: WeekStart::default(),
        }
    }

    /// Treats the booking `id` as free, for editing it in place.
    #[must_use]
    pub fn ignoring(mut self, id: Option<BookingId>) -> Self {
        self.ignore = id;
        self
    }

    /// Sets the first column of the grid.
    #[must_use]
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Shows the month containing `day`.
    pub fn show(&mut self, day: Date) {
        self.shown = day.first_of_month();
    }

    /// Moves one month back. Bookings and selection are untouched.
    pub fn prev_month(&mut self) {
        match self.shown.checked_sub(1.month()) {
            Ok(d) => self.shown = d,
            Err(e) => tracing::warn!(shown = %self.shown, err = %e, "cannot move before this month"),
        }
    }

    /// Moves one month forward. Bookings and selection are untouched.
    pub fn next_month(&mut self) {
        match self.shown.checked_add(1.month()) {
            Ok(d) => self.shown = d,
            Err(e) => tracing::warn!(shown = %self.shown, err = %e, "cannot move past this month"),
        }
    }

    /// First day of the displayed month.
    pub const fn shown(&self) -> Date {
        self.shown
    }

    /// The day before which everything is past.
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Known bookings.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Replaces the known bookings, e.g. when a fetch completes.
    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
    }

    /// The booking treated as free, if editing.
    pub const fn ignored(&self) -> Option<&BookingId> {
        self.ignore.as_ref()
    }

    /// Classifies a single day against the current selection.
    pub fn state_of(&self, day: Date, selection: &DateSelection) -> DayState {
        classify(
            day,
            self.today,
            &self.bookings,
            selection,
            self.ignore.as_ref(),
        )
    }

    /// Renders the displayed month.
    pub fn render(&self, selection: &DateSelection) -> CalendarMonth {
        CalendarMonth::compute(
            self.shown,
            self.today,
            &self.bookings,
            selection,
            self.ignore.as_ref(),
            self.week_start,
        )
    }

    /// Handles a click on `day`.
    ///
    /// Past days are ignored. Booked days are ignored unless they end a range
    /// started earlier, in which case the range overlaps and is rejected.
    /// Otherwise the selection advances as described on
    /// [`DateSelection::click`].
    ///
    /// # Errors
    ///
    /// Returns [`OverlapError`] if the click would complete a range over a
    /// booking; the selection is then empty.
    pub fn click(
        &self,
        selection: &mut DateSelection,
        day: Date,
    ) -> Result<ClickOutcome, OverlapError> {
        let state = self.state_of(day, selection);
        let ends_range = matches!(*selection, DateSelection::StartOnly { from } if day > from);
        let ignored = match state {
            DayState::Past => true,
            DayState::Booked => !ends_range,
            _ => false,
        };
        if ignored {
            tracing::debug!(%day, ?state, "ignoring click");
            return Ok(ClickOutcome::Ignored(state));
        }

        selection.click(day, &self.bookings, self.ignore.as_ref())?;
        Ok(ClickOutcome::Applied)
    }
}

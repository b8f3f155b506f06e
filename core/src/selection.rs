// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The two-click date-range selection.

use holidaze_api::BookingId;
use jiff::civil::Date;

use crate::booking::{Booking, find_overlap};
use crate::error::OverlapError;
use crate::interval::nights_between;

/// An in-progress date-range selection.
///
/// `Complete` always holds `from <= to`; a range ending before it starts
/// cannot be built through [`DateSelection::click`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateSelection {
    /// Nothing selected.
    #[default]
    Empty,

    /// The first day was picked, waiting for the last one.
    StartOnly {
        /// First day.
        from: Date,
    },

    /// Both ends picked.
    Complete {
        /// First day.
        from: Date,
        /// Last day.
        to: Date,
    },
}

impl DateSelection {
    /// Applies a click on `day`.
    ///
    /// The caller has already rejected past days, and booked days that would
    /// start a selection. A second click
    /// after the start completes the range unless it overlaps one of
    /// `bookings` (other than `ignore`); then the selection is cleared and the
    /// overlap is reported. A second click on or before the start restarts
    /// the selection from `day`.
    ///
    /// # Errors
    ///
    /// Returns [`OverlapError`] when the completed range would overlap a booking.
    /// The selection is `Empty` afterwards.
    pub fn click(
        &mut self,
        day: Date,
        bookings: &[Booking],
        ignore: Option<&BookingId>,
    ) -> Result<(), OverlapError> {
        match *self {
            Self::Empty | Self::Complete { .. } => {
                *self = Self::StartOnly { from: day };
            }
            Self::StartOnly { from } if day > from => {
                if let Some(hit) = find_overlap(bookings, from, day, ignore) {
                    *self = Self::Empty;
                    return Err(OverlapError {
                        from,
                        to: day,
                        conflicting: hit.id.clone(),
                    });
                }
                *self = Self::Complete { from, to: day };
            }
            Self::StartOnly { .. } => {
                *self = Self::StartOnly { from: day };
            }
        }
        Ok(())
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// First selected day, if any.
    pub const fn from(&self) -> Option<Date> {
        match self {
            Self::Empty => None,
            Self::StartOnly { from } | Self::Complete { from, .. } => Some(*from),
        }
    }

    /// Last selected day, only when complete.
    pub const fn to(&self) -> Option<Date> {
        match self {
            Self::Complete { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// Both ends, only when complete.
    pub const fn range(&self) -> Option<(Date, Date)> {
        match self {
            Self::Complete { from, to } => Some((*from, *to)),
            _ => None,
        }
    }

    /// Nights covered by a complete selection, `0` otherwise.
    pub fn nights(&self) -> i64 {
        self.range()
            .map_or(0, |(from, to)| nights_between(from, to).max(0))
    }

    /// Whether `day` is the selected start.
    pub fn is_start(&self, day: Date) -> bool {
        self.from() == Some(day)
    }

    /// Whether `day` lies after the start and no later than the end.
    pub fn is_in_range(&self, day: Date) -> bool {
        self.range().is_some_and(|(from, to)| from < day && day <= to)
    }
}

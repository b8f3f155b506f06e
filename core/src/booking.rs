// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use holidaze_api::{BookingId, BookingRecord, VenueId, VenueRecord};
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::error::FetchError;
use crate::interval::{parse_api_date, ranges_overlap};

/// An existing reservation, reduced to whole days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Booking id.
    pub id: BookingId,
    /// First occupied day.
    pub date_from: Date,
    /// Last occupied day, inclusive.
    pub date_to: Date,
    /// Number of guests.
    pub guests: u32,
}

impl Booking {
    /// Interprets an API record, reading timestamps in `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Malformed`] when a date does not parse or the
    /// range is inverted.
    pub fn from_record(record: &BookingRecord, tz: &TimeZone) -> Result<Self, FetchError> {
        let malformed = |reason: String| FetchError::Malformed {
            id: record.id.clone(),
            reason,
        };

        let date_from = parse_api_date(&record.date_from, tz)
            .map_err(|e| malformed(format!("dateFrom {:?}: {e}", record.date_from)))?;
        let date_to = parse_api_date(&record.date_to, tz)
            .map_err(|e| malformed(format!("dateTo {:?}: {e}", record.date_to)))?;
        if date_from > date_to {
            return Err(malformed(format!("dateFrom {date_from} is after dateTo {date_to}")));
        }

        Ok(Self {
            id: record.id.clone(),
            date_from,
            date_to,
            guests: record.guests,
        })
    }

    /// Whether `day` falls inside this booking, both ends included.
    pub fn occupies(&self, day: Date) -> bool {
        ranges_overlap(self.date_from, self.date_to, day, day)
    }

    /// Whether `[from, to]` shares a day with this booking.
    pub fn overlaps(&self, from: Date, to: Date) -> bool {
        ranges_overlap(self.date_from, self.date_to, from, to)
    }
}

/// Finds the first booking other than `ignore` that overlaps `[from, to]`.
pub fn find_overlap<'a>(
    bookings: &'a [Booking],
    from: Date,
    to: Date,
    ignore: Option<&BookingId>,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .filter(|b| Some(&b.id) != ignore)
        .find(|b| b.overlaps(from, to))
}

/// A rentable property.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Venue id.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price per night.
    pub price: f64,
    /// Maximum guests, at least 1.
    pub max_guests: u32,
    /// Profile name of the venue manager.
    pub owner: Option<String>,
}

impl From<&VenueRecord> for Venue {
    fn from(record: &VenueRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            max_guests: record.max_guests.max(1),
            owner: record.owner.as_ref().map(|o| o.name.clone()),
        }
    }
}

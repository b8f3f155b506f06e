// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Venue identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    /// Creates a new `VenueId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for VenueId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for VenueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VenueId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Booking identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Creates a new `BookingId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for BookingId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for BookingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A booking as returned by the API.
///
/// Dates are kept as the raw strings the server sent: either `YYYY-MM-DD` or a
/// full timestamp. Interpreting them is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Booking id.
    pub id: BookingId,
    /// First occupied day.
    pub date_from: String,
    /// Last occupied day.
    pub date_to: String,
    /// Number of guests.
    pub guests: u32,
    /// The booked venue, present when requested with `_venue=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueSummary>,
    /// The customer, present when requested with `_customer=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<ProfileRef>,
}

/// The subset of venue fields embedded in a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSummary {
    /// Venue id.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Price per night.
    #[serde(default)]
    pub price: f64,
    /// Maximum guests.
    #[serde(default)]
    pub max_guests: u32,
}

/// A venue with its bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    /// Venue id.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Price per night.
    pub price: f64,
    /// Maximum guests.
    pub max_guests: u32,
    /// Owner profile, present when requested with `_owner=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ProfileRef>,
    /// Existing bookings, present when requested with `_bookings=true`.
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
}

/// A profile reference (venue owner or booking customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRef {
    /// Profile name, unique per user.
    pub name: String,
    /// Profile email.
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /holidaze/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    /// First day, `YYYY-MM-DD`.
    pub date_from: String,
    /// Last day, `YYYY-MM-DD`.
    pub date_to: String,
    /// Number of guests.
    pub guests: u32,
    /// The venue to book.
    pub venue_id: VenueId,
}

/// Body of `PUT /holidaze/bookings/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdateRequest {
    /// First day, `YYYY-MM-DD`.
    pub date_from: String,
    /// Last day, `YYYY-MM-DD`.
    pub date_to: String,
    /// Number of guests.
    pub guests: u32,
}

/// Successful response wrapper, `{ "data": ..., "meta": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Error response, `{ "errors": [{ "message": ... }], "statusCode": ... }`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEntry {
    pub message: String,
}

impl ErrorBody {
    /// Joins all messages; `None` if the body carried none.
    pub fn message(&self) -> Option<String> {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        (!messages.is_empty()).then(|| messages.join("; "))
    }
}

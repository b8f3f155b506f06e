// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Loading the bookings of a venue.

use holidaze_api::{BookingRecord, ProfileRef, VenueId, VenueRecord, VenueSummary};
use jiff::tz::TimeZone;

use crate::booking::{Booking, Venue};
use crate::error::FetchError;
use crate::gateway::BookingGateway;
use crate::session::Session;

/// A venue together with its current bookings.
#[derive(Debug, Clone)]
pub struct VenueBookings {
    /// The venue.
    pub venue: Venue,
    /// Its bookings, in API order.
    pub bookings: Vec<Booking>,
}

/// Interprets booking records, failing on the first malformed one.
pub fn bookings_from_records(
    records: &[BookingRecord],
    tz: &TimeZone,
) -> Result<Vec<Booking>, FetchError> {
    records
        .iter()
        .map(|r| Booking::from_record(r, tz))
        .collect()
}

/// Reads the raw venue record, bookings embedded.
#[tracing::instrument(skip(gateway))]
pub async fn fetch_venue<G: BookingGateway + ?Sized>(
    gateway: &G,
    venue_id: &VenueId,
) -> Result<VenueRecord, FetchError> {
    Ok(gateway.venue_with_bookings(venue_id).await?)
}

/// Reads the bookings of `venue_id`, reading dates in `tz`.
///
/// # Errors
///
/// Fails when the API call fails or any booking is malformed. Callers decide
/// whether to render with no bookings or give up.
pub async fn fetch_venue_bookings<G: BookingGateway + ?Sized>(
    gateway: &G,
    venue_id: &VenueId,
    tz: &TimeZone,
) -> Result<Vec<Booking>, FetchError> {
    let record = fetch_venue(gateway, venue_id).await?;
    let bookings = bookings_from_records(&record.bookings, tz)?;
    tracing::debug!(venue = %venue_id, count = bookings.len(), "bookings loaded");
    Ok(bookings)
}

/// A booking with the venue or customer it was listed with.
#[derive(Debug, Clone)]
pub struct BookingEntry {
    /// The booking.
    pub booking: Booking,
    /// The venue, on profile listings.
    pub venue: Option<VenueSummary>,
    /// The customer, on venue listings.
    pub customer: Option<ProfileRef>,
}

impl BookingEntry {
    fn from_record(record: &BookingRecord, tz: &TimeZone) -> Result<Self, FetchError> {
        Ok(Self {
            booking: Booking::from_record(record, tz)?,
            venue: record.venue.clone(),
            customer: record.customer.clone(),
        })
    }
}

/// Lists the bookings of the signed-in profile, earliest first.
pub async fn fetch_my_bookings<G: BookingGateway + ?Sized>(
    gateway: &G,
    session: &Session,
    tz: &TimeZone,
) -> Result<Vec<BookingEntry>, FetchError> {
    let records = gateway.profile_bookings(&session.name).await?;
    let mut entries = records
        .iter()
        .map(|r| BookingEntry::from_record(r, tz))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.booking.date_from);
    Ok(entries)
}

/// Lists the bookings made against a venue, for its manager, earliest first.
pub async fn fetch_venue_entries<G: BookingGateway + ?Sized>(
    gateway: &G,
    venue_id: &VenueId,
    tz: &TimeZone,
) -> Result<(Venue, Vec<BookingEntry>), FetchError> {
    let record = fetch_venue(gateway, venue_id).await?;
    let mut entries = record
        .bookings
        .iter()
        .map(|r| BookingEntry::from_record(r, tz))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|e| e.booking.date_from);
    Ok((Venue::from(&record), entries))
}

/// Remembers the bookings of the last venue that was loaded.
///
/// Loading the same venue again is served from memory until
/// [`BookingCache::refresh`] or [`BookingCache::invalidate`].
#[derive(Debug)]
pub struct BookingCache {
    tz: TimeZone,
    entry: Option<VenueBookings>,
}

impl BookingCache {
    /// Creates an empty cache reading dates in `tz`.
    pub fn new(tz: TimeZone) -> Self {
        Self { tz, entry: None }
    }

    /// Returns the bookings of `venue_id`, fetching them on a venue change.
    pub async fn load<G: BookingGateway + ?Sized>(
        &mut self,
        gateway: &G,
        venue_id: &VenueId,
    ) -> Result<&VenueBookings, FetchError> {
        match self.entry.take() {
            Some(entry) if &entry.venue.id == venue_id => {
                tracing::debug!(venue = %venue_id, "bookings served from cache");
                Ok(self.entry.insert(entry))
            }
            _ => {
                let fresh = self.fetch(gateway, venue_id).await?;
                Ok(self.entry.insert(fresh))
            }
        }
    }

    /// Re-fetches the cached venue. Does nothing when the cache is empty.
    pub async fn refresh<G: BookingGateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<Option<&VenueBookings>, FetchError> {
        let Some(venue_id) = self.entry.as_ref().map(|e| e.venue.id.clone()) else {
            return Ok(None);
        };
        let fresh = self.fetch(gateway, &venue_id).await?;
        self.entry = Some(fresh);
        Ok(self.entry.as_ref())
    }

    /// The cached venue, if any.
    pub const fn get(&self) -> Option<&VenueBookings> {
        self.entry.as_ref()
    }

    /// Forgets the cached venue.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    async fn fetch<G: BookingGateway + ?Sized>(
        &self,
        gateway: &G,
        venue_id: &VenueId,
    ) -> Result<VenueBookings, FetchError> {
        let record = fetch_venue(gateway, venue_id).await?;
        let bookings = bookings_from_records(&record.bookings, &self.tz)?;
        Ok(VenueBookings {
            venue: Venue::from(&record),
            bookings,
        })
    }
}

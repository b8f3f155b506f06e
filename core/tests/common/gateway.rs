// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory [`BookingGateway`] for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use holidaze_api::{
    ApiError, BookingId, BookingRecord, BookingUpdateRequest, NewBookingRequest, VenueId,
    VenueRecord,
};
use holidaze_core::BookingGateway;

/// A request the fake gateway received.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum GatewayCall {
    Venue(VenueId),
    Get(BookingId),
    Profile(String),
    Create(NewBookingRequest),
    Update(BookingId, BookingUpdateRequest),
    Cancel(BookingId),
}

/// Serves one venue and answers writes with a fixed outcome.
#[derive(Debug, Default)]
pub struct FakeGateway {
    venue: Option<VenueRecord>,
    fail_reads: bool,
    reject_writes: Option<(u16, String)>,
    calls: Mutex<Vec<GatewayCall>>,
}

#[allow(dead_code)]
impl FakeGateway {
    /// A gateway serving `venue`.
    pub fn serving(venue: VenueRecord) -> Self {
        Self {
            venue: Some(venue),
            ..Self::default()
        }
    }

    /// Every read fails with a transport error.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every write is rejected with `status` and `message`.
    pub fn rejecting_writes(mut self, status: u16, message: &str) -> Self {
        self.reject_writes = Some((status, message.to_string()));
        self
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of venue reads received so far.
    pub fn venue_reads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, GatewayCall::Venue(_)))
            .count()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn read_guard(&self) -> Result<(), ApiError> {
        if self.fail_reads {
            Err(ApiError::Http("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn write_guard(&self) -> Result<(), ApiError> {
        match &self.reject_writes {
            Some((status, message)) => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn stored(id: &str, from: &str, to: &str, guests: u32) -> BookingRecord {
        BookingRecord {
            id: BookingId::from(id),
            date_from: format!("{from}T00:00:00.000Z"),
            date_to: format!("{to}T00:00:00.000Z"),
            guests,
            venue: None,
            customer: None,
        }
    }
}

#[async_trait]
impl BookingGateway for FakeGateway {
    async fn venue_with_bookings(&self, venue_id: &VenueId) -> Result<VenueRecord, ApiError> {
        self.record(GatewayCall::Venue(venue_id.clone()));
        self.read_guard()?;
        match &self.venue {
            Some(v) if &v.id == venue_id => Ok(v.clone()),
            _ => Err(ApiError::NotFound(format!("No venue with id {venue_id}"))),
        }
    }

    async fn get_booking(&self, booking_id: &BookingId) -> Result<BookingRecord, ApiError> {
        self.record(GatewayCall::Get(booking_id.clone()));
        self.read_guard()?;
        self.venue
            .iter()
            .flat_map(|v| v.bookings.iter())
            .find(|b| &b.id == booking_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("No booking with id {booking_id}")))
    }

    async fn profile_bookings(&self, profile: &str) -> Result<Vec<BookingRecord>, ApiError> {
        self.record(GatewayCall::Profile(profile.to_string()));
        self.read_guard()?;
        Ok(self
            .venue
            .iter()
            .flat_map(|v| v.bookings.iter())
            .filter(|b| b.customer.as_ref().is_some_and(|c| c.name == profile))
            .cloned()
            .collect())
    }

    async fn create_booking(
        &self,
        request: &NewBookingRequest,
    ) -> Result<BookingRecord, ApiError> {
        self.record(GatewayCall::Create(request.clone()));
        self.write_guard()?;
        Ok(Self::stored(
            "new-booking",
            &request.date_from,
            &request.date_to,
            request.guests,
        ))
    }

    async fn update_booking(
        &self,
        booking_id: &BookingId,
        request: &BookingUpdateRequest,
    ) -> Result<BookingRecord, ApiError> {
        self.record(GatewayCall::Update(booking_id.clone(), request.clone()));
        self.write_guard()?;
        Ok(Self::stored(
            booking_id.as_str(),
            &request.date_from,
            &request.date_to,
            request.guests,
        ))
    }

    async fn cancel_booking(&self, booking_id: &BookingId) -> Result<(), ApiError> {
        self.record(GatewayCall::Cancel(booking_id.clone()));
        self.write_guard()
    }
}

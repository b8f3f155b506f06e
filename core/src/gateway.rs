// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use holidaze_api::{
    ApiError, BookingId, BookingRecord, BookingUpdateRequest, NewBookingRequest, NoroffClient,
    VenueId, VenueRecord,
};

/// The remote operations the booking core depends on.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Reads a venue with its bookings.
    async fn venue_with_bookings(&self, venue_id: &VenueId) -> Result<VenueRecord, ApiError>;

    /// Reads one booking with its venue.
    async fn get_booking(&self, booking_id: &BookingId) -> Result<BookingRecord, ApiError>;

    /// Lists the bookings of a profile.
    async fn profile_bookings(&self, profile: &str) -> Result<Vec<BookingRecord>, ApiError>;

    /// Creates a booking.
    async fn create_booking(&self, request: &NewBookingRequest)
    -> Result<BookingRecord, ApiError>;

    /// Changes an existing booking.
    async fn update_booking(
        &self,
        booking_id: &BookingId,
        request: &BookingUpdateRequest,
    ) -> Result<BookingRecord, ApiError>;

    /// Deletes a booking.
    async fn cancel_booking(&self, booking_id: &BookingId) -> Result<(), ApiError>;
}

#[async_trait]
impl BookingGateway for NoroffClient {
    async fn venue_with_bookings(&self, venue_id: &VenueId) -> Result<VenueRecord, ApiError> {
        Self::venue_with_bookings(self, venue_id).await
    }

    async fn get_booking(&self, booking_id: &BookingId) -> Result<BookingRecord, ApiError> {
        Self::get_booking(self, booking_id).await
    }

    async fn profile_bookings(&self, profile: &str) -> Result<Vec<BookingRecord>, ApiError> {
        Self::profile_bookings(self, profile).await
    }

    async fn create_booking(
        &self,
        request: &NewBookingRequest,
    ) -> Result<BookingRecord, ApiError> {
        Self::create_booking(self, request).await
    }

    async fn update_booking(
        &self,
        booking_id: &BookingId,
        request: &BookingUpdateRequest,
    ) -> Result<BookingRecord, ApiError> {
        Self::update_booking(self, booking_id, request).await
    }

    async fn cancel_booking(&self, booking_id: &BookingId) -> Result<(), ApiError> {
        Self::cancel_booking(self, booking_id).await
    }
}

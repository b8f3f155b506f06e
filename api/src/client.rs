// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Holidaze client for venue and booking operations.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{
    BookingId, BookingRecord, BookingUpdateRequest, NewBookingRequest, VenueId, VenueRecord,
};

/// Client for the Holidaze endpoints of the Noroff API.
///
/// # Example
///
/// ```ignore
/// use holidaze_api::{ApiConfig, NoroffClient, VenueId};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     api_key: Some("key".to_string()),
///     ..Default::default()
/// }
/// .with_bearer("token");
///
/// let client = NoroffClient::new(config)?;
/// let venue = client.venue_with_bookings(&VenueId::from("v-1")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NoroffClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl NoroffClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Fetches a venue together with its bookings and owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the venue does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn venue_with_bookings(&self, venue_id: &VenueId) -> Result<VenueRecord, ApiError> {
        let url = self.full_url(&format!("/holidaze/venues/{venue_id}"));
        let req = self
            .http
            .build_request(Method::GET, &url)
            .query(&[("_bookings", "true"), ("_owner", "true")]);
        self.http.execute_data(req).await
    }

    /// Fetches the bookings of a venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the venue does not exist.
    pub async fn venue_bookings(&self, venue_id: &VenueId) -> Result<Vec<BookingRecord>, ApiError> {
        Ok(self.venue_with_bookings(venue_id).await?.bookings)
    }

    /// Fetches a single booking with its venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the booking does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_booking(&self, booking_id: &BookingId) -> Result<BookingRecord, ApiError> {
        let url = self.full_url(&format!("/holidaze/bookings/{booking_id}"));
        let req = self
            .http
            .build_request(Method::GET, &url)
            .query(&[("_venue", "true")]);
        self.http.execute_data(req).await
    }

    /// Lists the bookings made by a profile, each with its venue.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn profile_bookings(&self, profile: &str) -> Result<Vec<BookingRecord>, ApiError> {
        let url = self.full_url(&format!("/holidaze/profiles/{profile}/bookings"));
        let req = self
            .http
            .build_request(Method::GET, &url)
            .query(&[("_venue", "true")]);
        self.http.execute_data(req).await
    }

    /// Creates a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the booking.
    #[tracing::instrument(skip(self))]
    pub async fn create_booking(
        &self,
        request: &NewBookingRequest,
    ) -> Result<BookingRecord, ApiError> {
        let url = self.full_url("/holidaze/bookings");
        let req = self.http.build_request(Method::POST, &url).json(request);
        self.http.execute_data(req).await
    }

    /// Updates the dates and guests of an existing booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the update.
    #[tracing::instrument(skip(self))]
    pub async fn update_booking(
        &self,
        booking_id: &BookingId,
        request: &BookingUpdateRequest,
    ) -> Result<BookingRecord, ApiError> {
        let url = self.full_url(&format!("/holidaze/bookings/{booking_id}"));
        let req = self.http.build_request(Method::PUT, &url).json(request);
        self.http.execute_data(req).await
    }

    /// Cancels (deletes) a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_booking(&self, booking_id: &BookingId) -> Result<(), ApiError> {
        let url = self.full_url(&format!("/holidaze/bookings/{booking_id}"));
        self.http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await?;
        Ok(())
    }

    /// Builds full URL from a path.
    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

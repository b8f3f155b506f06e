// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::sync::Arc;

use holidaze_api::{BookingId, BookingRecord, ProfileRef, VenueId, VenueRecord};
use holidaze_core::{
    Booking, BookingController, ControllerOptions, Notifier, Session, Target, Venue,
};
use jiff::civil::Date;

/// A booking record as the API returns it, midnight UTC timestamps.
pub fn booking_record(id: &str, from: &str, to: &str) -> BookingRecord {
    BookingRecord {
        id: BookingId::from(id),
        date_from: format!("{from}T00:00:00.000Z"),
        date_to: format!("{to}T00:00:00.000Z"),
        guests: 2,
        venue: None,
        customer: Some(ProfileRef {
            name: "guest".to_string(),
            email: "guest@stud.noroff.no".to_string(),
        }),
    }
}

/// An already interpreted booking.
pub fn booking(id: &str, from: Date, to: Date) -> Booking {
    Booking {
        id: BookingId::from(id),
        date_from: from,
        date_to: to,
        guests: 2,
    }
}

/// Venue `v-1`, 100 per night, up to 4 guests, with `bookings`.
pub fn venue_record(bookings: Vec<BookingRecord>) -> VenueRecord {
    VenueRecord {
        id: VenueId::from("v-1"),
        name: "Fjord Cabin".to_string(),
        description: "A cabin by the fjord".to_string(),
        price: 100.0,
        max_guests: 4,
        owner: Some(ProfileRef {
            name: "host".to_string(),
            email: "host@stud.noroff.no".to_string(),
        }),
        bookings,
    }
}

/// The venue of [`venue_record`].
pub fn venue() -> Venue {
    Venue::from(&venue_record(Vec::new()))
}

/// A signed-in customer.
pub fn signed_in() -> Session {
    Session {
        name: "guest".to_string(),
        email: Some("guest@stud.noroff.no".to_string()),
        access_token: "token".to_string(),
        api_key: Some("key".to_string()),
        venue_manager: false,
    }
}

/// A controller for `target` on [`venue`], fetched bookings already applied.
pub fn controller_for(
    target: Target,
    today: Date,
    bookings: Vec<Booking>,
    notifier: Arc<dyn Notifier>,
) -> BookingController {
    let mut ctl =
        BookingController::new(venue(), target, today, notifier, ControllerOptions::default());
    ctl.apply_fetch(Ok(bookings));
    ctl
}

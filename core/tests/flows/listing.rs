// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Booking lists for customers and venue managers.

use holidaze_api::VenueId;
use holidaze_core::{fetch_my_bookings, fetch_venue_entries};
use jiff::civil::date;
use jiff::tz::TimeZone;

use crate::common::{FakeGateway, GatewayCall, booking_record, signed_in, venue_record};

#[tokio::test]
async fn my_bookings_are_sorted_by_arrival() {
    let gateway = FakeGateway::serving(venue_record(vec![
        booking_record("late", "2024-09-01", "2024-09-03"),
        booking_record("early", "2024-07-01", "2024-07-02"),
    ]));

    let entries = fetch_my_bookings(&gateway, &signed_in(), &TimeZone::UTC)
        .await
        .unwrap();

    let ids: Vec<_> = entries.iter().map(|e| e.booking.id.as_str()).collect();
    assert_eq!(ids, ["early", "late"]);
    assert_eq!(gateway.calls(), vec![GatewayCall::Profile("guest".to_string())]);
}

#[tokio::test]
async fn venue_entries_carry_customers() {
    let gateway = FakeGateway::serving(venue_record(vec![booking_record(
        "1",
        "2024-06-10",
        "2024-06-15",
    )]));

    let (venue, entries) = fetch_venue_entries(&gateway, &VenueId::from("v-1"), &TimeZone::UTC)
        .await
        .unwrap();

    assert_eq!(venue.owner.as_deref(), Some("host"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].booking.date_to, date(2024, 6, 15));
    assert_eq!(
        entries[0].customer.as_ref().map(|c| c.name.as_str()),
        Some("guest")
    );
}

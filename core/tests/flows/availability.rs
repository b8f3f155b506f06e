// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fetching bookings, the cache, and behaviour when the fetch fails.

use std::sync::Arc;

use holidaze_api::VenueId;
use holidaze_core::{
    Availability, BookingCache, BookingController, ControllerOptions, DayState, FetchError,
    Target, fetch_venue_bookings,
};
use jiff::civil::date;
use jiff::tz::{TimeZone, offset};

use crate::common::{FakeGateway, RecordingNotifier, booking_record, venue, venue_record};

fn create() -> Target {
    Target::Create {
        venue_id: VenueId::from("v-1"),
    }
}

fn fresh_controller(notifier: Arc<RecordingNotifier>, fail_closed: bool) -> BookingController {
    BookingController::new(
        venue(),
        create(),
        date(2024, 6, 1),
        notifier,
        ControllerOptions {
            fail_closed_on_fetch_error: fail_closed,
            ..ControllerOptions::default()
        },
    )
}

#[tokio::test]
async fn fetch_reads_whole_days() {
    let gateway = FakeGateway::serving(venue_record(vec![booking_record(
        "1",
        "2024-06-10",
        "2024-06-15",
    )]));

    let bookings = fetch_venue_bookings(&gateway, &VenueId::from("v-1"), &TimeZone::UTC)
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].date_from, date(2024, 6, 10));
    assert_eq!(bookings[0].date_to, date(2024, 6, 15));
}

#[tokio::test]
async fn fetch_in_configured_zone_keeps_late_evening_day() {
    let mut record = booking_record("1", "2024-06-10", "2024-06-15");
    record.date_from = "2024-06-10T22:00:00.000Z".to_string();
    let gateway = FakeGateway::serving(venue_record(vec![record]));

    let west = TimeZone::fixed(offset(-5));
    let bookings = fetch_venue_bookings(&gateway, &VenueId::from("v-1"), &west)
        .await
        .unwrap();
    assert_eq!(bookings[0].date_from, date(2024, 6, 10));
}

#[tokio::test]
async fn malformed_record_fails_fetch() {
    let gateway = FakeGateway::serving(venue_record(vec![booking_record(
        "bad",
        "2024-06-15",
        "2024-06-10",
    )]));

    let err = fetch_venue_bookings(&gateway, &VenueId::from("v-1"), &TimeZone::UTC)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Malformed { ref id, .. } if id.as_str() == "bad"));
}

#[tokio::test]
async fn failed_fetch_shows_empty_calendar_and_blocks_submit() {
    let gateway = FakeGateway::serving(venue_record(vec![booking_record(
        "1",
        "2024-06-10",
        "2024-06-15",
    )]))
    .failing_reads();
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = fresh_controller(notifier.clone(), true);

    ctl.load_bookings(&gateway, &TimeZone::UTC).await;

    assert_eq!(ctl.availability(), Availability::Unknown);
    assert!(ctl.bookings().is_empty());
    assert_eq!(
        ctl.render().cell(date(2024, 6, 12)).map(|c| c.state),
        Some(DayState::Available)
    );
    assert_eq!(notifier.errors().len(), 1);

    ctl.click_day(date(2024, 6, 12)).unwrap();
    ctl.click_day(date(2024, 6, 14)).unwrap();
    assert!(!ctl.can_submit());
}

#[tokio::test]
async fn failed_fetch_can_submit_when_fail_open() {
    let gateway = FakeGateway::serving(venue_record(Vec::new())).failing_reads();
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = fresh_controller(notifier, false);

    ctl.load_bookings(&gateway, &TimeZone::UTC).await;
    ctl.click_day(date(2024, 6, 12)).unwrap();
    ctl.click_day(date(2024, 6, 14)).unwrap();
    assert!(ctl.can_submit());
}

#[tokio::test]
async fn successful_load_marks_bookings() {
    let gateway = FakeGateway::serving(venue_record(vec![booking_record(
        "1",
        "2024-06-10",
        "2024-06-15",
    )]));
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = fresh_controller(notifier.clone(), true);
    assert_eq!(ctl.availability(), Availability::Loading);

    ctl.load_bookings(&gateway, &TimeZone::UTC).await;

    assert_eq!(ctl.availability(), Availability::Known);
    assert_eq!(
        ctl.render().cell(date(2024, 6, 12)).map(|c| c.state),
        Some(DayState::Booked)
    );
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn cache_fetches_once_per_venue() {
    let gateway = FakeGateway::serving(venue_record(vec![booking_record(
        "1",
        "2024-06-10",
        "2024-06-15",
    )]));
    let mut cache = BookingCache::new(TimeZone::UTC);
    let id = VenueId::from("v-1");

    let loaded = cache.load(&gateway, &id).await.unwrap();
    assert_eq!(loaded.venue.name, "Fjord Cabin");
    assert_eq!(loaded.bookings.len(), 1);
    cache.load(&gateway, &id).await.unwrap();
    assert_eq!(gateway.venue_reads(), 1);

    cache.refresh(&gateway).await.unwrap();
    assert_eq!(gateway.venue_reads(), 2);

    cache.invalidate();
    assert!(cache.get().is_none());
    cache.load(&gateway, &id).await.unwrap();
    assert_eq!(gateway.venue_reads(), 3);
}

#[tokio::test]
async fn cache_refetches_on_venue_change() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()));
    let mut cache = BookingCache::new(TimeZone::UTC);

    cache.load(&gateway, &VenueId::from("v-1")).await.unwrap();
    let err = cache
        .load(&gateway, &VenueId::from("v-2"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Api(_)));
    assert_eq!(gateway.venue_reads(), 2);
    assert!(cache.get().is_none());
}

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Price, guests and submission.

use std::sync::Arc;

use holidaze_api::{BookingId, BookingUpdateRequest, NewBookingRequest, VenueId};
use holidaze_core::{
    BookingPanel, ControllerOptions, DateSelection, Level, SubmissionError, Target,
};
use jiff::civil::date;

use crate::common::{
    FakeGateway, GatewayCall, RecordingNotifier, booking, controller_for, signed_in, venue,
    venue_record,
};

fn create() -> Target {
    Target::Create {
        venue_id: VenueId::from("v-1"),
    }
}

#[test]
fn price_follows_selection() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier);

    ctl.click_day(date(2024, 7, 1)).unwrap();
    assert!(ctl.total_price().abs() < f64::EPSILON);

    ctl.click_day(date(2024, 7, 4)).unwrap();
    assert_eq!(ctl.nights(), 3);
    assert!((ctl.total_price() - 300.0).abs() < f64::EPSILON);
}

#[test]
fn single_day_stay_is_free_and_blocked() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier);

    ctl.preset(date(2024, 7, 1), date(2024, 7, 1), 2);
    assert_eq!(ctl.selection().range(), Some((date(2024, 7, 1), date(2024, 7, 1))));
    assert!(ctl.total_price().abs() < f64::EPSILON);
    assert!(!ctl.can_submit());
}

#[test]
fn guests_clamp_to_venue_capacity() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier);

    ctl.set_guests(12);
    assert_eq!(ctl.guests(), 4);
    ctl.set_guests(0);
    assert_eq!(ctl.guests(), 1);
}

#[test]
fn anonymous_visitor_gets_sign_in_prompt() {
    let notifier = Arc::new(RecordingNotifier::default());
    let panel = BookingPanel::open(
        None,
        venue(),
        create(),
        date(2024, 6, 1),
        notifier.clone(),
        ControllerOptions::default(),
    );

    let BookingPanel::SignInRequired(prompt) = panel else {
        panic!("expected a sign-in prompt");
    };
    assert!(prompt.message.contains("Fjord Cabin"));
    assert!(notifier.notices().is_empty());
}

#[test]
fn signed_in_visitor_gets_form() {
    let session = signed_in();
    let panel = BookingPanel::open(
        Some(&session),
        venue(),
        create(),
        date(2024, 6, 1),
        Arc::new(RecordingNotifier::default()),
        ControllerOptions::default(),
    );
    assert!(matches!(panel, BookingPanel::Interactive(_)));
}

#[tokio::test]
async fn create_sends_iso_dates_and_clears_state() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()));
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier.clone());

    ctl.click_day(date(2024, 7, 1)).unwrap();
    ctl.click_day(date(2024, 7, 4)).unwrap();
    ctl.set_guests(3);
    let record = ctl.submit(&gateway).await.unwrap();

    assert_eq!(record.id.as_str(), "new-booking");
    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::Create(NewBookingRequest {
            date_from: "2024-07-01".to_string(),
            date_to: "2024-07-04".to_string(),
            guests: 3,
            venue_id: VenueId::from("v-1"),
        })]
    );
    assert_eq!(*ctl.selection(), DateSelection::Empty);
    assert_eq!(ctl.guests(), 1);
    assert!(!ctl.is_busy());
    assert!(
        notifier
            .notices()
            .iter()
            .any(|n| n.level == Level::Success)
    );
}

#[tokio::test]
async fn update_targets_booking_id() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()));
    let notifier = Arc::new(RecordingNotifier::default());
    let target = Target::Update {
        booking_id: BookingId::from("7"),
    };
    let bookings = vec![booking("7", date(2024, 6, 10), date(2024, 6, 15))];
    let mut ctl = controller_for(target, date(2024, 6, 1), bookings, notifier);

    ctl.preset(date(2024, 6, 10), date(2024, 6, 15), 2);
    ctl.click_day(date(2024, 6, 12)).unwrap();
    ctl.click_day(date(2024, 6, 16)).unwrap();
    ctl.submit(&gateway).await.unwrap();

    assert_eq!(
        gateway.calls(),
        vec![GatewayCall::Update(
            BookingId::from("7"),
            BookingUpdateRequest {
                date_from: "2024-06-12".to_string(),
                date_to: "2024-06-16".to_string(),
                guests: 2,
            }
        )]
    );
}

#[tokio::test]
async fn rejection_keeps_selection_and_surfaces_message() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()))
        .rejecting_writes(409, "The venue is already booked for the selected dates");
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier.clone());

    ctl.click_day(date(2024, 7, 1)).unwrap();
    ctl.click_day(date(2024, 7, 4)).unwrap();
    let err = ctl.submit(&gateway).await.unwrap_err();

    assert!(matches!(err, SubmissionError::Api(_)));
    assert_eq!(
        err.to_string(),
        "The venue is already booked for the selected dates"
    );
    assert_eq!(
        notifier.errors(),
        vec!["The venue is already booked for the selected dates".to_string()]
    );
    assert_eq!(ctl.selection().range(), Some((date(2024, 7, 1), date(2024, 7, 4))));
    assert!(ctl.pending_error().is_none());
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn rejected_submission_can_be_retried_unchanged() {
    let gateway = FakeGateway::serving(venue_record(Vec::new())).rejecting_writes(503, "Try again");
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier.clone());

    ctl.click_day(date(2024, 7, 1)).unwrap();
    ctl.click_day(date(2024, 7, 4)).unwrap();
    ctl.submit(&gateway).await.unwrap_err();

    assert!(ctl.can_submit());
    let err = ctl.submit(&gateway).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Api(_)));
    assert_eq!(gateway.calls().len(), 2);
    assert_eq!(notifier.errors().len(), 2);
}

#[tokio::test]
async fn incomplete_selection_never_reaches_gateway() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()));
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier);

    ctl.click_day(date(2024, 7, 1)).unwrap();
    let err = ctl.submit(&gateway).await.unwrap_err();

    assert!(matches!(err, SubmissionError::NotReady(_)));
    assert!(gateway.calls().is_empty());
}

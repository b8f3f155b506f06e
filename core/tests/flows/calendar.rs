// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Day classification and the click state machine, seen through the controller.

use std::sync::Arc;

use holidaze_api::{BookingId, VenueId};
use holidaze_core::{ClickOutcome, DateSelection, DayState, Target};
use jiff::ToSpan;
use jiff::civil::date;

use crate::common::{RecordingNotifier, booking, controller_for};

fn create() -> Target {
    Target::Create {
        venue_id: VenueId::from("v-1"),
    }
}

#[test]
fn every_booked_day_is_booked() {
    let notifier = Arc::new(RecordingNotifier::default());
    let bookings = vec![booking("1", date(2024, 6, 10), date(2024, 6, 15))];
    let mut ctl = controller_for(create(), date(2024, 6, 1), bookings, notifier);
    ctl.show(date(2024, 6, 1));

    let month = ctl.render();
    for day in date(2024, 6, 10).series(1.day()).take(6) {
        assert_eq!(month.cell(day).map(|c| c.state), Some(DayState::Booked), "{day}");
    }
    assert_eq!(
        month.cell(date(2024, 6, 9)).map(|c| c.state),
        Some(DayState::Available)
    );
    assert_eq!(
        month.cell(date(2024, 6, 16)).map(|c| c.state),
        Some(DayState::Available)
    );
}

#[test]
fn overlapping_range_resets_with_one_error() {
    let notifier = Arc::new(RecordingNotifier::default());
    let bookings = vec![booking("1", date(2024, 6, 10), date(2024, 6, 15))];
    let mut ctl = controller_for(create(), date(2024, 6, 1), bookings, notifier.clone());

    ctl.click_day(date(2024, 6, 5)).unwrap();
    let err = ctl.click_day(date(2024, 6, 12)).unwrap_err();

    assert_eq!(err.conflicting, BookingId::from("1"));
    assert_eq!(*ctl.selection(), DateSelection::Empty);
    assert_eq!(notifier.errors().len(), 1);
    assert_eq!(ctl.pending_error(), Some(err.to_string().as_str()));
    assert!(!ctl.can_submit());
}

#[test]
fn next_click_clears_pending_error() {
    let notifier = Arc::new(RecordingNotifier::default());
    let bookings = vec![booking("1", date(2024, 6, 10), date(2024, 6, 15))];
    let mut ctl = controller_for(create(), date(2024, 6, 1), bookings, notifier.clone());

    ctl.click_day(date(2024, 6, 5)).unwrap();
    ctl.click_day(date(2024, 6, 12)).unwrap_err();
    ctl.click_day(date(2024, 6, 20)).unwrap();

    assert!(ctl.pending_error().is_none());
    assert_eq!(
        *ctl.selection(),
        DateSelection::StartOnly {
            from: date(2024, 6, 20)
        }
    );
    assert_eq!(notifier.errors().len(), 1);
}

#[test]
fn earlier_end_restarts_selection() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier);

    ctl.click_day(date(2024, 6, 20)).unwrap();
    ctl.click_day(date(2024, 6, 18)).unwrap();

    assert_eq!(
        *ctl.selection(),
        DateSelection::StartOnly {
            from: date(2024, 6, 18)
        }
    );
    assert_eq!(ctl.selection().to(), None);
}

#[test]
fn past_and_booked_clicks_are_ignored() {
    let notifier = Arc::new(RecordingNotifier::default());
    let bookings = vec![booking("1", date(2024, 6, 10), date(2024, 6, 15))];
    let mut ctl = controller_for(create(), date(2024, 6, 8), bookings, notifier.clone());

    let outcome = ctl.click_day(date(2024, 6, 3)).unwrap();
    assert_eq!(outcome, ClickOutcome::Ignored(DayState::Past));

    let outcome = ctl.click_day(date(2024, 6, 12)).unwrap();
    assert_eq!(outcome, ClickOutcome::Ignored(DayState::Booked));

    assert_eq!(*ctl.selection(), DateSelection::Empty);
    assert!(notifier.notices().is_empty());
}

#[test]
fn edited_booking_days_are_available() {
    let notifier = Arc::new(RecordingNotifier::default());
    let bookings = vec![
        booking("7", date(2024, 6, 10), date(2024, 6, 15)),
        booking("8", date(2024, 6, 20), date(2024, 6, 21)),
    ];
    let target = Target::Update {
        booking_id: BookingId::from("7"),
    };
    let mut ctl = controller_for(target, date(2024, 6, 1), bookings, notifier.clone());

    let month = ctl.render();
    for day in date(2024, 6, 10).series(1.day()).take(6) {
        assert_eq!(month.cell(day).map(|c| c.state), Some(DayState::Available), "{day}");
    }
    assert_eq!(
        month.cell(date(2024, 6, 20)).map(|c| c.state),
        Some(DayState::Booked)
    );

    // Moving the stay within its own days is allowed
    ctl.click_day(date(2024, 6, 11)).unwrap();
    ctl.click_day(date(2024, 6, 14)).unwrap();
    assert_eq!(ctl.selection().range(), Some((date(2024, 6, 11), date(2024, 6, 14))));

    // Running into another booking is not
    ctl.click_day(date(2024, 6, 12)).unwrap();
    assert!(ctl.click_day(date(2024, 6, 22)).is_err());
    assert_eq!(notifier.errors().len(), 1);
}

#[test]
fn selection_survives_month_navigation() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut ctl = controller_for(create(), date(2024, 6, 1), Vec::new(), notifier);

    ctl.click_day(date(2024, 6, 28)).unwrap();
    ctl.next_month();
    ctl.click_day(date(2024, 7, 2)).unwrap();
    ctl.prev_month();

    let june = ctl.render();
    assert_eq!(june.month, 6);
    assert_eq!(
        june.cell(date(2024, 6, 28)).map(|c| c.state),
        Some(DayState::SelectionStart)
    );
    assert_eq!(
        june.cell(date(2024, 6, 30)).map(|c| c.state),
        Some(DayState::SelectionRange)
    );
    assert_eq!(ctl.nights(), 4);
}

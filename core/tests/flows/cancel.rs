// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Cancelling a booking behind a confirmation.

use holidaze_api::BookingId;
use holidaze_core::{Level, SubmissionError, cancel_booking};

use crate::common::{FakeGateway, GatewayCall, RecordingNotifier, venue_record};

#[tokio::test]
async fn confirmed_cancel_deletes() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()));
    let notifier = RecordingNotifier::answering(true);
    let id = BookingId::from("7");

    let cancelled = cancel_booking(&gateway, &notifier, &id).await.unwrap();

    assert!(cancelled);
    assert_eq!(gateway.calls(), vec![GatewayCall::Cancel(id)]);
    assert_eq!(notifier.questions().len(), 1);
    assert!(
        notifier
            .notices()
            .iter()
            .any(|n| n.level == Level::Success)
    );
}

#[tokio::test]
async fn declined_cancel_sends_nothing() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()));
    let notifier = RecordingNotifier::answering(false);

    let cancelled = cancel_booking(&gateway, &notifier, &BookingId::from("7"))
        .await
        .unwrap();

    assert!(!cancelled);
    assert!(gateway.calls().is_empty());
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn rejected_cancel_surfaces_message() {
    let gateway = FakeGateway::serving(venue_record(Vec::new()))
        .rejecting_writes(403, "You do not have permission to delete this booking");
    let notifier = RecordingNotifier::answering(true);

    let err = cancel_booking(&gateway, &notifier, &BookingId::from("7"))
        .await
        .unwrap_err();

    assert!(matches!(err, SubmissionError::Api(_)));
    assert_eq!(
        notifier.errors(),
        vec!["You do not have permission to delete this booking".to_string()]
    );
}

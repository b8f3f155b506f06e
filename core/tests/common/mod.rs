// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - An in-memory booking gateway with call recording
//! - A notifier that records notices and answers confirmations from a script
//! - Test data factories (fixtures)

mod fixtures;
mod gateway;
mod notifier;

#[allow(unused_imports)]
pub use fixtures::{booking, booking_record, controller_for, signed_in, venue, venue_record};
#[allow(unused_imports)]
pub use gateway::{FakeGateway, GatewayCall};
#[allow(unused_imports)]
pub use notifier::RecordingNotifier;

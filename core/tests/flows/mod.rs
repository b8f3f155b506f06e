// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end booking flows against an in-memory gateway.
//!
//! These tests drive the controller the way a front end does: fetch, click
//! days, adjust guests, submit, and check what reached the gateway and the
//! notifier.

mod availability;
mod calendar;
mod cancel;
mod listing;
mod submit;

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Noroff Holidaze REST API (venues and bookings).

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::NoroffClient;
pub use crate::config::{ApiConfig, AuthMethod};
pub use crate::error::ApiError;
pub use crate::types::{
    BookingId, BookingRecord, BookingUpdateRequest, NewBookingRequest, ProfileRef, VenueId,
    VenueRecord, VenueSummary,
};

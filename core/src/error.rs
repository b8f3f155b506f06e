// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use holidaze_api::{ApiError, BookingId};
use jiff::civil::Date;

/// The booking list of a venue could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The API call failed.
    #[error("Failed to load bookings: {0}")]
    Api(#[from] ApiError),

    /// The API answered, but a booking could not be interpreted.
    #[error("Malformed booking {id}: {reason}")]
    Malformed {
        /// The offending booking.
        id: BookingId,
        /// What was wrong with it.
        reason: String,
    },
}

/// A tentative selection collides with a known booking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "The dates {from} to {to} overlap an existing booking. Please choose other dates."
)]
pub struct OverlapError {
    /// Start of the rejected range.
    pub from: Date,
    /// End of the rejected range.
    pub to: Date,
    /// The booking that was hit first.
    pub conflicting: BookingId,
}

/// A create/update/cancel call was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The API refused the request; the message is the API's own.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Submission is currently disabled (incomplete range, request in flight, ...).
    #[error("Booking cannot be submitted: {0}")]
    NotReady(&'static str),
}

/// Configuration could not be loaded or normalized.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A path could not be expanded.
    #[error("Invalid path: {0}")]
    Path(String),

    /// The time zone name is unknown.
    #[error("Unknown time zone {name}: {source}")]
    TimeZone {
        /// The configured name.
        name: String,
        /// Lookup failure.
        source: jiff::Error,
    },
}

/// The session file could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Filesystem error.
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but does not hold a session.
    #[error("Session file is corrupt: {0}")]
    Format(#[from] serde_json::Error),
}

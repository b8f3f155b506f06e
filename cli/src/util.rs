// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::ToSpan;
use jiff::civil::Date;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a day given as `YYYY-MM-DD`, `today` or `tomorrow`.
pub fn parse_date(today: Date, s: &str) -> Result<Date, Box<dyn Error>> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today.checked_add(1.day())?),
        other => other
            .parse::<Date>()
            .map_err(|_| format!("Invalid date {s:?}. Expected format: YYYY-MM-DD").into()),
    }
}

/// Parses a month given as `YYYY-MM` into its first day.
pub fn parse_month(s: &str) -> Result<Date, Box<dyn Error>> {
    let invalid = || format!("Invalid month {s:?}. Expected format: YYYY-MM");
    let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year: i16 = year.parse().map_err(|_| invalid())?;
    let month: i8 = month.parse().map_err(|_| invalid())?;
    Ok(Date::new(year, month, 1).map_err(|_| invalid())?)
}

/// Formats a price with two decimals, dropping them for whole amounts.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use holidaze_core::{BookingEntry, format_iso_date, nights_between};
use jiff::civil::Date;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, format_price};

#[derive(Debug)]
pub struct BookingFormatter {
    columns: Vec<BookingColumn>,
    today: Date,
    format: OutputFormat,
}

impl BookingFormatter {
    /// Columns for the signed-in profile's own bookings.
    pub fn for_guest(today: Date) -> Self {
        Self::with_columns(
            today,
            vec![
                BookingColumn::Id,
                BookingColumn::Venue,
                BookingColumn::From,
                BookingColumn::To,
                BookingColumn::Nights,
                BookingColumn::Guests,
            ],
        )
    }

    /// Columns for a venue manager looking at one venue.
    pub fn for_manager(today: Date) -> Self {
        Self::with_columns(
            today,
            vec![
                BookingColumn::Id,
                BookingColumn::Customer,
                BookingColumn::From,
                BookingColumn::To,
                BookingColumn::Nights,
                BookingColumn::Guests,
            ],
        )
    }

    fn with_columns(today: Date, columns: Vec<BookingColumn>) -> Self {
        Self {
            columns,
            today,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds the price column when the venue price is known.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.push(BookingColumn::Total);
        }
        self
    }

    pub fn format<'a>(&'a self, entries: &'a [BookingEntry]) -> Display<'a> {
        Display {
            entries,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    entries: &'a [BookingEntry],
    formatter: &'a BookingFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns: Vec<_> = self
            .formatter
            .columns
            .iter()
            .map(|kind| Column {
                kind: *kind,
                today: self.formatter.today,
            })
            .collect();

        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), &columns, self.entries)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &columns, self.entries)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingColumn {
    Id,
    Venue,
    Customer,
    From,
    To,
    Nights,
    Guests,
    Total,
}

#[derive(Debug, Clone, Copy)]
struct Column {
    kind: BookingColumn,
    today: Date,
}

impl TableColumn<BookingEntry> for Column {
    fn name(&self) -> Cow<'_, str> {
        match self.kind {
            BookingColumn::Id => "ID",
            BookingColumn::Venue => "Venue",
            BookingColumn::Customer => "Customer",
            BookingColumn::From => "From",
            BookingColumn::To => "To",
            BookingColumn::Nights => "Nights",
            BookingColumn::Guests => "Guests",
            BookingColumn::Total => "Total",
        }
        .into()
    }

    #[allow(clippy::cast_precision_loss)]
    fn format<'a>(&self, data: &'a BookingEntry) -> Cow<'a, str> {
        let booking = &data.booking;
        match self.kind {
            BookingColumn::Id => booking.id.as_str().into(),
            BookingColumn::Venue => data
                .venue
                .as_ref()
                .map_or(Cow::Borrowed("-"), |v| v.name.as_str().into()),
            BookingColumn::Customer => data
                .customer
                .as_ref()
                .map_or(Cow::Borrowed("-"), |c| c.name.as_str().into()),
            BookingColumn::From => format_iso_date(booking.date_from).into(),
            BookingColumn::To => format_iso_date(booking.date_to).into(),
            BookingColumn::Nights => nights_between(booking.date_from, booking.date_to)
                .to_string()
                .into(),
            BookingColumn::Guests => booking.guests.to_string().into(),
            BookingColumn::Total => match &data.venue {
                Some(venue) => {
                    let nights = nights_between(booking.date_from, booking.date_to);
                    format_price(nights as f64 * venue.price).into()
                }
                None => "-".into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self.kind {
            BookingColumn::Nights | BookingColumn::Guests | BookingColumn::Total => {
                PaddingDirection::Right
            }
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &BookingEntry) -> Option<Color> {
        // Finished stays are greyed out
        (data.booking.date_to < self.today).then_some(Color::BrightBlack)
    }
}

// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Colorize;
use holidaze_core::{Availability, BookingController, CalendarMonth, DateSelection, DayCell, DayState};

use crate::util::format_price;

/// Draws a [`CalendarMonth`] as a seven column grid.
#[derive(Debug, Clone, Copy)]
pub struct CalendarFormatter {
    legend: bool,
}

impl CalendarFormatter {
    pub fn new() -> Self {
        Self { legend: true }
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    pub fn format<'a>(&'a self, month: &'a CalendarMonth) -> Display<'a> {
        Display {
            month,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    month: &'a CalendarMonth,
    formatter: &'a CalendarFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self.month.days.first() {
            Some(cell) => cell.date.strftime("%B %Y").to_string(),
            None => format!("{:04}-{:02}", self.month.year, self.month.month),
        };
        writeln!(f, "{}", format!("{title:^20}").trim_end().bold())?;
        writeln!(f, "{}", self.month.week_start.labels().join(" "))?;

        for week in self.month.weeks() {
            let mut row: Vec<Option<&DayCell>> = week.to_vec();
            while let Some(None) = row.last() {
                row.pop();
            }
            let cells: Vec<String> = row
                .into_iter()
                .map(|slot| slot.map_or_else(|| "  ".to_string(), paint))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }

        if self.formatter.legend {
            writeln!(
                f,
                "\n{} past  {} booked  {} selected  {} free",
                "··".dimmed(),
                "xx".red().strikethrough(),
                "[]".black().on_green(),
                "dd",
            )?;
        }
        Ok(())
    }
}

fn paint(cell: &DayCell) -> String {
    let text = format!("{:>2}", cell.date.day());
    match cell.state {
        DayState::Past => text.dimmed().to_string(),
        DayState::Booked => text.red().strikethrough().to_string(),
        DayState::SelectionStart => text.black().on_green().bold().to_string(),
        DayState::SelectionRange => text.green().bold().to_string(),
        DayState::Available => text,
    }
}

/// Describes the venue, the selection and whether it can be booked.
#[derive(Debug)]
pub struct BookingSummary<'a> {
    controller: &'a BookingController,
}

impl<'a> BookingSummary<'a> {
    pub fn new(controller: &'a BookingController) -> Self {
        Self { controller }
    }
}

impl fmt::Display for BookingSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctl = self.controller;
        let venue = ctl.venue();
        writeln!(
            f,
            "{}  {} per night, up to {} guests",
            venue.name.bold(),
            format_price(venue.price),
            venue.max_guests,
        )?;

        match ctl.selection() {
            DateSelection::Empty => writeln!(f, "Selected: nothing yet")?,
            DateSelection::StartOnly { from } => {
                writeln!(f, "Selected: check-in {from}, pick a check-out day")?;
            }
            DateSelection::Complete { from, to } => writeln!(
                f,
                "Selected: {from} to {to} ({} nights), {} guests, total {}",
                ctl.nights(),
                ctl.guests(),
                format_price(ctl.total_price()).bold(),
            )?,
        }

        if ctl.availability() == Availability::Unknown {
            writeln!(
                f,
                "{}",
                "Availability unknown: bookings could not be loaded".yellow()
            )?;
        }

        match ctl.submit_blocker() {
            Some(reason) => writeln!(f, "{} {reason}", "Cannot book yet:".yellow()),
            None => writeln!(f, "{}", "Ready to book".green()),
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day ranges.
//!
//! All arithmetic here is on `time::Date`: local wall-clock dates with no
//! time-of-day or offset, so day differences can never drift across a DST
//! change.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(date_string: &str) -> Result<Date, DomainError> {
    let format: &[time::format_description::BorrowedFormatItem<'_>] =
        time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(date_string.trim(), format).map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Returns the number of days in a month, derived from calendar arithmetic.
///
/// # Errors
///
/// Returns an error if the year is outside the supported calendar.
pub fn days_in_month(year: i32, month: Month) -> Result<u8, DomainError> {
    CalendarMonth::from_parts(year, month).map(|m| m.length())
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    start: Date,
    /// Last day of the range (inclusive).
    end: Date,
}

impl DateRange {
    /// Creates a new closed range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` precedes `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day (inclusive).
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns true if `date` falls within the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates every day of the range in order.
    #[must_use]
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Date = self.next.filter(|d| *d <= self.end)?;
        self.next = current.next_day();
        Some(current)
    }
}

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// The first day of the month.
    first: Date,
    /// The number of days in the month.
    length: u8,
}

impl CalendarMonth {
    /// Creates a calendar month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in `1..=12` or the year is
    /// outside the supported calendar.
    pub fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        let month_value: Month = Month::try_from(month)
            .map_err(|_| DomainError::InvalidCalendarMonth { year, month })?;
        Self::from_parts(year, month_value)
    }

    /// Creates a calendar month from a year and a `time::Month`.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported calendar.
    pub fn from_parts(year: i32, month: Month) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidCalendarMonth {
            year,
            month: u8::from(month),
        };

        let first: Date = Date::from_calendar_date(year, month, 1).map_err(|_| invalid())?;
        let length: u8 = month.length(year);

        Ok(Self { first, length })
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.first.month()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(&self) -> Date {
        self.first
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Returns the month as a closed date range.
    #[must_use]
    pub fn range(&self) -> DateRange {
        let last: Date = self
            .first
            .replace_day(self.length)
            .unwrap_or(self.first);
        DateRange {
            start: self.first,
            end: last,
        }
    }
}

impl std::fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year(), u8::from(self.month()))
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while constructing or validating domain values.
///
/// The resolution and payroll functions never return these; they are
/// raised only when values enter the domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A rotation must contain at least one shift code.
    #[error("Rotation must contain at least one shift")]
    EmptyRotation,
    /// A rotation step is not `code` or `code:count`.
    #[error("Invalid rotation step '{0}': expected CODE or CODE:COUNT")]
    InvalidRotationStep(String),
    /// Contract end date precedes the start date.
    #[error("Contract end {end} precedes contract start {start}")]
    InvalidContractRange {
        /// The contract start date.
        start: Date,
        /// The offending end date.
        end: Date,
    },
    /// A decimal quantity could not be parsed.
    #[error("Invalid decimal '{input}': {reason}")]
    InvalidDecimal {
        /// The raw input.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },
    /// A quantity that must be non-negative was negative.
    #[error("{field} must not be negative, got '{input}'")]
    NegativeQuantity {
        /// The field being parsed.
        field: &'static str,
        /// The raw input.
        input: String,
    },
    /// Shift code is empty or invalid.
    #[error("Invalid shift code: {0}")]
    InvalidShiftCode(String),
    /// Shift label is empty.
    #[error("Invalid shift label: {0}")]
    InvalidShiftLabel(String),
    /// Shift color is not a hex color.
    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),
    /// Job name is empty.
    #[error("Invalid job name: {0}")]
    InvalidJobName(String),
    /// Job identifier is empty.
    #[error("Invalid job id: {0}")]
    InvalidJobId(String),
    /// A date range ends before it starts.
    #[error("Date range end {end} precedes start {start}")]
    InvalidDateRange {
        /// The range start.
        start: Date,
        /// The range end.
        end: Date,
    },
    /// Year and month do not form a representable calendar month.
    #[error("Invalid calendar month {year}-{month}")]
    InvalidCalendarMonth {
        /// The requested year.
        year: i32,
        /// The requested month number.
        month: u8,
    },
    /// Failed to parse date from string.
    #[error("Failed to parse date '{date_string}': {error}")]
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

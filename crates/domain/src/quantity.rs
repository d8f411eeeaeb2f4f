// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-point quantities used by the resolver and the payroll fold.
//!
//! Every quantity is stored as an integer count of hundredths:
//!
//! - [`Hours`]: hundredths of an hour (`7.5` h is `750`)
//! - [`Money`]: cents
//! - [`Rate`]: cents per hour
//! - [`TaxPercent`]: hundredths of a percent, kept unclamped
//!
//! Values enter and leave as decimal strings with at most two fractional
//! digits, so stored JSON reads as `"7.50"` rather than as raw integers.

use crate::error::DomainError;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of fractional digits every quantity carries.
const SCALE: u32 = 2;

/// Parses a decimal string with at most two fractional digits.
///
/// Surrounding whitespace is ignored and trailing zeros past the second
/// place are allowed, so `"1.230"` reads as `1.23`.
///
/// # Errors
///
/// Returns `DomainError::InvalidDecimal` if the input is not a number or
/// has more than two significant fractional digits.
fn parse_decimal(input: &str) -> Result<Decimal, DomainError> {
    let value: Decimal = Decimal::from_str(input.trim())
        .map_err(|_| DomainError::InvalidDecimal {
            input: input.to_string(),
            reason: "not a number",
        })?
        .normalize();
    if value.scale() > SCALE {
        return Err(DomainError::InvalidDecimal {
            input: input.to_string(),
            reason: "at most two decimal places are supported",
        });
    }
    Ok(value)
}

/// Parses a decimal string into a signed count of hundredths.
///
/// # Errors
///
/// Returns `DomainError::InvalidDecimal` if the input is not a decimal with
/// at most two fractional digits, or does not fit.
pub(crate) fn parse_hundredths(input: &str) -> Result<i64, DomainError> {
    parse_decimal(input)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|hundredths| hundredths.to_i64())
        .ok_or_else(|| DomainError::InvalidDecimal {
            input: input.to_string(),
            reason: "value is too large",
        })
}

/// Returns a count of hundredths as a decimal with two places.
fn to_decimal(hundredths: i128) -> Decimal {
    Decimal::from_i128_with_scale(hundredths, SCALE)
}

/// Parses a non-negative decimal into hundredths that fit `u64`.
fn parse_non_negative(input: &str, field: &'static str) -> Result<u64, DomainError> {
    let value: i64 = parse_hundredths(input)?;
    if value < 0 {
        return Err(DomainError::NegativeQuantity {
            field,
            input: input.to_string(),
        });
    }
    value.to_u64().ok_or_else(|| DomainError::InvalidDecimal {
        input: input.to_string(),
        reason: "value is out of range",
    })
}

/// A duration in hundredths of an hour.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Hours(u32);

impl Hours {
    /// Zero hours.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from hundredths of an hour.
    #[must_use]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Creates a duration from a whole number of hours.
    #[must_use]
    pub const fn whole(hours: u32) -> Self {
        Self(hours.saturating_mul(100))
    }

    /// Returns the duration in hundredths of an hour.
    #[must_use]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    /// Returns true if the duration is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two durations, saturating at the maximum.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl FromStr for Hours {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = parse_non_negative(s, "hours")?;
        value
            .to_u32()
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDecimal {
                input: s.to_string(),
                reason: "value is out of range",
            })
    }
}

impl TryFrom<String> for Hours {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hours> for String {
    fn from(value: Hours) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Hours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&to_decimal(i128::from(self.0)).to_string())
    }
}

/// An amount of money in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    /// No money.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates an amount from a whole number of currency units.
    #[must_use]
    pub const fn whole(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_non_negative(s, "amount").map(Self)
    }
}

impl TryFrom<String> for Money {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&to_decimal(i128::from(self.0)).to_string())
    }
}

/// A pay rate in cents per hour.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Rate(u64);

impl Rate {
    /// A zero rate.
    pub const ZERO: Self = Self(0);

    /// Creates a rate from cents per hour.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a rate from a whole number of currency units per hour.
    #[must_use]
    pub const fn whole(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the rate in cents per hour.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Pay for `hours` at this rate, in ten-thousandths of a currency unit.
    ///
    /// Hundredths of an hour times cents per hour is exact in this unit, so
    /// the payroll fold can sum these and round once at the end.
    #[must_use]
    pub fn pay_for(self, hours: Hours) -> u128 {
        u128::from(hours.hundredths()) * u128::from(self.0)
    }
}

impl FromStr for Rate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_non_negative(s, "rate").map(Self)
    }
}

impl TryFrom<String> for Rate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rate> for String {
    fn from(value: Rate) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&to_decimal(i128::from(self.0)).to_string())
    }
}

/// A flat tax percentage in hundredths of a percent.
///
/// Out-of-range values are stored as given and clamped into `0..=100 %`
/// only when applied.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TaxPercent(i32);

impl TaxPercent {
    /// The largest effective tax, 100 %.
    pub const MAX_HUNDREDTHS: u32 = 10_000;

    /// Creates a percentage from hundredths of a percent.
    #[must_use]
    pub const fn from_hundredths(hundredths: i32) -> Self {
        Self(hundredths)
    }

    /// Creates a percentage from a whole number of percent.
    #[must_use]
    pub const fn whole(percent: i32) -> Self {
        Self(percent.saturating_mul(100))
    }

    /// Returns the raw, unclamped value in hundredths of a percent.
    #[must_use]
    pub const fn hundredths(self) -> i32 {
        self.0
    }

    /// Returns the effective value in hundredths of a percent, clamped to `0..=10_000`.
    #[must_use]
    pub fn clamped_hundredths(self) -> u32 {
        self.0
            .clamp(0, 10_000)
            .to_u32()
            .unwrap_or(Self::MAX_HUNDREDTHS)
    }
}

impl FromStr for TaxPercent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = parse_hundredths(s)?;
        value
            .to_i32()
            .map(Self)
            .ok_or_else(|| DomainError::InvalidDecimal {
                input: s.to_string(),
                reason: "value is out of range",
            })
    }
}

impl TryFrom<String> for TaxPercent {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaxPercent> for String {
    fn from(value: TaxPercent) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TaxPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&to_decimal(i128::from(self.0)).to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hundredths_whole_number() {
        assert_eq!(parse_hundredths("8").unwrap(), 800);
    }

    #[test]
    fn test_parse_hundredths_single_fraction_digit() {
        assert_eq!(parse_hundredths("7.5").unwrap(), 750);
    }

    #[test]
    fn test_parse_hundredths_two_fraction_digits() {
        assert_eq!(parse_hundredths("12.34").unwrap(), 1234);
    }

    #[test]
    fn test_parse_hundredths_allows_trailing_zeros() {
        assert_eq!(parse_hundredths("1.230").unwrap(), 123);
        assert_eq!(parse_hundredths("8.0000").unwrap(), 800);
    }

    #[test]
    fn test_parse_hundredths_negative() {
        assert_eq!(parse_hundredths("-10").unwrap(), -1000);
    }

    #[test]
    fn test_parse_hundredths_trims_whitespace() {
        assert_eq!(parse_hundredths("  2.5 ").unwrap(), 250);
    }

    #[test]
    fn test_parse_hundredths_rejects_empty() {
        assert!(matches!(
            parse_hundredths(""),
            Err(DomainError::InvalidDecimal { .. })
        ));
        assert!(matches!(
            parse_hundredths("-"),
            Err(DomainError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_parse_hundredths_rejects_letters() {
        assert!(matches!(
            parse_hundredths("abc"),
            Err(DomainError::InvalidDecimal { .. })
        ));
        assert!(matches!(
            parse_hundredths("1.2x"),
            Err(DomainError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_parse_hundredths_rejects_three_decimals() {
        assert!(matches!(
            parse_hundredths("1.234"),
            Err(DomainError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_parse_hundredths_rejects_overflow() {
        assert!(matches!(
            parse_hundredths("99999999999999999999999999"),
            Err(DomainError::InvalidDecimal { .. })
        ));
    }

    #[test]
    fn test_to_decimal_keeps_two_places() {
        assert_eq!(to_decimal(0).to_string(), "0.00");
        assert_eq!(to_decimal(750).to_string(), "7.50");
        assert_eq!(to_decimal(11_000).to_string(), "110.00");
        assert_eq!(to_decimal(-1005).to_string(), "-10.05");
    }

    #[test]
    fn test_display_renders_two_places() {
        assert_eq!(Money::from_cents(5191).to_string(), "51.91");
        assert_eq!(Rate::whole(15).to_string(), "15.00");
        assert_eq!(TaxPercent::whole(-10).to_string(), "-10.00");
        assert_eq!(format!("{:>6}", Hours::whole(8)), "  8.00");
    }

    #[test]
    fn test_hours_rejects_negative() {
        let result: Result<Hours, DomainError> = "-1".parse();
        assert!(matches!(
            result,
            Err(DomainError::NegativeQuantity { field: "hours", .. })
        ));
    }

    #[test]
    fn test_money_and_rate_parse() {
        assert_eq!("110".parse::<Money>().unwrap(), Money::whole(110));
        assert_eq!("15.5".parse::<Rate>().unwrap(), Rate::from_cents(1550));
    }

    #[test]
    fn test_tax_percent_accepts_out_of_range_values() {
        assert_eq!("150".parse::<TaxPercent>().unwrap(), TaxPercent::whole(150));
        assert_eq!("-10".parse::<TaxPercent>().unwrap(), TaxPercent::whole(-10));
    }

    #[test]
    fn test_tax_percent_clamps_when_applied() {
        assert_eq!(TaxPercent::whole(150).clamped_hundredths(), 10_000);
        assert_eq!(TaxPercent::whole(-10).clamped_hundredths(), 0);
        assert_eq!(TaxPercent::from_hundredths(1550).clamped_hundredths(), 1550);
    }

    #[test]
    fn test_rate_pay_for_is_exact() {
        // 7.5 h at 10.33 = 77.475
        let pay: u128 = Rate::from_cents(1033).pay_for(Hours::from_hundredths(750));
        assert_eq!(pay, 774_750);
    }

    #[test]
    fn test_hours_serialize_as_decimal_string() {
        let json: String = serde_json::to_string(&Hours::from_hundredths(750)).unwrap();
        assert_eq!(json, "\"7.50\"");
        let back: Hours = serde_json::from_str("\"7.5\"").unwrap();
        assert_eq!(back, Hours::from_hundredths(750));
    }

    #[test]
    fn test_hours_deserialize_rejects_negative() {
        let result: Result<Hours, serde_json::Error> = serde_json::from_str("\"-2\"");
        assert!(result.is_err());
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payroll aggregation over a month or any closed date range.
//!
//! This module provides pure, deterministic totals computed by resolving
//! every day in the range and folding the active ones.
//!
//! Pay is accumulated exactly: hundredths of an hour multiplied by cents
//! per hour gives ten-thousandths of a currency unit, which are summed as
//! integers and rounded half-up to cents once, at the end, for gross and
//! for net.

use crate::calendar::{CalendarMonth, DateRange};
use crate::catalog::ShiftCatalog;
use crate::job::Job;
use crate::overrides::OverrideStore;
use crate::quantity::{Hours, Money, TaxPercent};
use crate::resolver::{ResolvedDay, resolve_day};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Ten-thousandths of a currency unit per cent.
const SUB_CENTS_PER_CENT: u128 = 100;

/// Totals for a range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Worked plus overtime hours.
    pub total_hours: Hours,
    /// Premium hours.
    pub premium_hours: Hours,
    /// Pay before tax.
    pub gross_pay: Money,
    /// Pay after the flat tax deduction.
    pub net_pay: Money,
    /// Number of days resolved.
    pub days_evaluated: u32,
    /// Number of days that contributed to the totals.
    pub active_days: u32,
}

/// Totals for one calendar month.
pub type MonthTotals = PayrollTotals;

/// Running state of the payroll fold.
#[derive(Debug, Default)]
struct Accumulator {
    total_hours: Hours,
    premium_hours: Hours,
    /// Gross pay in ten-thousandths of a currency unit.
    gross: u128,
    days_evaluated: u32,
    active_days: u32,
}

impl Accumulator {
    fn add(&mut self, day: &ResolvedDay, job: &Job) {
        self.days_evaluated = self.days_evaluated.saturating_add(1);
        if !day.has_activity() {
            return;
        }
        self.active_days = self.active_days.saturating_add(1);
        self.total_hours = self.total_hours.saturating_add(day.total_hours());
        self.premium_hours = self.premium_hours.saturating_add(day.premium_hours);
        self.gross = self
            .gross
            .saturating_add(job.pay.hourly_rate.pay_for(day.hours_worked))
            .saturating_add(day.overtime_rate.pay_for(day.overtime_hours))
            .saturating_add(day.premium_rate.pay_for(day.premium_hours));
    }

    fn finish(self, tax: TaxPercent) -> PayrollTotals {
        let kept: u128 = u128::from(TaxPercent::MAX_HUNDREDTHS - tax.clamped_hundredths());
        let net_cents: u128 = round_div(
            self.gross.saturating_mul(kept),
            SUB_CENTS_PER_CENT * u128::from(TaxPercent::MAX_HUNDREDTHS),
        );

        PayrollTotals {
            total_hours: self.total_hours,
            premium_hours: self.premium_hours,
            gross_pay: to_money(round_div(self.gross, SUB_CENTS_PER_CENT)),
            net_pay: to_money(net_cents),
            days_evaluated: self.days_evaluated,
            active_days: self.active_days,
        }
    }
}

/// Divides, rounding half-up.
const fn round_div(numerator: u128, denominator: u128) -> u128 {
    numerator.saturating_add(denominator / 2) / denominator
}

fn to_money(cents: u128) -> Money {
    Money::from_cents(cents.to_u64().unwrap_or(u64::MAX))
}

/// Computes payroll totals over a closed date range.
///
/// Every day in the range is resolved with [`resolve_day`]. Days with no
/// shift and no recorded hours are skipped. For the rest:
///
/// - `total_hours += hours_worked + overtime_hours`
/// - `premium_hours += premium_hours`
/// - `gross += hours_worked * hourly_rate + overtime_hours * overtime_rate + premium_hours * premium_rate`
///
/// Net pay is gross reduced by the job's tax, clamped to `0..=100 %`.
///
/// # Arguments
///
/// * `range` - The days to total
/// * `job` - The job whose rotation, contract and rates apply
/// * `catalog` - The shift definitions
/// * `overrides` - The job's override store
#[must_use]
pub fn range_totals(
    range: &DateRange,
    job: &Job,
    catalog: &ShiftCatalog,
    overrides: &OverrideStore,
) -> PayrollTotals {
    let mut accumulator: Accumulator = Accumulator::default();
    for date in range.days() {
        let day: ResolvedDay = resolve_day(date, job, catalog, overrides);
        accumulator.add(&day, job);
    }
    accumulator.finish(job.pay.tax_percent)
}

/// Computes payroll totals for a calendar month.
///
/// Iterates exactly the days of the month, so February has 29 days in a
/// leap year and 28 otherwise.
#[must_use]
pub fn month_totals(
    month: &CalendarMonth,
    job: &Job,
    catalog: &ShiftCatalog,
    overrides: &OverrideStore,
) -> MonthTotals {
    range_totals(&month.range(), job, catalog, overrides)
}

/// Resolves every day of a month, in date order.
///
/// This is the per-day view a calendar renders; summing it with the rules
/// of [`range_totals`] gives [`month_totals`].
#[must_use]
pub fn month_plan(
    month: &CalendarMonth,
    job: &Job,
    catalog: &ShiftCatalog,
    overrides: &OverrideStore,
) -> Vec<ResolvedDay> {
    month
        .range()
        .days()
        .map(|date| resolve_day(date, job, catalog, overrides))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_div_half_up() {
        assert_eq!(round_div(0, SUB_CENTS_PER_CENT), 0);
        assert_eq!(round_div(49, SUB_CENTS_PER_CENT), 0);
        assert_eq!(round_div(50, SUB_CENTS_PER_CENT), 1);
        assert_eq!(round_div(774_750, SUB_CENTS_PER_CENT), 7748);
        assert_eq!(round_div(1_100_000, SUB_CENTS_PER_CENT), 11_000);
    }

    #[test]
    fn test_net_rounds_once() {
        // 77.4750 gross at 33 % leaves 51.908250, which rounds to 51.91
        let accumulator: Accumulator = Accumulator {
            gross: 774_750,
            ..Accumulator::default()
        };
        let totals: PayrollTotals = accumulator.finish(TaxPercent::whole(33));
        assert_eq!(totals.gross_pay, Money::from_cents(7748));
        assert_eq!(totals.net_pay, Money::from_cents(5191));
    }

    #[test]
    fn test_finish_applies_tax_to_exact_gross() {
        let accumulator: Accumulator = Accumulator {
            gross: 1_100_000,
            ..Accumulator::default()
        };
        let totals: PayrollTotals = accumulator.finish(TaxPercent::whole(20));
        assert_eq!(totals.gross_pay, Money::whole(110));
        assert_eq!(totals.net_pay, Money::whole(88));
    }

    #[test]
    fn test_finish_fractional_tax() {
        // 100.00 gross at 15.5 % leaves 84.50
        let accumulator: Accumulator = Accumulator {
            gross: 1_000_000,
            ..Accumulator::default()
        };
        let totals: PayrollTotals = accumulator.finish(TaxPercent::from_hundredths(1550));
        assert_eq!(totals.net_pay, Money::from_cents(8450));
    }

    #[test]
    fn test_finish_clamps_tax() {
        let accumulator = || Accumulator {
            gross: 1_100_000,
            ..Accumulator::default()
        };
        assert_eq!(accumulator().finish(TaxPercent::whole(150)).net_pay, Money::ZERO);
        assert_eq!(
            accumulator().finish(TaxPercent::whole(-10)).net_pay,
            Money::whole(110)
        );
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift rotation resolution and payroll aggregation.
//!
//! Everything here is pure: functions take the job, the shift catalog and
//! the override store as arguments and return derived values without
//! touching any shared state.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod catalog;
mod error;
mod job;
mod overrides;
mod payroll;
mod quantity;
mod resolver;
mod rotation;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{CalendarMonth, DateRange, Days, days_in_month, parse_date};
pub use catalog::ShiftCatalog;
pub use error::DomainError;
pub use job::{Contract, Job, PayTerms};
pub use overrides::{DayOverride, OverrideStore};
pub use payroll::{MonthTotals, PayrollTotals, month_plan, month_totals, range_totals};
pub use quantity::{Hours, Money, Rate, TaxPercent};
pub use resolver::{ResolvedDay, resolve_day, resolve_with_override};
pub use rotation::{Rotation, RotationStep, rotation_at};
pub use types::{JobId, ShiftCode, ShiftDefinition, ShiftKind};
pub use validation::{
    DayOverrideDraft, parse_optional, validate_color, validate_shift_definition,
};

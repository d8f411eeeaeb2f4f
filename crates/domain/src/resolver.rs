// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of a single day.
//!
//! This module merges the three layers that describe a day:
//!
//! 1. the rotation default (only inside the contract window),
//! 2. the shift catalog (base hours, label, color),
//! 3. the sparse per-date override (always wins, even outside the window).
//!
//! Resolution is total: unknown or dangling shift codes resolve to a
//! zero-hour day with no definition rather than an error.

use crate::catalog::ShiftCatalog;
use crate::job::Job;
use crate::overrides::{DayOverride, OverrideStore};
use crate::quantity::{Hours, Rate};
use crate::rotation::rotation_at;
use crate::types::{ShiftCode, ShiftDefinition};
use serde::{Deserialize, Serialize};
use time::Date;

/// The fully resolved description of one day of one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDay {
    /// The day being described.
    pub date: Date,
    /// The shift worked, or `None` when no shift applies.
    pub shift_code: Option<ShiftCode>,
    /// The catalog entry for `shift_code`, when the code is known.
    pub shift: Option<ShiftDefinition>,
    /// Regular hours worked.
    pub hours_worked: Hours,
    /// Overtime hours worked.
    pub overtime_hours: Hours,
    /// Rate applied to overtime hours.
    pub overtime_rate: Rate,
    /// Premium (on-call, night) hours.
    pub premium_hours: Hours,
    /// Rate applied to premium hours.
    pub premium_rate: Rate,
    /// Free-text note; empty when none.
    pub note: String,
    /// Whether a per-date override contributed to this day.
    pub overridden: bool,
}

impl ResolvedDay {
    /// Returns true if the day contributes to payroll totals.
    ///
    /// A day with no shift and no recorded hours of any kind is inactive.
    #[must_use]
    pub const fn has_activity(&self) -> bool {
        self.shift_code.is_some()
            || !self.hours_worked.is_zero()
            || !self.overtime_hours.is_zero()
            || !self.premium_hours.is_zero()
    }

    /// Returns worked plus overtime hours.
    #[must_use]
    pub const fn total_hours(&self) -> Hours {
        self.hours_worked.saturating_add(self.overtime_hours)
    }
}

/// Resolves one day of a job.
///
/// Each field takes the override value when present and the default
/// otherwise:
///
/// | Field            | Default                                      |
/// |------------------|----------------------------------------------|
/// | `shift_code`     | rotation shift for the date (inside contract) |
/// | `hours_worked`   | base hours of the resolved shift, else 0     |
/// | `overtime_hours` | 0                                            |
/// | `overtime_rate`  | job overtime default rate                    |
/// | `premium_hours`  | 0                                            |
/// | `premium_rate`   | job premium default rate                     |
/// | `note`           | empty                                        |
///
/// An override that explicitly sets hours to zero yields zero hours; only
/// an absent field falls back to the default.
///
/// # Arguments
///
/// * `date` - The day to resolve
/// * `job` - The job whose contract, rotation and rates apply
/// * `catalog` - The shift definitions
/// * `overrides` - The job's override store
#[must_use]
pub fn resolve_day(
    date: Date,
    job: &Job,
    catalog: &ShiftCatalog,
    overrides: &OverrideStore,
) -> ResolvedDay {
    resolve_with_override(date, job, catalog, overrides.get(date))
}

/// Resolves one day given the override record for that day directly.
///
/// This is [`resolve_day`] without the store lookup, for callers that
/// already hold the record (for instance a day editor previewing a draft).
#[must_use]
pub fn resolve_with_override(
    date: Date,
    job: &Job,
    catalog: &ShiftCatalog,
    record: Option<&DayOverride>,
) -> ResolvedDay {
    let shift_code: Option<ShiftCode> = record
        .and_then(|r| r.shift_code.as_ref())
        .filter(|code| !code.is_empty())
        .or_else(|| rotation_at(date, &job.contract, &job.rotation))
        .filter(|code| !code.is_empty())
        .cloned();

    let shift: Option<ShiftDefinition> = shift_code
        .as_ref()
        .and_then(|code| catalog.get(code))
        .cloned();
    let base_hours: Hours = shift.as_ref().map_or(Hours::ZERO, |s| s.base_hours);

    ResolvedDay {
        date,
        shift_code,
        shift,
        hours_worked: record.and_then(|r| r.hours_worked).unwrap_or(base_hours),
        overtime_hours: record.and_then(|r| r.overtime_hours).unwrap_or(Hours::ZERO),
        overtime_rate: record
            .and_then(|r| r.overtime_rate)
            .unwrap_or(job.pay.overtime_default_rate),
        premium_hours: record.and_then(|r| r.premium_hours).unwrap_or(Hours::ZERO),
        premium_rate: record
            .and_then(|r| r.premium_rate)
            .unwrap_or(job.pay.premium_default_rate),
        note: record.and_then(|r| r.note.clone()).unwrap_or_default(),
        overridden: record.is_some(),
    }
}

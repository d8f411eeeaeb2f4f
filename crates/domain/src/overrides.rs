// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-date overrides of rotation and shift defaults.

use crate::quantity::{Hours, Rate};
use crate::types::ShiftCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// A sparse set of field overrides for one date.
///
/// Every field is independent. `None` means "inherit the default"; any
/// `Some` value, including zero, replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayOverride {
    /// Replaces the rotation-derived shift. An empty code counts as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_code: Option<ShiftCode>,
    /// Replaces the shift's base hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<Hours>,
    /// Overtime hours; zero when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<Hours>,
    /// Replaces the job's default overtime rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime_rate: Option<Rate>,
    /// Premium (on-call, night) hours; zero when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_hours: Option<Hours>,
    /// Replaces the job's default premium rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_rate: Option<Rate>,
    /// Free-text note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayOverride {
    /// Returns an override that only replaces the shift.
    #[must_use]
    pub fn with_shift(code: ShiftCode) -> Self {
        Self {
            shift_code: Some(code),
            ..Self::default()
        }
    }

    /// Returns an override that only replaces the hours worked.
    #[must_use]
    pub fn with_hours_worked(hours: Hours) -> Self {
        Self {
            hours_worked: Some(hours),
            ..Self::default()
        }
    }

    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shift_code.is_none()
            && self.hours_worked.is_none()
            && self.overtime_hours.is_none()
            && self.overtime_rate.is_none()
            && self.premium_hours.is_none()
            && self.premium_rate.is_none()
            && self.note.is_none()
    }
}

/// The sparse per-date override layer of one job.
///
/// Writes replace the whole record for a date and deletes remove the key,
/// so concurrent edits to one date resolve as last-writer-wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideStore {
    days: BTreeMap<Date, DayOverride>,
}

impl OverrideStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Returns the override for `date`, if any.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<&DayOverride> {
        self.days.get(&date)
    }

    /// Stores `record` for `date`, replacing any previous record.
    ///
    /// An empty record is kept as-is; use [`OverrideStore::clear`] to
    /// revert a date to pure rotation defaults.
    pub fn set(&mut self, date: Date, record: DayOverride) -> Option<DayOverride> {
        self.days.insert(date, record)
    }

    /// Removes the override for `date` entirely.
    pub fn clear(&mut self, date: Date) -> Option<DayOverride> {
        self.days.remove(&date)
    }

    /// Iterates overrides in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &DayOverride)> {
        self.days.iter().map(|(date, record)| (*date, record))
    }

    /// Iterates overrides whose date lies within `[start, end]`.
    pub fn between(&self, start: Date, end: Date) -> impl Iterator<Item = (Date, &DayOverride)> {
        self.days
            .range(start..=end)
            .map(|(date, record)| (*date, record))
    }

    /// Returns the number of dates with an override.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if no date has an override.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

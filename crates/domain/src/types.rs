// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::quantity::Hours;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A short code identifying a shift definition (e.g. `morning`, `M`).
///
/// Codes are not validated on construction: rotations and overrides may
/// hold codes that no longer exist in the catalog, and an empty code means
/// "no shift".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShiftCode(String);

impl ShiftCode {
    /// Creates a new shift code, trimming surrounding whitespace.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_string())
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty ("no shift") code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ShiftCode {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<ShiftCode> for String {
    fn from(value: ShiftCode) -> Self {
        value.0
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Identifies a job within a workbook.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    /// Creates a new job identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming.
    pub fn new(id: &str) -> Result<Self, DomainError> {
        let trimmed: &str = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidJobId(String::from(
                "Job id cannot be empty",
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for JobId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<JobId> for String {
    fn from(value: JobId) -> Self {
        value.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// What a shift represents. Descriptive only; pay is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftKind {
    /// A working shift.
    #[default]
    Work,
    /// A rest day.
    Off,
    /// An on-call or night-watch shift, usually paid through premium hours.
    OnCall,
}

impl ShiftKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Off => "off",
            Self::OnCall => "on-call",
        }
    }
}

impl FromStr for ShiftKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "off" => Ok(Self::Off),
            "on-call" | "oncall" => Ok(Self::OnCall),
            _ => Err(DomainError::InvalidShiftCode(format!(
                "Unknown shift kind '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A named shift with its default hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// The unique code of this shift.
    pub code: ShiftCode,
    /// Display label.
    pub label: String,
    /// Display color as a hex string.
    pub color: String,
    /// Hours worked when no override replaces them.
    pub base_hours: Hours,
    /// What the shift represents.
    #[serde(default)]
    pub kind: ShiftKind,
}

impl ShiftDefinition {
    /// Creates a new shift definition.
    ///
    /// # Arguments
    ///
    /// * `code` - The unique shift code
    /// * `label` - The display label
    /// * `color` - The display color (`#rgb` or `#rrggbb`)
    /// * `base_hours` - The default hours for this shift
    /// * `kind` - What the shift represents
    #[must_use]
    pub fn new(
        code: ShiftCode,
        label: &str,
        color: &str,
        base_hours: Hours,
        kind: ShiftKind,
    ) -> Self {
        Self {
            code,
            label: label.trim().to_string(),
            color: color.trim().to_string(),
            base_hours,
            kind,
        }
    }
}

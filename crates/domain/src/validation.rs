// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary validation.
//!
//! The resolver and the payroll fold assume well-formed, non-negative
//! values. Everything typed by a user passes through here first.

use crate::error::DomainError;
use crate::overrides::DayOverride;
use crate::quantity::{Hours, Rate, parse_hundredths};
use crate::types::{ShiftCode, ShiftDefinition};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parses an optional non-negative quantity from a form field.
///
/// A blank field means "absent" and yields `None`; `"0"` is an explicit zero.
///
/// # Errors
///
/// Returns an error if the field is non-blank and not a non-negative decimal.
pub fn parse_optional<T>(field: &'static str, input: &str) -> Result<Option<T>, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if parse_hundredths(trimmed)? < 0 {
        return Err(DomainError::NegativeQuantity {
            field,
            input: input.to_string(),
        });
    }
    trimmed.parse::<T>().map(Some)
}

/// The raw contents of the day editor, as typed.
///
/// Each numeric field is text so that "left blank" and "typed 0" stay
/// distinct until [`DayOverrideDraft::into_override`] turns blanks into
/// absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayOverrideDraft {
    /// Selected shift code; blank keeps the rotation shift.
    pub shift_code: String,
    /// Hours worked; blank uses the shift's base hours.
    pub hours_worked: String,
    /// Overtime hours; blank means none.
    pub overtime_hours: String,
    /// Overtime rate; blank uses the job default.
    pub overtime_rate: String,
    /// Premium hours; blank means none.
    pub premium_hours: String,
    /// Premium rate; blank uses the job default.
    pub premium_rate: String,
    /// Free-text note; blank means none.
    pub note: String,
}

impl DayOverrideDraft {
    /// Validates the draft and converts it into an override record.
    ///
    /// # Errors
    ///
    /// Returns an error if any numeric field is non-blank and either not a
    /// decimal or negative.
    pub fn into_override(self) -> Result<DayOverride, DomainError> {
        let shift_code: ShiftCode = ShiftCode::new(&self.shift_code);
        let note: &str = self.note.trim();

        Ok(DayOverride {
            shift_code: (!shift_code.is_empty()).then_some(shift_code),
            hours_worked: parse_optional::<Hours>("hours worked", &self.hours_worked)?,
            overtime_hours: parse_optional::<Hours>("overtime hours", &self.overtime_hours)?,
            overtime_rate: parse_optional::<Rate>("overtime rate", &self.overtime_rate)?,
            premium_hours: parse_optional::<Hours>("premium hours", &self.premium_hours)?,
            premium_rate: parse_optional::<Rate>("premium rate", &self.premium_rate)?,
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }
}

impl From<&DayOverride> for DayOverrideDraft {
    /// Pre-fills the editor from a stored override.
    fn from(record: &DayOverride) -> Self {
        fn text<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        Self {
            shift_code: text(record.shift_code.as_ref()),
            hours_worked: text(record.hours_worked),
            overtime_hours: text(record.overtime_hours),
            overtime_rate: text(record.overtime_rate),
            premium_hours: text(record.premium_hours),
            premium_rate: text(record.premium_rate),
            note: record.note.clone().unwrap_or_default(),
        }
    }
}

/// Validates that a color is a `#rgb` or `#rrggbb` hex string.
///
/// # Errors
///
/// Returns `DomainError::InvalidColor` otherwise.
pub fn validate_color(color: &str) -> Result<(), DomainError> {
    let valid: bool = color.strip_prefix('#').is_some_and(|hex| {
        (hex.len() == 3 || hex.len() == 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
    });
    if !valid {
        return Err(DomainError::InvalidColor(color.to_string()));
    }
    Ok(())
}

/// Validates a shift definition before it enters the catalog.
///
/// # Errors
///
/// Returns an error if:
/// - The code is empty or contains whitespace or commas
/// - The label is empty
/// - The color is not a hex color
pub fn validate_shift_definition(definition: &ShiftDefinition) -> Result<(), DomainError> {
    let code: &str = definition.code.value();
    if code.is_empty() {
        return Err(DomainError::InvalidShiftCode(String::from(
            "Shift code cannot be empty",
        )));
    }
    // Rotations are entered as comma-separated lists.
    if code.chars().any(|c| c.is_whitespace() || c == ',') {
        return Err(DomainError::InvalidShiftCode(format!(
            "Shift code '{code}' cannot contain whitespace or commas"
        )));
    }

    if definition.label.trim().is_empty() {
        return Err(DomainError::InvalidShiftLabel(String::from(
            "Shift label cannot be empty",
        )));
    }

    validate_color(&definition.color)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_color_accepts_short_and_long_forms() {
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("#22c55e").is_ok());
        assert!(validate_color("#22C55E").is_ok());
    }

    #[test]
    fn test_validate_color_rejects_malformed() {
        for color in ["", "22c55e", "#22c55", "#ggg", "#22c55e00", "red"] {
            assert_eq!(
                validate_color(color),
                Err(DomainError::InvalidColor(color.to_string())),
                "accepted {color:?}"
            );
        }
    }

    #[test]
    fn test_parse_optional_blank_is_none() {
        assert_eq!(parse_optional::<Hours>("hours", "  ").unwrap(), None);
    }

    #[test]
    fn test_parse_optional_names_negative_field() {
        let result: Result<Option<Rate>, DomainError> = parse_optional("overtime rate", "-3");
        assert_eq!(
            result,
            Err(DomainError::NegativeQuantity {
                field: "overtime rate",
                input: String::from("-3"),
            })
        );
    }
}

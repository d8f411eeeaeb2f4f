// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cyclic rotation patterns and default-shift lookup.
//!
//! A rotation is an ordered, non-empty list of shift codes. Day zero of the
//! cycle is the contract start; each later day advances one position and
//! wraps at the end of the list.

use crate::error::DomainError;
use crate::job::Contract;
use crate::types::ShiftCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// One block of a rotation: a shift code repeated a number of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationStep {
    /// The shift worked during this block.
    pub code: ShiftCode,
    /// How many consecutive days the block lasts.
    pub repeat: u16,
}

impl RotationStep {
    /// Creates a new rotation step.
    #[must_use]
    pub const fn new(code: ShiftCode, repeat: u16) -> Self {
        Self { code, repeat }
    }
}

impl FromStr for RotationStep {
    type Err = DomainError;

    /// Parses `CODE:COUNT`, or a bare `CODE` for a single day.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidRotationStep(s.trim().to_string());
        let (code, repeat): (&str, u16) = match s.split_once(':') {
            Some((code, count)) => (code, count.trim().parse().map_err(|_| invalid())?),
            None => (s, 1),
        };
        let code: ShiftCode = ShiftCode::new(code);
        if code.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(code, repeat))
    }
}

/// An ordered, non-empty, cyclic sequence of shift codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ShiftCode>", into = "Vec<ShiftCode>")]
pub struct Rotation {
    codes: Vec<ShiftCode>,
}

impl Rotation {
    /// Creates a rotation from an ordered list of codes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRotation` if `codes` is empty.
    pub fn new(codes: Vec<ShiftCode>) -> Result<Self, DomainError> {
        if codes.is_empty() {
            return Err(DomainError::EmptyRotation);
        }
        Ok(Self { codes })
    }

    /// Expands blocks of repeated shifts into a rotation.
    ///
    /// `[(M, 5), (L, 2)]` yields `M M M M M L L`. Steps with a repeat of
    /// zero contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRotation` if the expansion is empty.
    pub fn from_steps(steps: &[RotationStep]) -> Result<Self, DomainError> {
        let codes: Vec<ShiftCode> = steps
            .iter()
            .flat_map(|step| std::iter::repeat_n(step.code.clone(), usize::from(step.repeat)))
            .collect();
        Self::new(codes)
    }

    /// Parses a comma-separated list of codes (`"M,T,N,L"`).
    ///
    /// Blank entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyRotation` if no codes remain.
    pub fn parse_list(list: &str) -> Result<Self, DomainError> {
        let codes: Vec<ShiftCode> = list
            .split(',')
            .map(ShiftCode::new)
            .filter(|code| !code.is_empty())
            .collect();
        Self::new(codes)
    }

    /// Parses a comma-separated list of steps (`"M:5,L:2"`) and expands it.
    ///
    /// Blank entries are skipped; a step without a count lasts one day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRotationStep` for a malformed step and
    /// `DomainError::EmptyRotation` if the expansion is empty.
    pub fn parse_steps(list: &str) -> Result<Self, DomainError> {
        let steps: Vec<RotationStep> = list
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(RotationStep::from_str)
            .collect::<Result<_, _>>()?;
        Self::from_steps(&steps)
    }

    /// Returns the codes in cycle order.
    #[must_use]
    pub fn codes(&self) -> &[ShiftCode] {
        &self.codes
    }

    /// Returns the cycle length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; a rotation cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the code at a day offset from the anchor, wrapping around.
    #[must_use]
    pub fn code_at_offset(&self, offset: u64) -> Option<&ShiftCode> {
        let len: u64 = u64::try_from(self.codes.len()).ok()?;
        let index: usize = usize::try_from(offset.checked_rem(len)?).ok()?;
        self.codes.get(index)
    }
}

/// The rotation new jobs start with: morning, afternoon, night, off.
impl Default for Rotation {
    fn default() -> Self {
        Self {
            codes: ["morning", "afternoon", "night", "off"]
                .into_iter()
                .map(ShiftCode::new)
                .collect(),
        }
    }
}

impl TryFrom<Vec<ShiftCode>> for Rotation {
    type Error = DomainError;

    fn try_from(value: Vec<ShiftCode>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rotation> for Vec<ShiftCode> {
    fn from(value: Rotation) -> Self {
        value.codes
    }
}

/// Returns the shift the rotation dictates for `date`, if any.
///
/// Returns `None` when the contract has no start date, when `date` precedes
/// the start, or when it follows the end. Otherwise the cycle index is the
/// whole-day distance from the start modulo the rotation length; the
/// lower-bound check guarantees that distance is non-negative.
#[must_use]
pub fn rotation_at<'a>(
    date: Date,
    contract: &Contract,
    rotation: &'a Rotation,
) -> Option<&'a ShiftCode> {
    if !contract.covers(date) {
        return None;
    }
    let start: Date = contract.start()?;
    let offset: u64 = u64::try_from((date - start).whole_days()).ok()?;
    rotation.code_at_offset(offset)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Jobs, their contract window, and their pay terms.

use crate::error::DomainError;
use crate::quantity::{Rate, TaxPercent};
use crate::rotation::Rotation;
use crate::types::JobId;
use serde::{Deserialize, Serialize};
use time::Date;

/// The validity window of a contract.
///
/// Rotation defaults apply only inside `[start, end]`. A contract without a
/// start date has no cycle anchor and never produces a rotation shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContractRecord", into = "ContractRecord")]
pub struct Contract {
    /// The first day of the contract (inclusive), the rotation anchor.
    start: Option<Date>,
    /// The last day of the contract (inclusive), if any.
    end: Option<Date>,
}

impl Contract {
    /// Creates a contract anchored at `start`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidContractRange` if `end` precedes `start`.
    pub fn new(start: Date, end: Option<Date>) -> Result<Self, DomainError> {
        if let Some(end_date) = end
            && end_date < start
        {
            return Err(DomainError::InvalidContractRange {
                start,
                end: end_date,
            });
        }
        Ok(Self {
            start: Some(start),
            end,
        })
    }

    /// Creates a contract with no start date.
    #[must_use]
    pub const fn unanchored() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Returns the start date, if any.
    #[must_use]
    pub const fn start(&self) -> Option<Date> {
        self.start
    }

    /// Returns the end date, if any.
    #[must_use]
    pub const fn end(&self) -> Option<Date> {
        self.end
    }

    /// Returns true if `date` lies within the contract window.
    ///
    /// Always false for an unanchored contract.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        if date < start {
            return false;
        }
        self.end.is_none_or(|end| date <= end)
    }
}

/// Serialized form of a [`Contract`], validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ContractRecord {
    #[serde(default)]
    start: Option<Date>,
    #[serde(default)]
    end: Option<Date>,
}

impl TryFrom<ContractRecord> for Contract {
    type Error = DomainError;

    fn try_from(record: ContractRecord) -> Result<Self, Self::Error> {
        match record.start {
            Some(start) => Self::new(start, record.end),
            None => Ok(Self::unanchored()),
        }
    }
}

impl From<Contract> for ContractRecord {
    fn from(contract: Contract) -> Self {
        Self {
            start: contract.start,
            end: contract.end,
        }
    }
}

/// Rates and deductions used by the payroll fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayTerms {
    /// Pay per regular hour worked.
    pub hourly_rate: Rate,
    /// Flat tax deducted from gross pay. Clamped to `0..=100 %` when applied.
    pub tax_percent: TaxPercent,
    /// Overtime rate used when a day does not override it.
    pub overtime_default_rate: Rate,
    /// Premium (on-call, night) rate used when a day does not override it.
    pub premium_default_rate: Rate,
}

/// A work context: one contract, one rotation, one set of pay terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JobRecord", into = "JobRecord")]
pub struct Job {
    /// Identifier, unique within a workbook.
    pub id: JobId,
    /// Display name.
    pub name: String,
    /// The contract window and rotation anchor.
    pub contract: Contract,
    /// Pay rates and tax.
    pub pay: PayTerms,
    /// The cyclic shift pattern.
    pub rotation: Rotation,
}

impl Job {
    /// Creates a new job.
    ///
    /// # Arguments
    ///
    /// * `id` - The job identifier
    /// * `name` - The display name
    /// * `contract` - The contract window
    /// * `pay` - The pay terms
    /// * `rotation` - The cyclic shift pattern
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidJobName` if the name is blank.
    pub fn new(
        id: JobId,
        name: &str,
        contract: Contract,
        pay: PayTerms,
        rotation: Rotation,
    ) -> Result<Self, DomainError> {
        let trimmed: &str = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidJobName(String::from(
                "Job name cannot be empty",
            )));
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
            contract,
            pay,
            rotation,
        })
    }
}

/// Serialized form of a [`Job`], checked by [`Job::new`] on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JobRecord {
    id: JobId,
    name: String,
    contract: Contract,
    pay: PayTerms,
    #[serde(default)]
    rotation: Rotation,
}

impl TryFrom<JobRecord> for Job {
    type Error = DomainError;

    fn try_from(record: JobRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            &record.name,
            record.contract,
            record.pay,
            record.rotation,
        )
    }
}

impl From<Job> for JobRecord {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            name: job.name,
            contract: job.contract,
            pay: job.pay,
            rotation: job.rotation,
        }
    }
}

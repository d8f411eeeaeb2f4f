// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftbook_domain::{DayOverride, Job, JobId, ShiftCode, ShiftDefinition};
use time::Date;

/// A command represents user intent as data only.
///
/// Commands are the only way to request workbook changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a shift to the catalog, or replace the one with the same code.
    DefineShift {
        /// The shift to store.
        definition: ShiftDefinition,
    },
    /// Remove a shift from the catalog.
    ///
    /// Rotations and overrides that still name the code are left alone and
    /// resolve as zero-hour days.
    RemoveShift {
        /// The code to remove.
        code: ShiftCode,
    },
    /// Add a new job with an empty override store.
    CreateJob {
        /// The job to add.
        job: Job,
    },
    /// Replace an existing job's record, keeping its overrides.
    UpdateJob {
        /// The new record. Its id selects the job to replace.
        job: Job,
    },
    /// Remove a job together with its overrides.
    RemoveJob {
        /// The job to remove.
        job_id: JobId,
    },
    /// Store the override for one day, replacing any previous record.
    SetOverride {
        /// The job the day belongs to.
        job_id: JobId,
        /// The day being edited.
        date: Date,
        /// The new override record.
        record: DayOverride,
    },
    /// Remove the override for one day, reverting it to rotation defaults.
    ClearOverride {
        /// The job the day belongs to.
        job_id: JobId,
        /// The day to revert.
        date: Date,
    },
}

impl Command {
    /// Returns the command's name as recorded in actions and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DefineShift { .. } => "DefineShift",
            Self::RemoveShift { .. } => "RemoveShift",
            Self::CreateJob { .. } => "CreateJob",
            Self::UpdateJob { .. } => "UpdateJob",
            Self::RemoveJob { .. } => "RemoveJob",
            Self::SetOverride { .. } => "SetOverride",
            Self::ClearOverride { .. } => "ClearOverride",
        }
    }

    /// Returns the job the command targets, if it is job-scoped.
    #[must_use]
    pub const fn job_id(&self) -> Option<&JobId> {
        match self {
            Self::DefineShift { .. } | Self::RemoveShift { .. } => None,
            Self::CreateJob { job } | Self::UpdateJob { job } => Some(&job.id),
            Self::RemoveJob { job_id }
            | Self::SetOverride { job_id, .. }
            | Self::ClearOverride { job_id, .. } => Some(job_id),
        }
    }

    /// Returns the day the command edits, if any.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        match self {
            Self::SetOverride { date, .. } | Self::ClearOverride { date, .. } => Some(*date),
            _ => None,
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftbook_domain::{DomainError, JobId, ShiftCode};

/// Errors that can occur during workbook transitions and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// No job with this id exists in the workbook.
    #[error("Job '{0}' not found")]
    JobNotFound(JobId),
    /// A job with this id already exists.
    #[error("Job '{0}' already exists")]
    DuplicateJob(JobId),
    /// No shift with this code exists in the catalog.
    #[error("Shift '{0}' not found")]
    ShiftNotFound(ShiftCode),
}

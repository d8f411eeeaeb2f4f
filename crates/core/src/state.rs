// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use shiftbook_domain::{
    CalendarMonth, DateRange, Job, JobId, MonthTotals, OverrideStore, PayrollTotals,
    ResolvedDay, ShiftCatalog, month_plan, month_totals, range_totals, resolve_day,
};
use std::collections::BTreeMap;
use time::Date;

/// Store returned for a job that has never had an override.
static EMPTY_OVERRIDES: OverrideStore = OverrideStore::new();

/// Everything one user tracks: the shift catalog, the jobs, and one
/// override store per job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    /// The shift definitions shared by every job.
    pub catalog: ShiftCatalog,
    /// All jobs, keyed by id.
    jobs: BTreeMap<JobId, Job>,
    /// Per-job override stores, keyed by job id.
    #[serde(default)]
    overrides: BTreeMap<JobId, OverrideStore>,
}

impl Workbook {
    /// Creates an empty workbook with the standard shift catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(ShiftCatalog::standard())
    }

    /// Creates an empty workbook with the given catalog.
    #[must_use]
    pub const fn with_catalog(catalog: ShiftCatalog) -> Self {
        Self {
            catalog,
            jobs: BTreeMap::new(),
            overrides: BTreeMap::new(),
        }
    }

    /// Checks if a job exists.
    #[must_use]
    pub fn has_job(&self, job_id: &JobId) -> bool {
        self.jobs.contains_key(job_id)
    }

    /// Iterates jobs in id order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    /// Returns a job by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::JobNotFound` if no such job exists.
    pub fn job(&self, job_id: &JobId) -> Result<&Job, CoreError> {
        self.jobs
            .get(job_id)
            .ok_or_else(|| CoreError::JobNotFound(job_id.clone()))
    }

    /// Returns a job's override store.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::JobNotFound` if no such job exists.
    pub fn overrides_for(&self, job_id: &JobId) -> Result<&OverrideStore, CoreError> {
        self.job(job_id)?;
        Ok(self.overrides.get(job_id).unwrap_or(&EMPTY_OVERRIDES))
    }

    /// Resolves one day of a job.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::JobNotFound` if no such job exists.
    pub fn resolve_day(&self, job_id: &JobId, date: Date) -> Result<ResolvedDay, CoreError> {
        let job: &Job = self.job(job_id)?;
        Ok(resolve_day(date, job, &self.catalog, self.overrides_for(job_id)?))
    }

    /// Computes a job's payroll totals for a calendar month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::JobNotFound` if no such job exists.
    pub fn month_totals(
        &self,
        job_id: &JobId,
        month: &CalendarMonth,
    ) -> Result<MonthTotals, CoreError> {
        let job: &Job = self.job(job_id)?;
        Ok(month_totals(
            month,
            job,
            &self.catalog,
            self.overrides_for(job_id)?,
        ))
    }

    /// Computes a job's payroll totals over a closed date range.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::JobNotFound` if no such job exists.
    pub fn range_totals(
        &self,
        job_id: &JobId,
        range: &DateRange,
    ) -> Result<PayrollTotals, CoreError> {
        let job: &Job = self.job(job_id)?;
        Ok(range_totals(
            range,
            job,
            &self.catalog,
            self.overrides_for(job_id)?,
        ))
    }

    /// Resolves every day of a month for a job.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::JobNotFound` if no such job exists.
    pub fn month_plan(
        &self,
        job_id: &JobId,
        month: &CalendarMonth,
    ) -> Result<Vec<ResolvedDay>, CoreError> {
        let job: &Job = self.job(job_id)?;
        Ok(month_plan(
            month,
            job,
            &self.catalog,
            self.overrides_for(job_id)?,
        ))
    }

    pub(crate) fn insert_job(&mut self, job: Job) {
        self.overrides.entry(job.id.clone()).or_default();
        self.jobs.insert(job.id.clone(), job);
    }

    pub(crate) fn remove_job(&mut self, job_id: &JobId) -> Option<Job> {
        self.overrides.remove(job_id);
        self.jobs.remove(job_id)
    }

    pub(crate) fn overrides_mut(&mut self, job_id: &JobId) -> &mut OverrideStore {
        self.overrides.entry(job_id.clone()).or_default()
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// A description of what a transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The command name (e.g., "`SetOverride`").
    pub name: String,
    /// Optional human-readable details.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The result of a successful workbook transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new workbook after the transition.
    pub new_workbook: Workbook,
    /// What the transition did.
    pub action: Action,
}

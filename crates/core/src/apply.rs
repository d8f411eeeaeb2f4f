// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Action, TransitionResult, Workbook};
use shiftbook_domain::{DayOverride, validate_shift_definition};
use tracing::{debug, warn};

/// Applies a command to the workbook, producing a new workbook and an action.
///
/// The input workbook is never modified, so a rejected command leaves no
/// partial state behind.
///
/// # Arguments
///
/// * `workbook` - The current workbook (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new workbook and action
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A shift definition fails validation
/// - `RemoveShift` names a code not in the catalog
/// - `CreateJob` reuses an existing job id
/// - Any other job-scoped command names an unknown job
pub fn apply(workbook: &Workbook, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let job_id: Option<String> = command.job_id().map(ToString::to_string);
    let date: Option<String> = command.date().as_ref().map(ToString::to_string);

    match apply_command(workbook, command) {
        Ok(transition) => {
            debug!(
                command = name,
                job_id = job_id.as_deref(),
                date = date.as_deref(),
                details = transition.action.details.as_deref(),
                "Applied command"
            );
            Ok(transition)
        }
        Err(err) => {
            warn!(
                command = name,
                job_id = job_id.as_deref(),
                date = date.as_deref(),
                error = %err,
                "Rejected command"
            );
            Err(err)
        }
    }
}

fn apply_command(workbook: &Workbook, command: Command) -> Result<TransitionResult, CoreError> {
    let name: String = command.name().to_string();
    let mut new_workbook: Workbook = workbook.clone();

    let details: String = match command {
        Command::DefineShift { definition } => {
            validate_shift_definition(&definition)?;
            let code: String = definition.code.to_string();
            match new_workbook.catalog.upsert(definition) {
                Some(_) => format!("Replaced shift '{code}'"),
                None => format!("Defined shift '{code}'"),
            }
        }
        Command::RemoveShift { code } => {
            if new_workbook.catalog.remove(&code).is_none() {
                return Err(CoreError::ShiftNotFound(code));
            }
            format!("Removed shift '{code}'")
        }
        Command::CreateJob { job } => {
            if new_workbook.has_job(&job.id) {
                return Err(CoreError::DuplicateJob(job.id));
            }
            let details: String = format!("Created job '{}' ({})", job.id, job.name);
            new_workbook.insert_job(job);
            details
        }
        Command::UpdateJob { job } => {
            new_workbook.job(&job.id)?;
            let details: String = format!("Updated job '{}'", job.id);
            new_workbook.insert_job(job);
            details
        }
        Command::RemoveJob { job_id } => {
            let dropped: usize = new_workbook.overrides_for(&job_id)?.len();
            new_workbook.remove_job(&job_id);
            format!("Removed job '{job_id}' and {dropped} override(s)")
        }
        Command::SetOverride {
            job_id,
            date,
            record,
        } => {
            new_workbook.job(&job_id)?;
            let previous: Option<DayOverride> =
                new_workbook.overrides_mut(&job_id).set(date, record);
            match previous {
                Some(_) => format!("Replaced override for '{job_id}' on {date}"),
                None => format!("Set override for '{job_id}' on {date}"),
            }
        }
        Command::ClearOverride { job_id, date } => {
            new_workbook.job(&job_id)?;
            match new_workbook.overrides_mut(&job_id).clear(date) {
                Some(_) => format!("Cleared override for '{job_id}' on {date}"),
                None => format!("No override for '{job_id}' on {date}"),
            }
        }
    };

    Ok(TransitionResult {
        new_workbook,
        action: Action::new(name, Some(details)),
    })
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommand dispatch.
//!
//! Queries load the workbook and print; mutations go through
//! [`shiftbook::apply`] and save the resulting workbook.

use crate::args::{
    AddJobArgs, Args, CliCommand, DefineShiftArgs, SetOverrideArgs, UpdateJobArgs,
};
use crate::{report, store};
use color_eyre::eyre::{Context, Result};
use shiftbook::{Command, TransitionResult, Workbook, apply};
use shiftbook_domain::{
    CalendarMonth, Contract, DateRange, DayOverride, DayOverrideDraft, Job, JobId, MonthTotals,
    PayTerms, PayrollTotals, ResolvedDay, Rotation, ShiftCode, ShiftDefinition,
};
use std::path::Path;
use time::Date;
use tracing::warn;

/// Runs the parsed command line.
///
/// # Errors
///
/// Returns an error if the workbook cannot be loaded or saved, or if the
/// command is rejected.
pub fn run(args: Args) -> Result<()> {
    let path: &Path = &args.workbook;

    match args.command {
        CliCommand::Init { force } => {
            store::create(path, force)?;
            println!("Created workbook {}", path.display());
            Ok(())
        }
        CliCommand::AddJob(add) => {
            let workbook: Workbook = store::load(path)?;
            let job: Job = build_job(add)?;
            warn_unknown_codes(&workbook, job.rotation.codes());
            mutate(path, &workbook, Command::CreateJob { job })
        }
        CliCommand::UpdateJob(update) => {
            let workbook: Workbook = store::load(path)?;
            let job: Job = build_updated_job(workbook.job(&update.job)?, update)?;
            warn_unknown_codes(&workbook, job.rotation.codes());
            mutate(path, &workbook, Command::UpdateJob { job })
        }
        CliCommand::RemoveJob { job } => {
            let workbook: Workbook = store::load(path)?;
            mutate(path, &workbook, Command::RemoveJob { job_id: job })
        }
        CliCommand::DefineShift(define) => {
            let workbook: Workbook = store::load(path)?;
            mutate(
                path,
                &workbook,
                Command::DefineShift {
                    definition: build_shift(&define),
                },
            )
        }
        CliCommand::RemoveShift { code } => {
            let workbook: Workbook = store::load(path)?;
            mutate(
                path,
                &workbook,
                Command::RemoveShift {
                    code: ShiftCode::new(&code),
                },
            )
        }
        CliCommand::Shifts => {
            let workbook: Workbook = store::load(path)?;
            for shift in workbook.catalog.iter() {
                println!("{}", report::render_shift(shift));
            }
            Ok(())
        }
        CliCommand::Jobs => {
            let workbook: Workbook = store::load(path)?;
            println!("{}", report::render_jobs(&workbook));
            Ok(())
        }
        CliCommand::Day { job, date } => {
            let workbook: Workbook = store::load(path)?;
            let day: ResolvedDay = workbook.resolve_day(&job, date)?;
            println!("{}", report::render_day(&day));
            Ok(())
        }
        CliCommand::Month {
            job,
            year,
            month,
            days,
        } => {
            let workbook: Workbook = store::load(path)?;
            show_month(&workbook, &job, year, month, days)
        }
        CliCommand::Range {
            job,
            from,
            to,
            days,
        } => {
            let workbook: Workbook = store::load(path)?;
            show_range(&workbook, &job, from, to, days)
        }
        CliCommand::Overrides { job, from, to } => {
            let workbook: Workbook = store::load(path)?;
            show_overrides(&workbook, &job, from, to)
        }
        CliCommand::SetOverride(set) => {
            let workbook: Workbook = store::load(path)?;
            let command: Command = build_set_override(&workbook, &set)?;
            mutate(path, &workbook, command)
        }
        CliCommand::ClearOverride { job, date } => {
            let workbook: Workbook = store::load(path)?;
            mutate(path, &workbook, Command::ClearOverride { job_id: job, date })
        }
    }
}

/// Applies `command`, saves the new workbook and prints what happened.
fn mutate(path: &Path, workbook: &Workbook, command: Command) -> Result<()> {
    let name: &'static str = command.name();
    let transition: TransitionResult =
        apply(workbook, command).wrap_err_with(|| format!("{name} rejected"))?;
    store::save(path, &transition.new_workbook)?;
    println!(
        "{}",
        transition
            .action
            .details
            .unwrap_or(transition.action.name)
    );
    Ok(())
}

/// Builds a new job. Overtime is paid at the hourly rate unless a
/// default overtime rate is given.
fn build_job(add: AddJobArgs) -> Result<Job> {
    let contract: Contract = Contract::new(add.start, add.end)?;
    let pay: PayTerms = PayTerms {
        hourly_rate: add.hourly_rate,
        tax_percent: add.tax_percent,
        overtime_default_rate: add.overtime_rate.unwrap_or(add.hourly_rate),
        premium_default_rate: add.premium_rate,
    };
    let job: Job = Job::new(
        add.id,
        &add.name,
        contract,
        pay,
        add.pattern.into_rotation().unwrap_or_default(),
    )?;
    Ok(job)
}

/// Applies the given fields on top of `current`.
fn build_updated_job(current: &Job, update: UpdateJobArgs) -> Result<Job> {
    let end: Option<Date> = if update.open_ended {
        None
    } else {
        update.end.or_else(|| current.contract.end())
    };
    let contract: Contract = match update.start.or_else(|| current.contract.start()) {
        Some(start) => Contract::new(start, end)?,
        None => Contract::unanchored(),
    };
    let pay: PayTerms = PayTerms {
        hourly_rate: update.hourly_rate.unwrap_or(current.pay.hourly_rate),
        tax_percent: update.tax_percent.unwrap_or(current.pay.tax_percent),
        overtime_default_rate: update
            .overtime_rate
            .unwrap_or(current.pay.overtime_default_rate),
        premium_default_rate: update
            .premium_rate
            .unwrap_or(current.pay.premium_default_rate),
    };
    let rotation: Rotation = update
        .pattern
        .into_rotation()
        .unwrap_or_else(|| current.rotation.clone());
    let job: Job = Job::new(
        current.id.clone(),
        update.name.as_deref().unwrap_or(&current.name),
        contract,
        pay,
        rotation,
    )?;
    Ok(job)
}

fn build_shift(define: &DefineShiftArgs) -> ShiftDefinition {
    ShiftDefinition::new(
        ShiftCode::new(&define.code),
        &define.label,
        &define.color,
        define.hours,
        define.kind,
    )
}

fn build_set_override(workbook: &Workbook, set: &SetOverrideArgs) -> Result<Command> {
    let record: DayOverride = set
        .draft()
        .into_override()
        .wrap_err_with(|| format!("Invalid override for {}", set.date))?;
    if let Some(code) = &record.shift_code {
        warn_unknown_codes(workbook, std::slice::from_ref(code));
    }
    Ok(Command::SetOverride {
        job_id: set.job.clone(),
        date: set.date,
        record,
    })
}

fn show_month(workbook: &Workbook, job_id: &JobId, year: i32, month: u8, days: bool) -> Result<()> {
    let month: CalendarMonth = CalendarMonth::new(year, month)?;
    let job: &Job = workbook.job(job_id)?;
    let totals: MonthTotals = workbook.month_totals(job_id, &month)?;

    if days {
        for day in workbook.month_plan(job_id, &month)? {
            println!("{}", report::render_plan_row(&day));
        }
        println!();
    }
    println!("{}", report::render_totals(job, &month, &totals));
    Ok(())
}

fn show_range(workbook: &Workbook, job_id: &JobId, from: Date, to: Date, days: bool) -> Result<()> {
    let range: DateRange = DateRange::new(from, to)?;
    let job: &Job = workbook.job(job_id)?;
    let totals: PayrollTotals = workbook.range_totals(job_id, &range)?;

    if days {
        for date in range.days() {
            let day: ResolvedDay = workbook.resolve_day(job_id, date)?;
            println!("{}", report::render_plan_row(&day));
        }
        println!();
    }
    let period: String = format!("{from} .. {to}");
    println!("{}", report::render_totals(job, &period, &totals));
    Ok(())
}

fn show_overrides(
    workbook: &Workbook,
    job_id: &JobId,
    from: Option<Date>,
    to: Option<Date>,
) -> Result<()> {
    let range: DateRange = DateRange::new(from.unwrap_or(Date::MIN), to.unwrap_or(Date::MAX))?;

    for (date, record) in workbook
        .overrides_for(job_id)?
        .between(range.start(), range.end())
    {
        let draft: DayOverrideDraft = DayOverrideDraft::from(record);
        println!("{}", report::render_override(date, &draft));
    }
    Ok(())
}

/// Logs a warning for codes the catalog does not define.
///
/// Such codes are accepted and resolve as zero-hour days.
fn warn_unknown_codes(workbook: &Workbook, codes: &[ShiftCode]) {
    for code in codes {
        if !workbook.catalog.contains(code) {
            warn!(code = %code, "Shift code is not in the catalog; it will count as zero hours");
        }
    }
}

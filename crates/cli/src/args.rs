// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use shiftbook_domain::{
    DayOverrideDraft, Hours, JobId, Rate, Rotation, ShiftKind, TaxPercent, parse_date,
};
use std::path::PathBuf;
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Shiftbook - shift rotation calendar and payroll estimates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON workbook file
    #[arg(
        short,
        long,
        global = true,
        env = "SHIFTBOOK_WORKBOOK",
        default_value = "shiftbook.json"
    )]
    pub workbook: PathBuf,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

impl Args {
    /// Returns the log level selected by `-v` / `-q`.
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Create a new workbook with the standard shift catalog
    Init {
        /// Overwrite an existing workbook
        #[arg(long)]
        force: bool,
    },

    /// Add a job with its contract, pay terms and rotation
    AddJob(AddJobArgs),

    /// Change a job's details, keeping its day overrides
    UpdateJob(UpdateJobArgs),

    /// Remove a job and all of its day overrides
    RemoveJob {
        /// The job id
        #[arg(long, value_parser = JobId::new)]
        job: JobId,
    },

    /// Add or replace a shift in the catalog
    DefineShift(DefineShiftArgs),

    /// Remove a shift from the catalog
    ///
    /// Rotations and overrides that still name it count those days as
    /// zero hours.
    RemoveShift {
        /// The shift code
        #[arg(long)]
        code: String,
    },

    /// List the shift catalog
    Shifts,

    /// List the jobs in the workbook
    Jobs,

    /// Show the resolved schedule and pay inputs for one day
    Day {
        /// The job id
        #[arg(long, value_parser = JobId::new)]
        job: JobId,

        /// The day, as YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        date: Date,
    },

    /// Show payroll totals for a calendar month
    Month {
        /// The job id
        #[arg(long, value_parser = JobId::new)]
        job: JobId,

        /// The calendar year
        #[arg(long)]
        year: i32,

        /// The month number, 1 through 12
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,

        /// Also list every resolved day of the month
        #[arg(long)]
        days: bool,
    },

    /// Show payroll totals for any closed range of days
    Range {
        /// The job id
        #[arg(long, value_parser = JobId::new)]
        job: JobId,

        /// First day of the range, as YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        from: Date,

        /// Last day of the range (inclusive), as YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        to: Date,

        /// Also list every resolved day of the range
        #[arg(long)]
        days: bool,
    },

    /// List the recorded day overrides of a job
    Overrides {
        /// The job id
        #[arg(long, value_parser = JobId::new)]
        job: JobId,

        /// Only overrides on or after this day
        #[arg(long, value_parser = parse_date)]
        from: Option<Date>,

        /// Only overrides on or before this day
        #[arg(long, value_parser = parse_date)]
        to: Option<Date>,
    },

    /// Record an override for one day, replacing any previous one
    SetOverride(SetOverrideArgs),

    /// Remove the override for one day
    ClearOverride {
        /// The job id
        #[arg(long, value_parser = JobId::new)]
        job: JobId,

        /// The day, as YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        date: Date,
    },
}

#[derive(Debug, ClapArgs)]
pub struct AddJobArgs {
    /// Unique job id
    #[arg(long, value_parser = JobId::new)]
    pub id: JobId,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// First day of the contract, the rotation anchor
    #[arg(long, value_parser = parse_date)]
    pub start: Date,

    /// Last day of the contract, inclusive
    #[arg(long, value_parser = parse_date)]
    pub end: Option<Date>,

    /// Pay per regular hour
    #[arg(long)]
    pub hourly_rate: Rate,

    /// Flat tax percentage deducted from gross pay
    #[arg(long, allow_negative_numbers = true)]
    pub tax_percent: TaxPercent,

    /// Default overtime rate per hour; the hourly rate when omitted
    #[arg(long)]
    pub overtime_rate: Option<Rate>,

    /// Default premium (on-call, night) rate per hour
    #[arg(long, default_value = "0")]
    pub premium_rate: Rate,

    #[command(flatten)]
    pub pattern: RotationArgs,
}

/// The two ways of entering a rotation. At most one may be given.
#[derive(Debug, ClapArgs)]
#[group(multiple = false)]
pub struct RotationArgs {
    /// Comma-separated shift codes, e.g. "M,T,N,L"
    #[arg(long, value_parser = Rotation::parse_list)]
    pub rotation: Option<Rotation>,

    /// Blocks of repeated shifts, e.g. "M:5,L:2" for five M days then two L days
    #[arg(long, value_parser = Rotation::parse_steps)]
    pub steps: Option<Rotation>,
}

impl RotationArgs {
    /// Returns the rotation entered either way, if any.
    pub fn into_rotation(self) -> Option<Rotation> {
        self.rotation.or(self.steps)
    }
}

/// Fields to change on an existing job. Omitted fields keep their values.
#[derive(Debug, ClapArgs)]
pub struct UpdateJobArgs {
    /// The job id
    #[arg(long, value_parser = JobId::new)]
    pub job: JobId,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New first day of the contract
    #[arg(long, value_parser = parse_date)]
    pub start: Option<Date>,

    /// New last day of the contract, inclusive
    #[arg(long, value_parser = parse_date, conflicts_with = "open_ended")]
    pub end: Option<Date>,

    /// Remove the contract end date
    #[arg(long)]
    pub open_ended: bool,

    /// New pay per regular hour
    #[arg(long)]
    pub hourly_rate: Option<Rate>,

    /// New flat tax percentage
    #[arg(long, allow_negative_numbers = true)]
    pub tax_percent: Option<TaxPercent>,

    /// New default overtime rate per hour
    #[arg(long)]
    pub overtime_rate: Option<Rate>,

    /// New default premium rate per hour
    #[arg(long)]
    pub premium_rate: Option<Rate>,

    #[command(flatten)]
    pub pattern: RotationArgs,
}

#[derive(Debug, ClapArgs)]
pub struct DefineShiftArgs {
    /// Short shift code used in rotations
    #[arg(long)]
    pub code: String,

    /// Display label
    #[arg(long)]
    pub label: String,

    /// Display color, #rgb or #rrggbb
    #[arg(long, default_value = "#94a3b8")]
    pub color: String,

    /// Default hours for the shift
    #[arg(long)]
    pub hours: Hours,

    /// What the shift represents: work, off or on-call
    #[arg(long, default_value = "work")]
    pub kind: ShiftKind,
}

/// Day editor fields. Omitted fields keep their defaults.
#[derive(Debug, ClapArgs)]
pub struct SetOverrideArgs {
    /// The job id
    #[arg(long, value_parser = JobId::new)]
    pub job: JobId,

    /// The day, as YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub date: Date,

    /// Shift code replacing the rotation shift
    #[arg(long)]
    pub shift: Option<String>,

    /// Hours worked, replacing the shift's base hours
    #[arg(long, allow_hyphen_values = true)]
    pub hours: Option<String>,

    /// Overtime hours
    #[arg(long, allow_hyphen_values = true)]
    pub overtime_hours: Option<String>,

    /// Overtime rate, replacing the job default
    #[arg(long, allow_hyphen_values = true)]
    pub overtime_rate: Option<String>,

    /// Premium hours
    #[arg(long, allow_hyphen_values = true)]
    pub premium_hours: Option<String>,

    /// Premium rate, replacing the job default
    #[arg(long, allow_hyphen_values = true)]
    pub premium_rate: Option<String>,

    /// Free-text note
    #[arg(long)]
    pub note: Option<String>,
}

impl SetOverrideArgs {
    /// Collects the editor fields into a draft; omitted fields stay blank.
    pub fn draft(&self) -> DayOverrideDraft {
        fn field(value: Option<&String>) -> String {
            value.cloned().unwrap_or_default()
        }

        DayOverrideDraft {
            shift_code: field(self.shift.as_ref()),
            hours_worked: field(self.hours.as_ref()),
            overtime_hours: field(self.overtime_hours.as_ref()),
            overtime_rate: field(self.overtime_rate.as_ref()),
            premium_hours: field(self.premium_hours.as_ref()),
            premium_rate: field(self.premium_rate.as_ref()),
            note: field(self.note.as_ref()),
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Workbook, apply};
use shiftbook_domain::{
    Contract, DayOverride, Hours, Job, JobId, PayTerms, Rate, Rotation, ShiftCode, TaxPercent,
};
use time::Date;
use time::macros::date;

pub fn create_test_job_id() -> JobId {
    JobId::new("plant").unwrap()
}

/// Job on the standard catalog, rotating morning, afternoon, night, off
/// from 2024-01-01, paid 10/h with 20 % tax and 15/h overtime.
pub fn create_test_job() -> Job {
    Job::new(
        create_test_job_id(),
        "Plant",
        Contract::new(date!(2024 - 01 - 01), None).unwrap(),
        PayTerms {
            hourly_rate: Rate::whole(10),
            tax_percent: TaxPercent::whole(20),
            overtime_default_rate: Rate::whole(15),
            premium_default_rate: Rate::whole(5),
        },
        Rotation::default(),
    )
    .unwrap()
}

pub fn create_test_workbook() -> Workbook {
    apply(
        &Workbook::new(),
        Command::CreateJob {
            job: create_test_job(),
        },
    )
    .unwrap()
    .new_workbook
}

pub fn create_workbook_with_override(date: Date, record: DayOverride) -> Workbook {
    apply(
        &create_test_workbook(),
        Command::SetOverride {
            job_id: create_test_job_id(),
            date,
            record,
        },
    )
    .unwrap()
    .new_workbook
}

pub fn create_overtime_override() -> DayOverride {
    DayOverride {
        shift_code: Some(ShiftCode::new("morning")),
        overtime_hours: Some(Hours::whole(2)),
        ..DayOverride::default()
    }
}

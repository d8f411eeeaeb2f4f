// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Contract, Hours, Job, JobId, PayTerms, Rate, Rotation, ShiftCatalog, ShiftCode,
    ShiftDefinition, ShiftKind, TaxPercent,
};
use time::Date;
use time::macros::date;

/// Catalog with `M`, `T`, `N` at 8 h and `L` at 0 h.
pub fn create_test_catalog() -> ShiftCatalog {
    [
        ("M", "Morning", 8, ShiftKind::Work),
        ("T", "Afternoon", 8, ShiftKind::Work),
        ("N", "Night", 8, ShiftKind::Work),
        ("L", "Off", 0, ShiftKind::Off),
    ]
    .into_iter()
    .map(|(code, label, hours, kind)| {
        ShiftDefinition::new(ShiftCode::new(code), label, "#22c55e", Hours::whole(hours), kind)
    })
    .collect()
}

pub fn create_test_pay_terms() -> PayTerms {
    PayTerms {
        hourly_rate: Rate::whole(10),
        tax_percent: TaxPercent::whole(20),
        overtime_default_rate: Rate::whole(15),
        premium_default_rate: Rate::whole(5),
    }
}

/// Job with rotation `M,T,N,L` anchored at 2024-01-01, open ended.
pub fn create_test_job() -> Job {
    create_test_job_with(
        Contract::new(date!(2024 - 01 - 01), None).unwrap(),
        create_test_pay_terms(),
    )
}

pub fn create_test_job_with(contract: Contract, pay: PayTerms) -> Job {
    Job::new(
        JobId::new("plant").unwrap(),
        "Plant",
        contract,
        pay,
        Rotation::parse_list("M,T,N,L").unwrap(),
    )
    .unwrap()
}

/// Job whose rotation is all rest days, so only overrides contribute.
pub fn create_idle_job(start: Date, pay: PayTerms) -> Job {
    Job::new(
        JobId::new("idle").unwrap(),
        "Idle",
        Contract::new(start, None).unwrap(),
        pay,
        Rotation::parse_list("L").unwrap(),
    )
    .unwrap()
}

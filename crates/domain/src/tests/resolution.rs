// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_catalog, create_test_job};
use crate::{
    Contract, DayOverride, Hours, Job, OverrideStore, ResolvedDay, Rotation, RotationStep,
    ShiftCatalog, ShiftCode, resolve_day, rotation_at,
};
use time::Date;
use time::macros::date;

#[test]
fn test_resolution_is_deterministic() {
    let job: Job = create_test_job();
    let catalog: ShiftCatalog = create_test_catalog();
    let mut overrides: OverrideStore = OverrideStore::new();
    overrides.set(
        date!(2024 - 03 - 10),
        DayOverride::with_hours_worked(Hours::whole(5)),
    );

    for day in [date!(2024 - 03 - 10), date!(2024 - 03 - 11)] {
        let first: ResolvedDay = resolve_day(day, &job, &catalog, &overrides);
        let second: ResolvedDay = resolve_day(day, &job, &catalog, &overrides);
        assert_eq!(first, second);
    }
}

#[test]
fn test_rotation_cycles_from_contract_start() {
    let job: Job = create_test_job();
    let catalog: ShiftCatalog = create_test_catalog();
    let overrides: OverrideStore = OverrideStore::new();

    let expected: [(Date, &str); 5] = [
        (date!(2024 - 01 - 01), "M"),
        (date!(2024 - 01 - 02), "T"),
        (date!(2024 - 01 - 03), "N"),
        (date!(2024 - 01 - 04), "L"),
        (date!(2024 - 01 - 05), "M"),
    ];
    for (day, code) in expected {
        let resolved: ResolvedDay = resolve_day(day, &job, &catalog, &overrides);
        assert_eq!(resolved.shift_code, Some(ShiftCode::new(code)), "on {day}");
    }
}

#[test]
fn test_day_before_contract_has_no_shift() {
    let resolved: ResolvedDay = resolve_day(
        date!(2023 - 12 - 31),
        &create_test_job(),
        &create_test_catalog(),
        &OverrideStore::new(),
    );
    assert_eq!(resolved.shift_code, None);
    assert!(resolved.shift.is_none());
    assert_eq!(resolved.hours_worked, Hours::ZERO);
    assert!(!resolved.has_activity());
}

#[test]
fn test_hours_override_keeps_rotation_shift() {
    let mut overrides: OverrideStore = OverrideStore::new();
    overrides.set(
        date!(2024 - 01 - 01),
        DayOverride::with_hours_worked(Hours::whole(5)),
    );
    let resolved: ResolvedDay = resolve_day(
        date!(2024 - 01 - 01),
        &create_test_job(),
        &create_test_catalog(),
        &overrides,
    );
    assert_eq!(resolved.shift_code, Some(ShiftCode::new("M")));
    assert_eq!(resolved.hours_worked, Hours::whole(5));
    assert!(resolved.overridden);
}

#[test]
fn test_explicit_zero_differs_from_absent() {
    let job: Job = create_test_job();
    let catalog: ShiftCatalog = create_test_catalog();

    let mut zeroed: OverrideStore = OverrideStore::new();
    zeroed.set(date!(2024 - 01 - 01), DayOverride::with_hours_worked(Hours::ZERO));
    let resolved: ResolvedDay = resolve_day(date!(2024 - 01 - 01), &job, &catalog, &zeroed);
    assert_eq!(resolved.hours_worked, Hours::ZERO);

    let mut absent: OverrideStore = OverrideStore::new();
    absent.set(date!(2024 - 01 - 01), DayOverride::default());
    let resolved: ResolvedDay = resolve_day(date!(2024 - 01 - 01), &job, &catalog, &absent);
    assert_eq!(resolved.hours_worked, Hours::whole(8));
}

#[test]
fn test_clearing_override_restores_defaults() {
    let job: Job = create_test_job();
    let catalog: ShiftCatalog = create_test_catalog();
    let pristine: ResolvedDay =
        resolve_day(date!(2024 - 01 - 02), &job, &catalog, &OverrideStore::new());

    let mut overrides: OverrideStore = OverrideStore::new();
    overrides.set(date!(2024 - 01 - 02), DayOverride::with_shift(ShiftCode::new("L")));
    overrides.clear(date!(2024 - 01 - 02));

    assert_eq!(
        resolve_day(date!(2024 - 01 - 02), &job, &catalog, &overrides),
        pristine
    );
}

#[test]
fn test_rotation_from_steps_matches_expanded_list() {
    let steps: Vec<RotationStep> = vec![
        RotationStep::new(ShiftCode::new("M"), 2),
        RotationStep::new(ShiftCode::new("L"), 1),
    ];
    let from_steps: Rotation = Rotation::from_steps(&steps).unwrap();
    assert_eq!(from_steps, Rotation::parse_list("M,M,L").unwrap());

    let contract: Contract = Contract::new(date!(2024 - 01 - 01), None).unwrap();
    assert_eq!(
        rotation_at(date!(2024 - 01 - 04), &contract, &from_steps),
        Some(&ShiftCode::new("M"))
    );
    assert_eq!(
        rotation_at(date!(2024 - 01 - 06), &contract, &from_steps),
        Some(&ShiftCode::new("L"))
    );
}

#[test]
fn test_unanchored_contract_only_resolves_overrides() {
    let mut job: Job = create_test_job();
    job.contract = Contract::unanchored();
    let catalog: ShiftCatalog = create_test_catalog();

    let mut overrides: OverrideStore = OverrideStore::new();
    overrides.set(date!(2024 - 01 - 02), DayOverride::with_shift(ShiftCode::new("N")));

    let plain: ResolvedDay = resolve_day(date!(2024 - 01 - 01), &job, &catalog, &overrides);
    assert_eq!(plain.shift_code, None);

    let overridden: ResolvedDay = resolve_day(date!(2024 - 01 - 02), &job, &catalog, &overrides);
    assert_eq!(overridden.shift_code, Some(ShiftCode::new("N")));
    assert_eq!(overridden.hours_worked, Hours::whole(8));
}

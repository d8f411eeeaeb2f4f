// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DayOverride, DayOverrideDraft, DomainError, Hours, Rate, ShiftCode, ShiftDefinition,
    ShiftKind, validate_shift_definition,
};

#[test]
fn test_blank_draft_is_empty_override() {
    let record: DayOverride = DayOverrideDraft::default().into_override().unwrap();
    assert!(record.is_empty());
}

#[test]
fn test_draft_keeps_explicit_zero() {
    let draft: DayOverrideDraft = DayOverrideDraft {
        hours_worked: String::from("0"),
        overtime_hours: String::from(" "),
        ..DayOverrideDraft::default()
    };
    let record: DayOverride = draft.into_override().unwrap();
    assert_eq!(record.hours_worked, Some(Hours::ZERO));
    assert_eq!(record.overtime_hours, None);
}

#[test]
fn test_draft_parses_every_field() {
    let draft: DayOverrideDraft = DayOverrideDraft {
        shift_code: String::from(" N "),
        hours_worked: String::from("7.5"),
        overtime_hours: String::from("2"),
        overtime_rate: String::from("18.50"),
        premium_hours: String::from("1.25"),
        premium_rate: String::from("4"),
        note: String::from("  swapped with Ana  "),
    };
    let record: DayOverride = draft.into_override().unwrap();
    assert_eq!(record.shift_code, Some(ShiftCode::new("N")));
    assert_eq!(record.hours_worked, Some(Hours::from_hundredths(750)));
    assert_eq!(record.overtime_hours, Some(Hours::whole(2)));
    assert_eq!(record.overtime_rate, Some(Rate::from_cents(1850)));
    assert_eq!(record.premium_hours, Some(Hours::from_hundredths(125)));
    assert_eq!(record.premium_rate, Some(Rate::whole(4)));
    assert_eq!(record.note.as_deref(), Some("swapped with Ana"));
}

#[test]
fn test_draft_rejects_negative_hours() {
    let draft: DayOverrideDraft = DayOverrideDraft {
        hours_worked: String::from("-1"),
        ..DayOverrideDraft::default()
    };
    assert_eq!(
        draft.into_override(),
        Err(DomainError::NegativeQuantity {
            field: "hours worked",
            input: String::from("-1"),
        })
    );
}

#[test]
fn test_draft_rejects_garbage() {
    let draft: DayOverrideDraft = DayOverrideDraft {
        premium_rate: String::from("lots"),
        ..DayOverrideDraft::default()
    };
    assert!(matches!(
        draft.into_override(),
        Err(DomainError::InvalidDecimal { .. })
    ));
}

#[test]
fn test_draft_prefills_from_stored_override() {
    let stored: DayOverride = DayOverride {
        shift_code: Some(ShiftCode::new("T")),
        hours_worked: Some(Hours::ZERO),
        note: Some(String::from("sick")),
        ..DayOverride::default()
    };
    let draft: DayOverrideDraft = DayOverrideDraft::from(&stored);
    assert_eq!(draft.shift_code, "T");
    assert_eq!(draft.hours_worked, "0.00");
    assert_eq!(draft.overtime_hours, "");
    assert_eq!(draft.note, "sick");

    assert_eq!(draft.into_override().unwrap(), stored);
}

#[test]
fn test_validate_shift_definition() {
    let valid: ShiftDefinition = ShiftDefinition::new(
        ShiftCode::new("M"),
        "Morning",
        "#22c55e",
        Hours::whole(8),
        ShiftKind::Work,
    );
    assert!(validate_shift_definition(&valid).is_ok());

    let comma: ShiftDefinition = ShiftDefinition {
        code: ShiftCode::new("M,T"),
        ..valid.clone()
    };
    assert!(matches!(
        validate_shift_definition(&comma),
        Err(DomainError::InvalidShiftCode(_))
    ));

    let empty_code: ShiftDefinition = ShiftDefinition {
        code: ShiftCode::new(" "),
        ..valid.clone()
    };
    assert!(matches!(
        validate_shift_definition(&empty_code),
        Err(DomainError::InvalidShiftCode(_))
    ));

    let no_label: ShiftDefinition = ShiftDefinition {
        label: String::new(),
        ..valid.clone()
    };
    assert!(matches!(
        validate_shift_definition(&no_label),
        Err(DomainError::InvalidShiftLabel(_))
    ));

    let bad_color: ShiftDefinition = ShiftDefinition {
        color: String::from("green"),
        ..valid
    };
    assert_eq!(
        validate_shift_definition(&bad_color),
        Err(DomainError::InvalidColor(String::from("green")))
    );
}

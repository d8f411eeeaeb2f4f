// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EmptyRotation;
    assert_eq!(format!("{err}"), "Rotation must contain at least one shift");

    let err: DomainError = DomainError::InvalidRotationStep(String::from("M:x"));
    assert_eq!(
        format!("{err}"),
        "Invalid rotation step 'M:x': expected CODE or CODE:COUNT"
    );

    let err: DomainError = DomainError::InvalidContractRange {
        start: date!(2024 - 02 - 01),
        end: date!(2024 - 01 - 31),
    };
    assert_eq!(
        format!("{err}"),
        "Contract end 2024-01-31 precedes contract start 2024-02-01"
    );

    let err: DomainError = DomainError::InvalidDecimal {
        input: String::from("1.234"),
        reason: "at most two decimal places are supported",
    };
    assert_eq!(
        format!("{err}"),
        "Invalid decimal '1.234': at most two decimal places are supported"
    );

    let err: DomainError = DomainError::NegativeQuantity {
        field: "hours worked",
        input: String::from("-2"),
    };
    assert_eq!(format!("{err}"), "hours worked must not be negative, got '-2'");

    let err: DomainError = DomainError::InvalidShiftCode(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid shift code: test");

    let err: DomainError = DomainError::InvalidShiftLabel(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid shift label: test");

    let err: DomainError = DomainError::InvalidColor(String::from("red"));
    assert_eq!(format!("{err}"), "Invalid color 'red': expected #rgb or #rrggbb");

    let err: DomainError = DomainError::InvalidJobName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid job name: test");

    let err: DomainError = DomainError::InvalidJobId(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid job id: test");

    let err: DomainError = DomainError::InvalidDateRange {
        start: date!(2024 - 03 - 02),
        end: date!(2024 - 03 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Date range end 2024-03-01 precedes start 2024-03-02"
    );

    let err: DomainError = DomainError::InvalidCalendarMonth {
        year: 2024,
        month: 13,
    };
    assert_eq!(format!("{err}"), "Invalid calendar month 2024-13");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("nope"),
        error: String::from("bad"),
    };
    assert_eq!(format!("{err}"), "Failed to parse date 'nope': bad");
}

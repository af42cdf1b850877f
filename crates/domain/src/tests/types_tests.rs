// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarCode, DomainError};

#[test]
fn test_calendar_code_trims_value() {
    let code = CalendarCode::new("  RF  ").unwrap();
    assert_eq!(code.value(), "RF");
    assert_eq!(format!("{code}"), "RF");
}

#[test]
fn test_calendar_code_rejects_blank() {
    assert!(matches!(
        CalendarCode::new(""),
        Err(DomainError::InvalidCalendarCode(_))
    ));
    assert!(matches!(
        CalendarCode::new("   "),
        Err(DomainError::InvalidCalendarCode(_))
    ));
}

#[test]
fn test_home_calendar_code() {
    assert_eq!(CalendarCode::home().value(), "RF");
}

#[test]
fn test_domain_error_display() {
    let err = DomainError::InvalidCalendarCode(String::from(" "));
    assert_eq!(
        format!("{err}"),
        "Invalid calendar code: ' ' (must be non-empty)"
    );

    let err = DomainError::InvalidDate {
        value: String::from("x"),
    };
    assert_eq!(format!("{err}"), "Invalid date: 'x'");

    let err = DomainError::InvalidTime {
        value: String::from("y"),
    };
    assert_eq!(format!("{err}"), "Invalid time: 'y'");
}

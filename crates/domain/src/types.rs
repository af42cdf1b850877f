// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// Canonical day-type labels.
///
/// `day_type` is free-form in the data model; these are the labels the
/// rules engine assigns meaning to. Everything else is treated as an
/// ordinary working classification.
pub mod day_types {
    /// Non-working: a public holiday.
    pub const HOLIDAY: &str = "Holiday";
    /// Non-working: a Saturday recorded explicitly in the calendar.
    pub const SATURDAY: &str = "Saturday";
    /// Non-working: a Sunday recorded explicitly in the calendar.
    pub const SUNDAY: &str = "Sunday";
    /// Working day preceding a holiday; shortens the working interval.
    pub const PRE_HOLIDAY: &str = "PreHoliday";
    /// An explicitly recorded working day (e.g. a moved weekend).
    pub const WORKDAY: &str = "Workday";
    /// Sentinel reported for dates with no calendar record.
    pub const ORDINARY: &str = "Ordinary";
}

/// A short code identifying one calendar (e.g. a country/region code).
///
/// Codes are trimmed on construction and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarCode {
    value: String,
}

impl CalendarCode {
    /// The home calendar code used when a query omits `calendar`.
    pub const HOME: &'static str = "RF";

    /// Creates a new `CalendarCode` from a raw string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalendarCode` if the trimmed value
    /// is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCalendarCode(value.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the home calendar code.
    #[must_use]
    pub fn home() -> Self {
        Self {
            value: String::from(Self::HOME),
        }
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CalendarCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One authoritative calendar-day record for a (calendar, date) pair.
///
/// Records are produced only by imports and take precedence over the
/// plain weekday rules when a date is resolved. The identity invariant
/// is at most one live record per (calendar, date); the store enforces
/// it with a unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The calendar this record belongs to.
    pub calendar: CalendarCode,
    /// The year; always equal to `date.year()` (enforced at import).
    pub year: i32,
    /// The calendar date, no time component.
    pub date: Date,
    /// Free-form classification (see [`day_types`]).
    pub day_type: String,
    /// Paired date when a day was moved (informational only).
    pub swap_date: Option<Date>,
}

/// A resolved working-hours window.
///
/// A zero-length window (`from == to == 00:00`) signals a non-working
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkInterval {
    /// Start of the working window.
    pub from: Time,
    /// End of the working window.
    pub to: Time,
}

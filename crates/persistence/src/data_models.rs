// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use prodcal_domain::{CalendarCode, CalendarDay};
use time::Date;

use crate::error::PersistenceError;

/// One row of the `calendar_days` table.
///
/// Field order matches the column order in `diesel_schema`.
#[derive(Debug, Clone, Queryable)]
pub struct CalendarDayRow {
    pub id: i64,
    pub calendar: String,
    pub year: i32,
    pub date: String,
    pub day_type: String,
    pub swap_date: Option<String>,
    pub imported_at: String,
}

impl CalendarDayRow {
    /// Converts a stored row into its domain form.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if a stored
    /// value is not representable (rows are written only from
    /// validated imports, so this indicates a corrupted table).
    pub fn into_domain(self) -> Result<CalendarDay, PersistenceError> {
        let calendar = CalendarCode::new(&self.calendar)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
        let date = text_to_date(&self.date)?;
        let swap_date = match self.swap_date.as_deref() {
            Some(value) if !value.is_empty() => Some(text_to_date(value)?),
            _ => None,
        };

        Ok(CalendarDay {
            calendar,
            year: self.year,
            date,
            day_type: self.day_type,
            swap_date,
        })
    }
}

/// Formats a date as the ISO `yyyy-MM-dd` text stored in SQLite.
///
/// ISO text sorts lexicographically in date order, which is what the
/// range queries rely on.
#[must_use]
pub fn date_to_text(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parses a stored ISO date back into a `time::Date`.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` on malformed text.
pub fn text_to_date(value: &str) -> Result<Date, PersistenceError> {
    prodcal_domain::parse_date_param(value)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side queries over the `calendar_days` table.

use diesel::prelude::*;
use prodcal_domain::{CalendarCode, CalendarDay};
use std::collections::BTreeMap;
use time::Date;

use crate::data_models::{CalendarDayRow, date_to_text};
use crate::diesel_schema::calendar_days;
use crate::error::PersistenceError;

/// Looks up the live record for one (calendar, date) key.
///
/// The key carries a unique index, so at most one row exists; the
/// ordering is a defensive tie-break should duplicates ever appear.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn lookup_day(
    conn: &mut SqliteConnection,
    calendar: &CalendarCode,
    date: Date,
) -> Result<Option<CalendarDay>, PersistenceError> {
    let row: Option<CalendarDayRow> = calendar_days::table
        .filter(calendar_days::calendar.eq(calendar.value()))
        .filter(calendar_days::date.eq(date_to_text(date)))
        .order(calendar_days::imported_at.desc())
        .first::<CalendarDayRow>(conn)
        .optional()?;

    row.map(CalendarDayRow::into_domain).transpose()
}

/// Looks up all records for one calendar in `[from, to]` inclusive.
///
/// Dates without a record are absent from the result; callers treat
/// absence as an ordinary day. Should duplicate keys exist, the row
/// with the latest `imported_at` wins.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn lookup_range(
    conn: &mut SqliteConnection,
    calendar: &CalendarCode,
    from: Date,
    to: Date,
) -> Result<BTreeMap<Date, CalendarDay>, PersistenceError> {
    let rows: Vec<CalendarDayRow> = calendar_days::table
        .filter(calendar_days::calendar.eq(calendar.value()))
        .filter(calendar_days::date.ge(date_to_text(from)))
        .filter(calendar_days::date.le(date_to_text(to)))
        .order(calendar_days::imported_at.asc())
        .load::<CalendarDayRow>(conn)?;

    let mut by_date: BTreeMap<Date, CalendarDay> = BTreeMap::new();
    for row in rows {
        let day = row.into_domain()?;
        by_date.insert(day.date, day);
    }

    Ok(by_date)
}

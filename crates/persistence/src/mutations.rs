// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side mutations of the `calendar_days` table.

use diesel::prelude::*;
use prodcal_domain::CalendarDay;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::data_models::date_to_text;
use crate::diesel_schema::calendar_days;
use crate::error::PersistenceError;

/// Insert/update counts reported by a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitCounts {
    /// Records inserted under a previously unseen key.
    pub inserted: usize,
    /// Records that overwrote an existing key.
    pub updated: usize,
}

/// Applies a validated batch as an upsert keyed by (calendar, date).
///
/// Runs inside a single transaction: a concurrent lookup observes
/// either the pre-commit or the fully post-commit state, never a
/// partially applied batch. Duplicate keys must already have been
/// collapsed by the caller.
///
/// # Errors
///
/// Returns an error if any statement fails; the transaction rolls
/// back and nothing is committed.
pub fn commit_batch(
    conn: &mut SqliteConnection,
    items: &[CalendarDay],
) -> Result<CommitCounts, PersistenceError> {
    let now = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    let counts = conn.transaction::<CommitCounts, PersistenceError, _>(|conn| {
        let mut counts = CommitCounts::default();

        for item in items {
            let date_text = date_to_text(item.date);
            let swap_text = item.swap_date.map(date_to_text);

            let existing: Option<i64> = calendar_days::table
                .select(calendar_days::id)
                .filter(calendar_days::calendar.eq(item.calendar.value()))
                .filter(calendar_days::date.eq(&date_text))
                .first::<i64>(conn)
                .optional()?;

            if let Some(id) = existing {
                diesel::update(calendar_days::table.filter(calendar_days::id.eq(id)))
                    .set((
                        calendar_days::year.eq(item.year),
                        calendar_days::day_type.eq(&item.day_type),
                        calendar_days::swap_date.eq(swap_text.as_deref()),
                        calendar_days::imported_at.eq(&now),
                    ))
                    .execute(conn)?;
                counts.updated += 1;
            } else {
                diesel::insert_into(calendar_days::table)
                    .values((
                        calendar_days::calendar.eq(item.calendar.value()),
                        calendar_days::year.eq(item.year),
                        calendar_days::date.eq(&date_text),
                        calendar_days::day_type.eq(&item.day_type),
                        calendar_days::swap_date.eq(swap_text.as_deref()),
                        calendar_days::imported_at.eq(&now),
                    ))
                    .execute(conn)?;
                counts.inserted += 1;
            }
        }

        Ok(counts)
    })?;

    debug!(
        inserted = counts.inserted,
        updated = counts.updated,
        "Committed calendar batch"
    );

    Ok(counts)
}

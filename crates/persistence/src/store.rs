// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dataset store behind one dispatching handle.
//!
//! Two backing strategies are equivalent from the engine's point of
//! view: a SQLite table keyed by (calendar, date) with per-row
//! upserts, or a single XML snapshot file replaced wholesale on every
//! import. The orchestration layer holds one `CalendarStore` and does
//! not care which.

use prodcal_domain::{CalendarCode, CalendarDay};
use std::collections::BTreeMap;
use std::path::Path;
use time::Date;

use crate::Persistence;
use crate::error::PersistenceError;
use crate::file_store::FileStore;
use crate::mutations::CommitCounts;

/// A dataset store backed by SQLite or by a snapshot file.
pub enum CalendarStore {
    /// Table-backed: per-row upserts, insert/update counts.
    Sqlite(Persistence),
    /// File-backed: whole-file replace, counts always zero.
    File(FileStore),
}

impl CalendarStore {
    /// Opens an in-memory SQLite store (used by tests and as the
    /// default when no path is configured).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn in_memory() -> Result<Self, PersistenceError> {
        Ok(Self::Sqlite(Persistence::new_in_memory()?))
    }

    /// Opens a file-based SQLite store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn sqlite_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        Ok(Self::Sqlite(Persistence::new_with_file(path)?))
    }

    /// Opens a snapshot-file store.
    #[must_use]
    pub fn snapshot_file<P: AsRef<Path>>(path: P) -> Self {
        Self::File(FileStore::new(path))
    }

    /// Point lookup for one (calendar, date) key.
    ///
    /// # Errors
    ///
    /// Returns an error if the SQLite query fails. The file backing
    /// never fails a read; it degrades to "no record".
    pub fn lookup_day(
        &mut self,
        calendar: &CalendarCode,
        date: Date,
    ) -> Result<Option<CalendarDay>, PersistenceError> {
        match self {
            Self::Sqlite(persistence) => persistence.lookup_day(calendar, date),
            Self::File(file_store) => Ok(file_store
                .load_records()
                .into_iter()
                .find(|day| day.calendar == *calendar && day.date == date)),
        }
    }

    /// Range lookup: every record for `calendar` in `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the SQLite query fails.
    pub fn lookup_range(
        &mut self,
        calendar: &CalendarCode,
        from: Date,
        to: Date,
    ) -> Result<BTreeMap<Date, CalendarDay>, PersistenceError> {
        match self {
            Self::Sqlite(persistence) => persistence.lookup_range(calendar, from, to),
            Self::File(file_store) => Ok(file_store
                .load_records()
                .into_iter()
                .filter(|day| day.calendar == *calendar && day.date >= from && day.date <= to)
                .map(|day| (day.date, day))
                .collect()),
        }
    }

    /// Commits a validated batch.
    ///
    /// SQLite: transactional upsert per key with insert/update counts.
    /// File: wholesale snapshot replace; counts report zero because a
    /// replace cannot distinguish inserts from updates.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails; no partial state is left
    /// behind in either backing.
    pub fn commit(&mut self, items: &[CalendarDay]) -> Result<CommitCounts, PersistenceError> {
        match self {
            Self::Sqlite(persistence) => persistence.commit_batch(items),
            Self::File(file_store) => {
                file_store.replace(items)?;
                Ok(CommitCounts::default())
            }
        }
    }
}

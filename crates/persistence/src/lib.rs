// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the production calendar service.
//!
//! The primary backing is SQLite via Diesel with embedded migrations;
//! an alternative whole-file XML snapshot backing is available for
//! deployments that prefer a single replaceable file. Both sit behind
//! [`CalendarStore`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use prodcal_domain::{CalendarCode, CalendarDay};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod file_store;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use file_store::FileStore;
pub use mutations::CommitCounts;
pub use store::CalendarStore;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so
/// tests never collide on a shared in-memory database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// SQLite-backed persistence adapter for calendar-day records.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter over an in-memory `SQLite`
    /// database, migrated and ready for use.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_calendar_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        Ok(Self { conn })
    }

    /// Creates a persistence adapter over a file-based `SQLite`
    /// database, with WAL enabled for read concurrency.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Point lookup for one (calendar, date) key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn lookup_day(
        &mut self,
        calendar: &CalendarCode,
        date: Date,
    ) -> Result<Option<CalendarDay>, PersistenceError> {
        queries::lookup_day(&mut self.conn, calendar, date)
    }

    /// Range lookup over `[from, to]` inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn lookup_range(
        &mut self,
        calendar: &CalendarCode,
        from: Date,
        to: Date,
    ) -> Result<BTreeMap<Date, CalendarDay>, PersistenceError> {
        queries::lookup_range(&mut self.conn, calendar, from, to)
    }

    /// Transactionally applies a validated batch as an upsert.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails; nothing is applied
    /// in that case.
    pub fn commit_batch(&mut self, items: &[CalendarDay]) -> Result<CommitCounts, PersistenceError> {
        mutations::commit_batch(&mut self.conn, items)
    }
}

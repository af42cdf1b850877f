// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-file snapshot store.
//!
//! The entire dataset lives in one XML file that is wholesale
//! replaced on every successful import and re-parsed on every read.
//! A read-time parse failure degrades to "no records" so queries stay
//! available even when the snapshot is corrupt; only the write path
//! surfaces failures.

use prodcal_domain::CalendarDay;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::fs;
use std::path::{Path, PathBuf};
use time::Date;
use tracing::warn;

use crate::error::PersistenceError;

/// Snapshot-backed dataset store.
///
/// Callers serialize access through the shared store handle; the
/// temp-file-then-rename replace additionally protects any external
/// reader from ever observing a half-written snapshot.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given snapshot path. The file does
    /// not have to exist yet; a missing snapshot reads as empty.
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the snapshot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the current snapshot.
    ///
    /// Degrades to an empty record set when the file is missing,
    /// unreadable, or fails validation - availability over freshness
    /// on the read path.
    #[must_use]
    pub fn load_records(&self) -> Vec<CalendarDay> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Snapshot unreadable, treating as empty");
                return Vec::new();
            }
        };

        let batch = prodcal_import::parse(&raw);
        if batch.has_errors() {
            warn!(
                path = %self.path.display(),
                errors = batch.errors.len(),
                "Snapshot failed validation, treating as empty"
            );
            return Vec::new();
        }

        batch.unique_items()
    }

    /// Replaces the snapshot with a serialized form of `items`.
    ///
    /// Writes to a temporary sibling first and renames it into place
    /// so the replace is atomic.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step
    /// fails; the previous snapshot stays intact in that case.
    pub fn replace(&self, items: &[CalendarDay]) -> Result<(), PersistenceError> {
        let bytes = serialize_snapshot(items)?;

        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("xml.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

/// Serializes records into the import payload shape, so the snapshot
/// round-trips through the same strict parser.
fn serialize_snapshot(items: &[CalendarDay]) -> Result<Vec<u8>, PersistenceError> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    writer
        .write_event(Event::Start(BytesStart::new("Items")))
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    for item in items {
        let year = item.year.to_string();
        let mut element = BytesStart::new("Item");
        element.push_attribute(("Calendar", item.calendar.value()));
        element.push_attribute(("Year", year.as_str()));
        element.push_attribute(("DayType", item.day_type.as_str()));
        element.push_attribute(("Date", compact(item.date).as_str()));
        element.push_attribute((
            "SwapDate",
            item.swap_date.map(compact).unwrap_or_default().as_str(),
        ));
        writer
            .write_event(Event::Empty(element))
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("Items")))
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    Ok(writer.into_inner())
}

fn compact(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

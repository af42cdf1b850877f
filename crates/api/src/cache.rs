// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fast-path cache for the hot (calendar, year) scope.
//!
//! Most traffic asks about the home calendar in the current year, so
//! that one scope is kept in memory. Inside its scope the cache is
//! authoritative, including for dates with no record; outside it the
//! caller must fall back to the store.

use prodcal_domain::{CalendarCode, CalendarDay};
use std::collections::HashMap;
use std::sync::Mutex;
use time::Date;
use tracing::debug;

/// Records for one hot year, swapped wholesale on refresh.
struct HotYear {
    year: i32,
    days: HashMap<Date, CalendarDay>,
}

/// In-memory cache of one (calendar, year) scope.
pub struct HotYearCache {
    calendar: CalendarCode,
    inner: Mutex<Option<HotYear>>,
}

impl HotYearCache {
    /// Creates an empty cache bound to one calendar. Until the first
    /// [`replace`](Self::replace) every lookup misses.
    #[must_use]
    pub fn new(calendar: CalendarCode) -> Self {
        Self {
            calendar,
            inner: Mutex::new(None),
        }
    }

    /// The calendar this cache serves.
    #[must_use]
    pub const fn calendar(&self) -> &CalendarCode {
        &self.calendar
    }

    /// Replaces the cached scope with `days` for `year`.
    ///
    /// All-or-nothing under the lock: readers see either the previous
    /// scope or the new one, never a mix.
    pub fn replace(&self, year: i32, days: HashMap<Date, CalendarDay>) {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        debug!(year, records = days.len(), "Refreshed hot-year cache");
        *guard = Some(HotYear { year, days });
    }

    /// Drops the cached scope entirely.
    ///
    /// Used when a refresh against the store fails: a kept scope
    /// would keep answering authoritatively with pre-refresh data,
    /// so every lookup must miss and fall through to the store until
    /// the next successful [`replace`](Self::replace).
    pub fn clear(&self) {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = None;
    }

    /// Looks up `date` for `calendar`.
    ///
    /// Returns `None` when the key is outside the cached scope (wrong
    /// calendar, wrong year, or nothing cached yet). Inside the scope
    /// the answer is authoritative: `Some(None)` means the store holds
    /// no record for that date.
    #[must_use]
    pub fn get(&self, calendar: &CalendarCode, date: Date) -> Option<Option<CalendarDay>> {
        if *calendar != self.calendar {
            return None;
        }

        let guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let hot = guard.as_ref()?;
        if hot.year != date.year() {
            return None;
        }

        Some(hot.days.get(&date).cloned())
    }
}

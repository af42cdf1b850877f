// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pure rules engine: derives a working-hours interval for a date
//! from an optional calendar record and optional caller-supplied
//! bounds. No I/O, no state.

use crate::types::{WorkInterval, day_types};
use time::macros::time;
use time::{Date, Duration, Time, Weekday};

/// Default start of the working day when the caller supplies none.
pub const DEFAULT_START: Time = time!(9:00);

/// Default end of the working day when the caller supplies none.
pub const DEFAULT_END: Time = time!(18:00);

/// Both bounds of a non-working day collapse to this sentinel.
const MIDNIGHT: Time = time!(0:00);

/// Returns whether a day-type label belongs to the fixed non-working
/// set. Matching is exact on the canonical labels.
#[must_use]
pub fn is_non_working_day_type(day_type: &str) -> bool {
    matches!(
        day_type.trim(),
        day_types::HOLIDAY | day_types::SATURDAY | day_types::SUNDAY
    )
}

/// Returns whether a day-type label marks a pre-holiday shortened day.
/// Matching is case-insensitive on the canonical label.
#[must_use]
pub fn is_pre_holiday(day_type: &str) -> bool {
    day_type.trim().eq_ignore_ascii_case(day_types::PRE_HOLIDAY)
}

/// Returns whether the date's actual weekday is Saturday or Sunday.
#[must_use]
pub const fn is_weekend_by_day_of_week(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Returns the Russian display name of the date's weekday, title-cased.
#[must_use]
pub const fn day_name_ru(date: Date) -> &'static str {
    match date.weekday() {
        Weekday::Monday => "Понедельник",
        Weekday::Tuesday => "Вторник",
        Weekday::Wednesday => "Среда",
        Weekday::Thursday => "Четверг",
        Weekday::Friday => "Пятница",
        Weekday::Saturday => "Суббота",
        Weekday::Sunday => "Воскресенье",
    }
}

/// Computes the working interval for a date.
///
/// When a calendar record exists for the date it has priority over the
/// weekday: non-working status is decided solely by `effective_day_type`
/// membership in the non-working set, so an override can make a Sunday
/// a working day or a Tuesday a holiday. Without a record, Saturday and
/// Sunday are non-working by weekday.
///
/// Non-working days yield the zero-length sentinel interval. Working
/// days start from the caller bounds (defaults 09:00/18:00), lose one
/// hour off the end on a Friday, lose one further hour on a
/// pre-holiday, and are clamped so the end never precedes the start.
#[must_use]
pub fn work_interval(
    date: Date,
    effective_day_type: &str,
    has_calendar_record: bool,
    query_start: Option<Time>,
    query_end: Option<Time>,
) -> WorkInterval {
    let mut non_working = if has_calendar_record {
        is_non_working_day_type(effective_day_type)
    } else {
        is_weekend_by_day_of_week(date)
    };

    // No record, but the synthetic day type already carries a
    // non-working label: treat as non-working anyway.
    if !has_calendar_record && is_non_working_day_type(effective_day_type) {
        non_working = true;
    }

    if non_working {
        return WorkInterval {
            from: MIDNIGHT,
            to: MIDNIGHT,
        };
    }

    let start = query_start.unwrap_or(DEFAULT_START);
    let mut end = query_end.unwrap_or(DEFAULT_END);

    if date.weekday() == Weekday::Friday {
        end -= Duration::hours(1);
    }

    if is_pre_holiday(effective_day_type) {
        end -= Duration::hours(1);
    }

    if end < start {
        end = start;
    }

    WorkInterval { from: start, to: end }
}

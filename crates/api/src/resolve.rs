// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of one date against an optional calendar record.

use prodcal_domain::{CalendarDay, day_name_ru, day_types, work_interval};
use time::{Date, Time};

use crate::request_response::ResolvedDayResponse;

/// Resolves one date into a response DTO.
///
/// `record` is the authoritative answer from cache or store: `None`
/// means no override exists and the weekday rules decide. The
/// reported `dayType` for ordinary days is the `"Ordinary"` sentinel,
/// never an empty string.
#[must_use]
pub fn resolve_day(
    date: Date,
    record: Option<&CalendarDay>,
    query_start: Time,
    query_end: Time,
) -> ResolvedDayResponse {
    let day_type = record.map_or(day_types::ORDINARY, |day| day.day_type.as_str());

    let interval = work_interval(
        date,
        day_type,
        record.is_some(),
        Some(query_start),
        Some(query_end),
    );

    ResolvedDayResponse {
        date: format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        ),
        day_name: day_name_ru(date).to_string(),
        day_type: day_type.to_string(),
        day: date.day(),
        month: u8::from(date.month()),
        year: date.year(),
        from_hour: interval.from.hour(),
        to_hour: interval.to.hour(),
        from_time: format_hm(interval.from),
        to_time: format_hm(interval.to),
    }
}

fn format_hm(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

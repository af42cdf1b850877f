// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query-parameter validation.
//!
//! Raw string parameters come in from the HTTP surface; typed queries
//! go out. Error messages here are client-facing contract, checked
//! one parameter at a time in a fixed order so a request with several
//! problems reports the first one deterministically.

use prodcal_domain::{CalendarCode, DEFAULT_END, DEFAULT_START, parse_date_param, parse_time_param};
use time::{Date, Time};

use crate::error::ApiError;

/// A validated single-day query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayQuery {
    /// The calendar to consult.
    pub calendar: CalendarCode,
    /// The date to resolve.
    pub date: Date,
    /// Requested working-hours start.
    pub start: Time,
    /// Requested working-hours end.
    pub end: Time,
}

/// A validated period query over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodQuery {
    /// The calendar to consult.
    pub calendar: CalendarCode,
    /// First date of the range.
    pub from: Date,
    /// Last date of the range, inclusive.
    pub to: Date,
    /// Requested working-hours start.
    pub start: Time,
    /// Requested working-hours end.
    pub end: Time,
}

/// Validates the parameters of a single-day query.
///
/// Checks run in order: `date`, `starttime`, `endtime`, then the
/// start/end relation after defaults are substituted. A missing or
/// blank `calendar` falls back to the home calendar.
///
/// # Errors
///
/// Returns an invalid-input error naming the first failing parameter.
pub fn validate_day_query(
    calendar: Option<&str>,
    date: Option<&str>,
    starttime: Option<&str>,
    endtime: Option<&str>,
) -> Result<DayQuery, ApiError> {
    let calendar = resolve_calendar(calendar);

    let date = parse_date_param(date.unwrap_or_default()).map_err(|_| {
        ApiError::invalid_input(
            "date",
            "Invalid 'date'. Supported formats: yyyy-MM-dd or yyyyMMdd.",
        )
    })?;

    let (start, end) = resolve_times(starttime, endtime)?;

    Ok(DayQuery {
        calendar,
        date,
        start,
        end,
    })
}

/// Validates the parameters of a period query.
///
/// Checks run in order: `from`, `to`, range relation, `starttime`,
/// `endtime`, then the start/end relation after defaults.
///
/// # Errors
///
/// Returns an invalid-input error naming the first failing parameter.
pub fn validate_period_query(
    calendar: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    starttime: Option<&str>,
    endtime: Option<&str>,
) -> Result<PeriodQuery, ApiError> {
    let calendar = resolve_calendar(calendar);

    let from = parse_date_param(from.unwrap_or_default()).map_err(|_| {
        ApiError::invalid_input(
            "from",
            "Invalid 'from'. Supported formats: yyyy-MM-dd or yyyyMMdd.",
        )
    })?;
    let to = parse_date_param(to.unwrap_or_default()).map_err(|_| {
        ApiError::invalid_input(
            "to",
            "Invalid 'to'. Supported formats: yyyy-MM-dd or yyyyMMdd.",
        )
    })?;

    if to < from {
        return Err(ApiError::invalid_input(
            "to",
            "'to' must be greater than or equal to 'from'.",
        ));
    }

    let (start, end) = resolve_times(starttime, endtime)?;

    Ok(PeriodQuery {
        calendar,
        from,
        to,
        start,
        end,
    })
}

/// A missing or blank `calendar` means the home calendar; any
/// non-blank value is a valid code.
fn resolve_calendar(raw: Option<&str>) -> CalendarCode {
    raw.and_then(|value| CalendarCode::new(value).ok())
        .unwrap_or_else(CalendarCode::home)
}

fn resolve_times(starttime: Option<&str>, endtime: Option<&str>) -> Result<(Time, Time), ApiError> {
    let start = match starttime {
        None => DEFAULT_START,
        Some(value) if value.trim().is_empty() => DEFAULT_START,
        Some(value) => parse_time_param(value).map_err(|_| {
            ApiError::invalid_input("starttime", "Invalid 'starttime'. Supported formats: HH:mm.")
        })?,
    };

    let end = match endtime {
        None => DEFAULT_END,
        Some(value) if value.trim().is_empty() => DEFAULT_END,
        Some(value) => parse_time_param(value).map_err(|_| {
            ApiError::invalid_input("endtime", "Invalid 'endtime'. Supported formats: HH:mm.")
        })?,
    };

    if end <= start {
        return Err(ApiError::invalid_input(
            "endtime",
            "'endtime' must be greater than 'starttime'.",
        ));
    }

    Ok((start, end))
}

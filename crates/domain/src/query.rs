// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of caller-supplied date and time query values.

use crate::error::DomainError;
use time::macros::format_description;
use time::{Date, Time};

/// `yyyy-MM-dd`, e.g. `2017-10-05`.
const ISO_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// `yyyyMMdd`, e.g. `20171005`.
const COMPACT_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]");

/// `HH:mm`, e.g. `09:30`.
const PADDED_TIME: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]");

/// `H:mm`, e.g. `9:30`.
const SHORT_TIME: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[hour padding:none]:[minute]");

/// Parses a date query value in either `yyyy-MM-dd` or `yyyyMMdd` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the trimmed value is blank or
/// matches neither format.
pub fn parse_date_param(value: &str) -> Result<Date, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDate {
            value: value.to_string(),
        });
    }

    Date::parse(trimmed, ISO_DATE)
        .or_else(|_| Date::parse(trimmed, COMPACT_DATE))
        .map_err(|_| DomainError::InvalidDate {
            value: value.to_string(),
        })
}

/// Parses a date in the fixed 8-digit `yyyyMMdd` import form.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value does not match.
pub fn parse_compact_date(value: &str) -> Result<Date, DomainError> {
    let trimmed = value.trim();
    Date::parse(trimmed, COMPACT_DATE).map_err(|_| DomainError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a time query value in either `HH:mm` or `H:mm` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if the trimmed value is blank or
/// matches neither format.
pub fn parse_time_param(value: &str) -> Result<Time, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTime {
            value: value.to_string(),
        });
    }

    Time::parse(trimmed, PADDED_TIME)
        .or_else(|_| Time::parse(trimmed, SHORT_TIME))
        .map_err(|_| DomainError::InvalidTime {
            value: value.to_string(),
        })
}

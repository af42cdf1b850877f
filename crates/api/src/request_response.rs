// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API response for an import request, successful or not.
///
/// A rejected import still reports how many items the payload carried
/// alongside the full list of per-item errors.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportCalendarResult {
    /// Number of `Item` elements found in the payload.
    pub total_items: usize,
    /// Records inserted under a previously unseen (calendar, date).
    pub inserted: usize,
    /// Records that overwrote an existing (calendar, date).
    pub updated: usize,
    /// Per-item validation errors; non-empty means nothing committed.
    pub errors: Vec<String>,
}

impl ImportCalendarResult {
    /// Builds the rejection response: counts stay zero, the payload's
    /// item count and every collected error are reported back.
    #[must_use]
    pub fn rejected(total_items: usize, errors: Vec<String>) -> Self {
        Self {
            total_items,
            inserted: 0,
            updated: 0,
            errors,
        }
    }
}

/// One resolved calendar day in a query or range-query response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDayResponse {
    /// The date in `yyyy-MM-dd` form.
    pub date: String,
    /// Localized weekday name.
    pub day_name: String,
    /// The override's day type, or `"Ordinary"` when no record exists.
    pub day_type: String,
    /// Day of month.
    pub day: u8,
    /// Month number (1-12).
    pub month: u8,
    /// Four-digit year.
    pub year: i32,
    /// Working-hours start, whole hours.
    ///
    /// The four interval fields keep their historical all-lowercase
    /// wire names; only the date fields follow camelCase.
    #[serde(rename = "fromhour")]
    pub from_hour: u8,
    /// Working-hours end, whole hours.
    #[serde(rename = "tohour")]
    pub to_hour: u8,
    /// Working-hours start as `HH:mm`.
    #[serde(rename = "fromtime")]
    pub from_time: String,
    /// Working-hours end as `HH:mm`.
    #[serde(rename = "totime")]
    pub to_time: String,
}

/// Body shape for every error response: a single message field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    /// The client-facing error message.
    pub error: String,
}

// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod query;
mod rules;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use query::{parse_compact_date, parse_date_param, parse_time_param};
pub use rules::{
    DEFAULT_END, DEFAULT_START, day_name_ru, is_non_working_day_type, is_pre_holiday,
    is_weekend_by_day_of_week, work_interval,
};
pub use types::{CalendarCode, CalendarDay, WorkInterval, day_types};

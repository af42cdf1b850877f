// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the production calendar service.
//!
//! Validates query parameters into typed queries, resolves calendar
//! records into response DTOs, and maintains the hot-year cache. The
//! HTTP surface itself lives in the server crate; everything here is
//! transport-agnostic.

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

mod cache;
mod error;
mod request_response;
mod resolve;
mod validate;

#[cfg(test)]
mod tests;

pub use cache::HotYearCache;
pub use error::ApiError;
pub use request_response::{ErrorBody, ImportCalendarResult, ResolvedDayResponse};
pub use resolve::resolve_day;
pub use validate::{DayQuery, PeriodQuery, validate_day_query, validate_period_query};

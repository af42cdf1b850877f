// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Strict import parser/validator for calendar XML payloads.
//!
//! `parse` turns a byte stream into a validated batch of calendar-day
//! records or a non-empty error list; it never produces a partial
//! result. Every item is validated independently, all errors across
//! all items are collected, and a batch with any error must not be
//! committed. The only short-circuit is a structurally unparsable
//! document, which yields a single error and `total_items = 0`.

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

mod parser;

#[cfg(test)]
mod tests;

pub use parser::{ImportBatch, parse};

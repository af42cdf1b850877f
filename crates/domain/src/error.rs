// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A calendar code was empty or blank.
    InvalidCalendarCode(String),
    /// A date string did not match any supported format.
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },
    /// A time string did not match any supported format.
    InvalidTime {
        /// The raw value that failed to parse.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarCode(value) => {
                write!(f, "Invalid calendar code: '{value}' (must be non-empty)")
            }
            Self::InvalidDate { value } => write!(f, "Invalid date: '{value}'"),
            Self::InvalidTime { value } => write!(f, "Invalid time: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}

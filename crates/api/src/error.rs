// Copyright (C) 2026 The prodcal authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

/// API-level errors.
///
/// These are distinct from domain errors and represent the API
/// contract: every variant maps to a stable HTTP status and a
/// client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The query parameter that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal failure that is not the client's fault.
    Internal {
        /// A human-readable description of the failure.
        message: String,
    },
}

impl ApiError {
    /// Builds an invalid-input error for a query parameter.
    #[must_use]
    pub fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// The message a client should see, without internal detail.
    #[must_use]
    pub fn client_message(&self) -> &str {
        match self {
            Self::InvalidInput { message, .. } | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

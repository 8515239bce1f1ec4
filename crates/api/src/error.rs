// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cinema::CoreError;
use cinema_domain::DomainError;

/// Message returned when a requested seat lies outside the room.
pub const SEAT_OUT_OF_BOUNDS_MESSAGE: &str = "The number of a row or a column is out of bounds!";

/// Message returned when a requested seat has already been sold.
pub const SEAT_PURCHASED_MESSAGE: &str = "The ticket has been already purchased!";

/// Message returned when a return names an unknown token.
pub const WRONG_TOKEN_MESSAGE: &str = "Wrong token!";

/// Message returned when the statistics password is missing or wrong.
pub const WRONG_PASSWORD_MESSAGE: &str = "The password is wrong!";

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the message shown to clients, without the error category.
    #[must_use]
    pub fn client_message(&self) -> &str {
        match self {
            Self::AuthenticationFailed { reason } => reason,
            Self::DomainRuleViolation { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::SeatNotFound { .. } => ApiError::InvalidInput {
            field: String::from("seat"),
            message: String::from(SEAT_OUT_OF_BOUNDS_MESSAGE),
        },
        DomainError::SeatUnavailable { .. } => ApiError::DomainRuleViolation {
            rule: String::from("seat_available"),
            message: String::from(SEAT_PURCHASED_MESSAGE),
        },
        DomainError::TicketNotFound => ApiError::InvalidInput {
            field: String::from("token"),
            message: String::from(WRONG_TOKEN_MESSAGE),
        },
        DomainError::InvalidRoomDimensions { rows, columns } => ApiError::InvalidInput {
            field: String::from("room"),
            message: format!("Room of {rows}x{columns} seats cannot be built"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password check guarding the statistics endpoint.

use thiserror::Error;

use crate::error::{AuthError, WRONG_PASSWORD_MESSAGE};

/// Errors raised while configuring the statistics password.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsAuthError {
    /// The configured password is empty.
    #[error("Statistics password must not be empty")]
    EmptyPassword,
}

/// Verifies the shared password required to read sales statistics.
pub struct StatsAuthenticator {
    password: String,
}

impl StatsAuthenticator {
    /// Creates an authenticator for the given password.
    ///
    /// # Errors
    ///
    /// Returns `StatsAuthError::EmptyPassword` if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, StatsAuthError> {
        let password: String = password.into();
        if password.is_empty() {
            return Err(StatsAuthError::EmptyPassword);
        }
        Ok(Self { password })
    }

    /// Checks a supplied password.
    ///
    /// The comparison time does not depend on where the first mismatching
    /// byte is.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the password is missing
    /// or does not match.
    pub fn authenticate(&self, supplied: Option<&str>) -> Result<(), AuthError> {
        match supplied {
            Some(candidate) if constant_time_eq(candidate.as_bytes(), self.password.as_bytes()) => {
                Ok(())
            }
            _ => Err(AuthError::AuthenticationFailed {
                reason: String::from(WRONG_PASSWORD_MESSAGE),
            }),
        }
    }
}

impl std::fmt::Debug for StatsAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsAuthenticator")
            .field("password", &"<redacted>")
            .finish()
    }
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.iter()
        .zip(right)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

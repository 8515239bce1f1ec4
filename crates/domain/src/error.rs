// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating seats, tickets and room layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested seat lies outside the configured room grid.
    SeatNotFound {
        /// The requested row.
        row: i32,
        /// The requested column.
        column: i32,
    },
    /// The requested seat exists but has already been sold.
    SeatUnavailable {
        /// The requested row.
        row: i32,
        /// The requested column.
        column: i32,
    },
    /// No sold ticket carries the supplied token.
    TicketNotFound,
    /// Room dimensions must both be at least 1.
    InvalidRoomDimensions {
        /// The configured row count.
        rows: u32,
        /// The configured column count.
        columns: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeatNotFound { row, column } => {
                write!(f, "Seat at row {row}, column {column} is out of bounds")
            }
            Self::SeatUnavailable { row, column } => {
                write!(
                    f,
                    "Seat at row {row}, column {column} has already been purchased"
                )
            }
            Self::TicketNotFound => write!(f, "No purchased ticket matches the supplied token"),
            Self::InvalidRoomDimensions { rows, columns } => {
                write!(
                    f,
                    "Invalid room dimensions {rows}x{columns}: rows and columns must be at least 1"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Number of rows, counted from the screen, sold at the front-row price.
pub const FRONT_ROWS: i32 = 4;

/// Price of a seat in one of the front rows.
pub const FRONT_ROW_PRICE: u32 = 10;

/// Price of a seat behind the front rows.
pub const BACK_ROW_PRICE: u32 = 8;

/// A single seat in the room, addressed by 1-indexed row and column.
///
/// Seats are plain values. Two seats with the same row and column are the
/// same seat, which lets them act as map keys. A `Seat` may describe a
/// position outside the room (clients supply arbitrary coordinates), so
/// bounds are checked against [`crate::RoomDimensions`], not here.
///
/// The derived ordering is row-major, which is the order seats are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat {
    /// The row, starting at 1 nearest the screen.
    row: i32,
    /// The column, starting at 1.
    column: i32,
}

impl Seat {
    /// Creates a new `Seat`.
    ///
    /// # Arguments
    ///
    /// * `row` - The row number
    /// * `column` - The column number
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns the row number.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column number.
    #[must_use]
    pub const fn column(self) -> i32 {
        self.column
    }

    /// Returns the ticket price for this seat.
    ///
    /// The price depends on the row alone: the first [`FRONT_ROWS`] rows
    /// cost [`FRONT_ROW_PRICE`], every other row costs [`BACK_ROW_PRICE`].
    #[must_use]
    pub const fn price(self) -> u32 {
        if self.row <= FRONT_ROWS {
            FRONT_ROW_PRICE
        } else {
            BACK_ROW_PRICE
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {} column {}", self.row, self.column)
    }
}

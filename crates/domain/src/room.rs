// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};

/// The size of the room: how many rows and how many seats per row.
///
/// Dimensions are fixed for the lifetime of an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDimensions {
    total_rows: u32,
    total_columns: u32,
}

impl RoomDimensions {
    /// Creates validated room dimensions.
    ///
    /// # Arguments
    ///
    /// * `total_rows` - Number of rows, at least 1
    /// * `total_columns` - Number of seats per row, at least 1
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomDimensions` if either value is zero,
    /// or if either value does not fit a seat coordinate.
    pub fn new(total_rows: u32, total_columns: u32) -> Result<Self, DomainError> {
        let fits = |value: u32| value >= 1 && i32::try_from(value).is_ok();
        if !fits(total_rows) || !fits(total_columns) {
            return Err(DomainError::InvalidRoomDimensions {
                rows: total_rows,
                columns: total_columns,
            });
        }
        Ok(Self {
            total_rows,
            total_columns,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn total_rows(self) -> u32 {
        self.total_rows
    }

    /// Returns the number of seats in each row.
    #[must_use]
    pub const fn total_columns(self) -> u32 {
        self.total_columns
    }

    /// Returns the total number of seats in the room.
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.total_rows as usize * self.total_columns as usize
    }

    /// Returns whether the seat lies inside the room grid.
    #[must_use]
    pub fn contains(self, seat: Seat) -> bool {
        let in_range =
            |value: i32, max: u32| u32::try_from(value).is_ok_and(|v| (1..=max).contains(&v));
        in_range(seat.row(), self.total_rows) && in_range(seat.column(), self.total_columns)
    }

    /// Iterates over every seat of the room in row-major order.
    pub fn seats(self) -> impl Iterator<Item = Seat> + use<> {
        // Both bounds were checked against i32::MAX in `new`.
        let rows = i32::try_from(self.total_rows).unwrap_or(i32::MAX);
        let columns = i32::try_from(self.total_columns).unwrap_or(i32::MAX);
        (1..=rows).flat_map(move |row| (1..=columns).map(move |column| Seat::new(row, column)))
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_domain::{RoomDimensions, Seat};

use crate::{InventoryState, RoomInventory};

pub fn create_test_dimensions(rows: u32, columns: u32) -> RoomDimensions {
    RoomDimensions::new(rows, columns).unwrap()
}

pub fn create_test_state(rows: u32, columns: u32) -> InventoryState {
    InventoryState::new(create_test_dimensions(rows, columns))
}

pub fn create_test_inventory(rows: u32, columns: u32) -> RoomInventory {
    RoomInventory::new(create_test_dimensions(rows, columns))
}

/// Checks the partition and income invariants against a state snapshot.
pub fn assert_inventory_consistent(state: &InventoryState) {
    let dimensions: RoomDimensions = state.dimensions();
    let stats = state.statistics();
    assert_eq!(
        stats.available_count + stats.sold_count,
        dimensions.capacity()
    );
    assert_eq!(state.sold_seats().len(), stats.sold_count);

    for seat in dimensions.seats() {
        let sold: bool = state.sold_seats().contains(&seat);
        assert_ne!(state.is_available(seat), sold, "seat {seat} in both or neither");
    }

    let expected_income: u64 = state
        .sold_seats()
        .iter()
        .map(|seat: &Seat| u64::from(seat.price()))
        .sum();
    assert_eq!(stats.current_income, expected_income);
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use cinema::RoomInventory;
use cinema_domain::RoomDimensions;

use crate::{PurchaseTicketRequest, PurchaseTicketResponse, StatsAuthenticator, purchase_ticket};

pub const TEST_PASSWORD: &str = "super_secret";

pub fn create_test_inventory() -> RoomInventory {
    RoomInventory::new(RoomDimensions::new(9, 9).unwrap())
}

pub fn create_test_authenticator() -> StatsAuthenticator {
    StatsAuthenticator::new(TEST_PASSWORD).unwrap()
}

pub fn buy(inventory: &RoomInventory, row: i32, column: i32) -> PurchaseTicketResponse {
    purchase_ticket(inventory, &PurchaseTicketRequest { row, column }).unwrap()
}

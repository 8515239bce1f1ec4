// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A point-in-time view of room sales.
///
/// Counts are derived from inventory state when the snapshot is taken.
/// `current_income` always equals the summed price of the sold seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Seats still available for purchase.
    pub available_count: usize,
    /// Tickets currently sold.
    pub sold_count: usize,
    /// Total price of every currently sold ticket.
    pub current_income: u64,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::seat::Seat;
use serde::{Deserialize, Serialize};

/// Opaque token identifying a ticket when it is returned.
///
/// The domain does not care how tokens are produced, only that they are
/// unique among live tickets. Minting happens in the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketToken {
    value: String,
}

impl TicketToken {
    /// Wraps an existing token string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the token string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for TicketToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A ticket for exactly one seat.
///
/// Tickets are minted when the room is built and then move between the
/// available and sold partitions of the inventory. The seat never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    token: TicketToken,
    seat: Seat,
}

impl Ticket {
    /// Creates a new `Ticket`.
    ///
    /// # Arguments
    ///
    /// * `token` - The token used to return this ticket
    /// * `seat` - The seat this ticket admits to
    #[must_use]
    pub const fn new(token: TicketToken, seat: Seat) -> Self {
        Self { token, seat }
    }

    /// Returns the ticket token.
    #[must_use]
    pub const fn token(&self) -> &TicketToken {
        &self.token
    }

    /// Returns the seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the price paid for this ticket.
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.seat.price()
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_domain::{Seat, TicketToken};

/// A command represents client intent as data only.
///
/// Commands are the only way to request inventory changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Buy the ticket for a seat.
    PurchaseSeat {
        /// The requested seat. May lie outside the room.
        seat: Seat,
    },
    /// Give back a previously purchased ticket.
    ReturnTicket {
        /// The token printed on the ticket.
        token: TicketToken,
    },
}

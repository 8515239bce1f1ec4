// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_domain::{Ticket, TicketToken};
use uuid::Uuid;

/// Decides what happens to a ticket's token when the ticket is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// The returned ticket goes back on sale unchanged. The next buyer of
    /// the seat receives the same token as the previous one.
    #[default]
    Reuse,
    /// The returned ticket is discarded and a new one is minted for the
    /// seat, so every sale carries a token never issued before.
    FreshPerSale,
}

impl TokenPolicy {
    /// Prepares a returned ticket for going back on sale.
    pub(crate) fn restock(self, ticket: Ticket) -> Ticket {
        match self {
            Self::Reuse => ticket,
            Self::FreshPerSale => Ticket::new(mint_token(), ticket.seat()),
        }
    }
}

/// Mints a new random ticket token.
///
/// Tokens are random version 4 UUIDs in hyphenated lowercase form.
#[must_use]
pub fn mint_token() -> TicketToken {
    TicketToken::new(Uuid::new_v4().to_string())
}

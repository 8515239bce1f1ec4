// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, HashMap};

use cinema_domain::{DomainError, RoomDimensions, Seat, Statistics, Ticket, TicketToken};

use crate::token::mint_token;

/// The complete seat and ticket state of one room.
///
/// Every seat of the grid is in exactly one of two partitions: `available`
/// (keyed by seat, ordered row-major) or `sold` (keyed by ticket token).
/// Tickets are never created or dropped after construction except when a
/// returned ticket is re-minted under `TokenPolicy::FreshPerSale`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryState {
    pub(crate) dimensions: RoomDimensions,
    pub(crate) available: BTreeMap<Seat, Ticket>,
    pub(crate) sold: HashMap<TicketToken, Ticket>,
    /// Sold seats in order of sale.
    pub(crate) sold_seats: Vec<Seat>,
    /// Sum of the prices of the tickets in `sold`.
    pub(crate) current_income: u64,
}

impl InventoryState {
    /// Builds the state for a room with every seat available.
    ///
    /// One ticket is minted per seat up front.
    ///
    /// # Arguments
    ///
    /// * `dimensions` - The validated room size
    #[must_use]
    pub fn new(dimensions: RoomDimensions) -> Self {
        let available: BTreeMap<Seat, Ticket> = dimensions
            .seats()
            .map(|seat| (seat, Ticket::new(mint_token(), seat)))
            .collect();

        Self {
            dimensions,
            available,
            sold: HashMap::new(),
            sold_seats: Vec::new(),
            current_income: 0,
        }
    }

    /// Returns the room dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> RoomDimensions {
        self.dimensions
    }

    /// Returns the available seats in row-major order.
    #[must_use]
    pub fn available_seats(&self) -> Vec<Seat> {
        self.available.keys().copied().collect()
    }

    /// Returns the unsold tickets in row-major seat order.
    #[must_use]
    pub fn available_tickets(&self) -> Vec<Ticket> {
        self.available.values().cloned().collect()
    }

    /// Returns the sold seats in the order they were sold.
    #[must_use]
    pub fn sold_seats(&self) -> &[Seat] {
        &self.sold_seats
    }

    /// Returns whether a seat is currently on sale.
    #[must_use]
    pub fn is_available(&self, seat: Seat) -> bool {
        self.available.contains_key(&seat)
    }

    /// Looks up a sold ticket by its token.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotFound` if no sold ticket has this token.
    pub fn find_sold_ticket(&self, token: &TicketToken) -> Result<&Ticket, DomainError> {
        self.sold.get(token).ok_or(DomainError::TicketNotFound)
    }

    /// Returns a snapshot of the sales figures.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            available_count: self.available.len(),
            sold_count: self.sold.len(),
            current_income: self.current_income,
        }
    }
}

/// The result of a successful inventory transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A seat was sold and this ticket handed out.
    Purchased(Ticket),
    /// A ticket was returned and this seat is back on sale.
    Returned(Seat),
}

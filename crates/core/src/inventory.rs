// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::{Mutex, MutexGuard};

use cinema_domain::{RoomDimensions, Seat, Statistics, Ticket, TicketToken};

use crate::apply::{apply, purchase, return_ticket};
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{InventoryState, TransitionOutcome};
use crate::token::TokenPolicy;

/// The seat inventory of a single room, safe to share between threads.
///
/// A single mutex guards the whole [`InventoryState`]. Every operation takes
/// the lock once, so purchases and returns are serialized and readers never
/// observe a half-applied transition. The lock is never held across an
/// `.await`; callers in async code can use the inventory directly.
#[derive(Debug)]
pub struct RoomInventory {
    dimensions: RoomDimensions,
    token_policy: TokenPolicy,
    state: Mutex<InventoryState>,
}

impl RoomInventory {
    /// Creates an inventory with every seat available, reusing tokens on return.
    ///
    /// # Arguments
    ///
    /// * `dimensions` - The validated room size
    #[must_use]
    pub fn new(dimensions: RoomDimensions) -> Self {
        Self::with_token_policy(dimensions, TokenPolicy::default())
    }

    /// Creates an inventory with an explicit token policy.
    ///
    /// # Arguments
    ///
    /// * `dimensions` - The validated room size
    /// * `token_policy` - What happens to a token when its ticket is returned
    #[must_use]
    pub fn with_token_policy(dimensions: RoomDimensions, token_policy: TokenPolicy) -> Self {
        Self {
            dimensions,
            token_policy,
            state: Mutex::new(InventoryState::new(dimensions)),
        }
    }

    /// Returns the room dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> RoomDimensions {
        self.dimensions
    }

    /// Returns the token policy in effect.
    #[must_use]
    pub const fn token_policy(&self) -> TokenPolicy {
        self.token_policy
    }

    /// Lists the seats currently on sale, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the inventory lock is poisoned.
    pub fn list_available_seats(&self) -> Result<Vec<Seat>, CoreError> {
        Ok(self.lock()?.available_seats())
    }

    /// Lists the unsold tickets, in row-major seat order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the inventory lock is poisoned.
    pub fn available_tickets(&self) -> Result<Vec<Ticket>, CoreError> {
        Ok(self.lock()?.available_tickets())
    }

    /// Lists the sold seats in the order they were sold.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the inventory lock is poisoned.
    pub fn sold_seats(&self) -> Result<Vec<Seat>, CoreError> {
        Ok(self.lock()?.sold_seats().to_vec())
    }

    /// Looks up a sold ticket without changing anything.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TicketNotFound` if no sold ticket has this token,
    /// or `CoreError::Internal` if the inventory lock is poisoned.
    pub fn find_sold_ticket(&self, token: &TicketToken) -> Result<Ticket, CoreError> {
        Ok(self.lock()?.find_sold_ticket(token)?.clone())
    }

    /// Purchases the ticket for a seat.
    ///
    /// The returned ticket is the one minted for the seat when the room was
    /// built (or when it was last returned under `FreshPerSale`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The seat lies outside the room (`SeatNotFound`)
    /// - The seat has already been sold (`SeatUnavailable`)
    /// - The inventory lock is poisoned
    pub fn purchase(&self, seat: Seat) -> Result<Ticket, CoreError> {
        purchase(&mut *self.lock()?, seat)
    }

    /// Returns a sold ticket and puts its seat back on sale.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No sold ticket carries the token (`TicketNotFound`)
    /// - The inventory lock is poisoned
    pub fn return_ticket(&self, token: &TicketToken) -> Result<Seat, CoreError> {
        return_ticket(&mut *self.lock()?, token, self.token_policy)
    }

    /// Applies an arbitrary command under the inventory lock.
    ///
    /// # Errors
    ///
    /// Returns any error produced by [`apply`], or `CoreError::Internal` if
    /// the inventory lock is poisoned.
    pub fn execute(&self, command: Command) -> Result<TransitionOutcome, CoreError> {
        apply(&mut *self.lock()?, command, self.token_policy)
    }

    /// Returns a consistent snapshot of the sales figures.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the inventory lock is poisoned.
    pub fn statistics(&self) -> Result<Statistics, CoreError> {
        Ok(self.lock()?.statistics())
    }

    /// Returns a copy of the full inventory state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the inventory lock is poisoned.
    pub fn snapshot(&self) -> Result<InventoryState, CoreError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, InventoryState>, CoreError> {
        self.state
            .lock()
            .map_err(|_| CoreError::Internal(String::from("inventory lock poisoned")))
    }
}

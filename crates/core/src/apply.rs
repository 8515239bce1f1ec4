// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cinema_domain::{DomainError, Seat, Ticket, TicketToken};

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{InventoryState, TransitionOutcome};
use crate::token::TokenPolicy;

/// Applies a command to the inventory state.
///
/// All checks happen before any field is touched, so a failed command
/// leaves the state exactly as it was.
///
/// # Arguments
///
/// * `state` - The inventory state to transition
/// * `command` - The command to apply
/// * `policy` - What to do with the token of a returned ticket
///
/// # Returns
///
/// * `Ok(TransitionOutcome::Purchased)` with the sold ticket
/// * `Ok(TransitionOutcome::Returned)` with the freed seat
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The seat lies outside the room (`SeatNotFound`)
/// - The seat has already been sold (`SeatUnavailable`)
/// - No sold ticket carries the token (`TicketNotFound`)
pub fn apply(
    state: &mut InventoryState,
    command: Command,
    policy: TokenPolicy,
) -> Result<TransitionOutcome, CoreError> {
    match command {
        Command::PurchaseSeat { seat } => purchase(state, seat).map(TransitionOutcome::Purchased),
        Command::ReturnTicket { token } => {
            return_ticket(state, &token, policy).map(TransitionOutcome::Returned)
        }
    }
}

/// Moves a seat's ticket from the available partition to the sold one.
pub(crate) fn purchase(state: &mut InventoryState, seat: Seat) -> Result<Ticket, CoreError> {
    if !state.dimensions.contains(seat) {
        return Err(CoreError::DomainViolation(DomainError::SeatNotFound {
            row: seat.row(),
            column: seat.column(),
        }));
    }

    let ticket: Ticket = state.available.remove(&seat).ok_or(CoreError::DomainViolation(
        DomainError::SeatUnavailable {
            row: seat.row(),
            column: seat.column(),
        },
    ))?;

    state.current_income += u64::from(ticket.price());
    state.sold_seats.push(seat);
    state.sold.insert(ticket.token().clone(), ticket.clone());

    Ok(ticket)
}

/// Moves a sold ticket back to the available partition.
pub(crate) fn return_ticket(
    state: &mut InventoryState,
    token: &TicketToken,
    policy: TokenPolicy,
) -> Result<Seat, CoreError> {
    let ticket: Ticket = state
        .sold
        .remove(token)
        .ok_or(CoreError::DomainViolation(DomainError::TicketNotFound))?;
    let seat: Seat = ticket.seat();

    state.current_income -= u64::from(ticket.price());
    state.sold_seats.retain(|sold| *sold != seat);
    state.available.insert(seat, policy.restock(ticket));

    Ok(seat)
}

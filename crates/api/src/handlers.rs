// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use cinema::RoomInventory;
use cinema_domain::{RoomDimensions, Seat, Statistics, Ticket, TicketToken};
use tracing::{debug, warn};

use crate::auth::StatsAuthenticator;
use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    ListSeatsResponse, PurchaseTicketRequest, PurchaseTicketResponse, ReturnTicketRequest,
    ReturnTicketResponse, SeatInfo, StatisticsResponse,
};

/// Lists the room dimensions together with every seat still on sale.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the inventory cannot be read.
pub fn list_seats(inventory: &RoomInventory) -> Result<ListSeatsResponse, ApiError> {
    let dimensions: RoomDimensions = inventory.dimensions();
    let seats: Vec<Seat> = inventory
        .list_available_seats()
        .map_err(translate_core_error)?;

    Ok(ListSeatsResponse {
        total_rows: dimensions.total_rows(),
        total_columns: dimensions.total_columns(),
        available_seats: seats.into_iter().map(SeatInfo::from).collect(),
    })
}

/// Buys the ticket for the requested seat.
///
/// # Arguments
///
/// * `inventory` - The room inventory
/// * `request` - The seat to buy
///
/// # Errors
///
/// Returns an error if:
/// - The seat is outside the room (`InvalidInput`)
/// - The seat has already been sold (`DomainRuleViolation`)
/// - The inventory cannot be accessed (`Internal`)
pub fn purchase_ticket(
    inventory: &RoomInventory,
    request: &PurchaseTicketRequest,
) -> Result<PurchaseTicketResponse, ApiError> {
    let seat: Seat = Seat::new(request.row, request.column);
    let ticket: Ticket = inventory.purchase(seat).map_err(translate_core_error)?;

    debug!(
        row = seat.row(),
        column = seat.column(),
        price = ticket.price(),
        "Ticket purchased"
    );

    Ok(PurchaseTicketResponse::from(&ticket))
}

/// Returns a purchased ticket and frees its seat.
///
/// # Arguments
///
/// * `inventory` - The room inventory
/// * `request` - The token of the ticket to return
///
/// # Errors
///
/// Returns an error if:
/// - No sold ticket carries the token (`InvalidInput`)
/// - The inventory cannot be accessed (`Internal`)
pub fn return_ticket(
    inventory: &RoomInventory,
    request: &ReturnTicketRequest,
) -> Result<ReturnTicketResponse, ApiError> {
    let token: TicketToken = TicketToken::new(request.token.as_str());
    let seat: Seat = inventory
        .return_ticket(&token)
        .map_err(translate_core_error)?;

    debug!(row = seat.row(), column = seat.column(), "Ticket returned");

    Ok(ReturnTicketResponse {
        returned_ticket: SeatInfo::from(seat),
    })
}

/// Reads the sales statistics after checking the password.
///
/// # Arguments
///
/// * `inventory` - The room inventory
/// * `authenticator` - The configured statistics password check
/// * `password` - The password supplied by the caller, if any
///
/// # Errors
///
/// Returns an error if:
/// - The password is missing or wrong (`AuthenticationFailed`)
/// - The inventory cannot be accessed (`Internal`)
pub fn get_statistics(
    inventory: &RoomInventory,
    authenticator: &StatsAuthenticator,
    password: Option<&str>,
) -> Result<StatisticsResponse, ApiError> {
    if let Err(err) = authenticator.authenticate(password) {
        warn!(
            password_supplied = password.is_some(),
            "Rejected statistics request"
        );
        return Err(err.into());
    }

    let stats: Statistics = inventory.statistics().map_err(translate_core_error)?;
    Ok(StatisticsResponse::from(stats))
}
